//! Classification of player input.

/// A classified player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the current location's long description.
    Look,
    /// List the inventory.
    Inventory,
    /// Show the score.
    Score,
    /// Show the moves remaining.
    Moves,
    /// Undo the last turn.
    Undo,
    /// Show the event history.
    Log,
    /// Show the menu vocabulary and the location's commands.
    Help,
    /// End the game.
    Quit,
    /// Drop an item.
    Drop {
        /// Item name; `None` when the player typed a bare `drop`.
        item: Option<String>,
    },
    /// Anything else, resolved against the location's command table.
    Action {
        /// The normalized input.
        command: String,
    },
}

/// Menu vocabulary, available everywhere.
pub const MENU_WORDS: &[&str] = &[
    "look",
    "inventory",
    "score",
    "moves",
    "undo",
    "log",
    "drop",
    "help",
    "quit",
];

const INVENTORY_WORDS: &[&str] = &["inventory", "inv", "i"];
const QUIT_WORDS: &[&str] = &["quit", "q"];

/// Classify a line of input. Input is trimmed and lower-cased.
///
/// Menu words must be the whole input, except `drop`, which takes the rest
/// of the line as the item name. Blank input is an empty action, which no
/// location accepts.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    if INVENTORY_WORDS.contains(&input.as_str()) {
        return Command::Inventory;
    }
    if QUIT_WORDS.contains(&input.as_str()) {
        return Command::Quit;
    }

    match input.as_str() {
        "look" => return Command::Look,
        "score" => return Command::Score,
        "moves" => return Command::Moves,
        "undo" => return Command::Undo,
        "log" => return Command::Log,
        "help" => return Command::Help,
        "drop" => return Command::Drop { item: None },
        _ => {}
    }

    if let Some(rest) = input.strip_prefix("drop ") {
        let item = rest.trim();
        return Command::Drop {
            item: (!item.is_empty()).then(|| item.to_string()),
        };
    }

    Command::Action { command: input }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_words() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("  SCORE "), Command::Score);
        assert_eq!(parse_command("moves"), Command::Moves);
        assert_eq!(parse_command("undo"), Command::Undo);
        assert_eq!(parse_command("log"), Command::Log);
        assert_eq!(parse_command("help"), Command::Help);
    }

    #[test]
    fn aliases() {
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("Quit"), Command::Quit);
    }

    #[test]
    fn blank_input_is_an_empty_action() {
        let empty = Command::Action {
            command: String::new(),
        };
        assert_eq!(parse_command(""), empty);
        assert_eq!(parse_command("   "), empty);
    }

    #[test]
    fn drop_with_and_without_item() {
        assert_eq!(parse_command("drop"), Command::Drop { item: None });
        assert_eq!(
            parse_command("Drop T-Card"),
            Command::Drop {
                item: Some("t-card".to_string())
            }
        );
        assert_eq!(
            parse_command("drop   lucky uoft mug  "),
            Command::Drop {
                item: Some("lucky uoft mug".to_string())
            }
        );
    }

    #[test]
    fn everything_else_is_an_action() {
        assert_eq!(
            parse_command("Go East"),
            Command::Action {
                command: "go east".to_string()
            }
        );
        assert_eq!(
            parse_command("look at desk"),
            Command::Action {
                command: "look at desk".to_string()
            }
        );
        assert_eq!(
            parse_command("dropkick"),
            Command::Action {
                command: "dropkick".to_string()
            }
        );
    }
}
