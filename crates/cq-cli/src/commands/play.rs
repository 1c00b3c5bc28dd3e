use std::path::Path;

use colored::Colorize;
use cq_engine::parser::MENU_WORDS;
use cq_engine::{EngineError, GameSession, GameStatus, Response, Turn};
use cq_puzzles::{PuzzleConfig, Puzzles};

use super::Overrides;
use crate::render::{self, Presentation};
use crate::terminal::{self, TerminalConsole};

pub fn run(
    data: &Path,
    overrides: Overrides,
    seed: u64,
    name: Option<&str>,
    presentation: &Presentation,
) -> Result<(), String> {
    presentation.apply();
    let mut session = super::start_session(data, overrides)?;
    let mut host = Puzzles::new(
        TerminalConsole::new(presentation.clone()),
        &PuzzleConfig::default().with_seed(seed),
    );

    let greeting = match name {
        Some(name) => format!("Welcome to Campus Quest, {name}!"),
        None => "Welcome to Campus Quest!".to_string(),
    };
    println!("  {}", greeting.bold());
    println!(
        "  Bring {} items to {} within {} moves.",
        session.config().required_items,
        session
            .world()
            .location(session.config().goal_location)
            .map_err(|e| e.to_string())?
            .name,
        session.player().moves
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    presentation.say(&render::describe(
        session.world(),
        session.player().location,
        true,
    ));

    while !session.status().is_terminal() {
        let Some(line) = terminal::read_line("\n> ") else {
            break; // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if session.status() == GameStatus::AwaitingConfirmation
            && session.confirm(input) == GameStatus::Won
        {
            break;
        }

        let Some(mut turn) = step(&mut session, &mut host, input)? else {
            continue;
        };
        if turn.response == Response::DropWhat {
            show(&session, presentation, &turn);
            let Some(item) = terminal::read_line("> ") else {
                break;
            };
            match step(&mut session, &mut host, &format!("drop {}", item.trim()))? {
                Some(next) => turn = next,
                None => continue,
            }
        }
        show(&session, presentation, &turn);
    }

    let ending = render::ending(session.status(), session.player());
    if !ending.is_empty() {
        println!();
        presentation.say(&ending);
    }

    Ok(())
}

/// Run one command. Unknown commands are reported here and yield `None`.
fn step(
    session: &mut GameSession,
    host: &mut Puzzles<TerminalConsole>,
    input: &str,
) -> Result<Option<Turn>, String> {
    match session.process(input, host) {
        Ok(turn) => Ok(Some(turn)),
        Err(e @ EngineError::UnknownCommand { .. }) => {
            println!("{}", e.to_string().yellow());
            let location = session.current_location().map_err(|e| e.to_string())?;
            let commands: Vec<&str> = MENU_WORDS
                .iter()
                .copied()
                .chain(location.available_commands.keys().map(String::as_str))
                .collect();
            println!("Available commands: {}", commands.join(", "));
            Ok(None)
        }
        Err(e) => Err(e.to_string()),
    }
}

fn show(session: &GameSession, presentation: &Presentation, turn: &Turn) {
    presentation.say(&render::response(
        session.world(),
        session.log(),
        &turn.response,
    ));
    for line in render::awarded(
        session.world(),
        &turn.awarded,
        session.config().target_points,
    ) {
        println!("{line}");
    }
    if turn.status == GameStatus::AwaitingConfirmation {
        println!(
            "\nEverything is in place. Type '{}' to finish.",
            session.config().confirmation_phrase.bold()
        );
    }
}
