//! Turning engine responses into terminal text.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use cq_core::{ItemId, LocationId, World};
use cq_engine::{EventLog, GameStatus, PlayerState, PuzzleReport, Response, UndoReport};

/// How text reaches the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub color: bool,
    pub typewriter: Duration,
}

impl Presentation {
    pub fn new(color: bool, typewriter_ms: u64) -> Self {
        Self {
            color,
            typewriter: Duration::from_millis(typewriter_ms),
        }
    }

    /// Plain output for scripted runs.
    pub fn plain() -> Self {
        Self::new(false, 0)
    }

    /// Make the `colored` crate follow this presentation.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Print a line, one character at a time when a typewriter delay is set.
    pub fn say(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = type_out(&mut stdout, text, self.typewriter).and_then(|()| writeln!(stdout));
    }
}

/// Write `text` with `delay` between characters.
pub fn type_out<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return out.write_all(text.as_bytes());
    }
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        if !ch.is_whitespace() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn item_name(world: &World, id: ItemId) -> String {
    world
        .item(id)
        .map(|item| item.name.clone())
        .unwrap_or_else(|_| format!("item {id}"))
}

fn location_heading(world: &World, id: LocationId) -> String {
    match world.location(id) {
        Ok(location) => location.name.clone(),
        Err(_) => format!("location {id}"),
    }
}

/// Describe a location as `look` shows it.
pub fn describe(world: &World, id: LocationId, first_visit: bool) -> String {
    match world.location(id) {
        Ok(location) => format!(
            "{}\n{}",
            location.name.bold(),
            location.arrival_description(first_visit)
        ),
        Err(_) => format!("location {id}"),
    }
}

/// Text for one response.
pub fn response(world: &World, log: &EventLog, response: &Response) -> String {
    match response {
        Response::Moved {
            to,
            first_visit,
            arrival,
            ..
        } => {
            let mut text = describe(world, *to, *first_visit);
            let reaction = arrival
                .as_ref()
                .map(|report| puzzle(world, report))
                .unwrap_or_default();
            if !reaction.is_empty() {
                text.push('\n');
                text.push_str(&reaction);
            }
            text
        }
        Response::Blocked { command, required } => format!(
            "You can't {command} without the {}.",
            item_name(world, *required)
        )
        .yellow()
        .to_string(),
        Response::PickedUp(id) => {
            let mut text = format!("You picked up the {}.", item_name(world, *id));
            if let Some(item) = world.item(*id).ok().filter(|i| !i.description.is_empty()) {
                text.push('\n');
                text.push_str(&item.description);
            }
            text
        }
        Response::AlreadyHeld(id) => {
            format!("You already have the {}.", item_name(world, *id))
        }
        Response::NothingToPickUp { command } => {
            format!("There is nothing here for \"{command}\".")
        }
        Response::Dropped(id) => format!("You dropped the {}.", item_name(world, *id)),
        Response::DropWhat => "Drop what?".to_string(),
        Response::NotHeld(name) => format!("You are not carrying \"{name}\"."),
        Response::Special(report) => puzzle(world, report),
        Response::Look(id) => describe(world, *id, true),
        Response::Inventory(items) if items.is_empty() => "Your inventory is empty.".to_string(),
        Response::Inventory(items) => {
            let mut text = "You are carrying:".to_string();
            for id in items {
                text.push_str(&format!("\n  - {}", item_name(world, *id)));
            }
            text
        }
        Response::Score(score) => format!("Score: {score}"),
        Response::Moves(moves) => format!("Moves remaining: {moves}"),
        Response::Log => log.to_string().trim_end().to_string(),
        Response::Help(commands) => {
            let mut text = "Available commands:".bold().to_string();
            for command in commands {
                text.push_str(&format!("\n  {command}"));
            }
            text
        }
        Response::Undone(report) => undone(world, report),
        Response::NothingToUndo => "There is nothing to undo.".to_string(),
        Response::NoPreviousLocation => "There is no previous location to go back to.".to_string(),
        Response::Quit => "Goodbye!".to_string(),
    }
}

fn puzzle(world: &World, report: &PuzzleReport) -> String {
    if report.puzzle.is_none() {
        return "Nothing happens.".to_string();
    }

    let outcome = &report.outcome;
    let mut lines = Vec::new();
    if outcome.solved {
        lines.push("Solved!".green().bold().to_string());
    }
    if let Some(id) = report.granted {
        lines.push(format!("You received the {}.", item_name(world, id)));
    }
    if outcome.score_delta != 0 {
        lines.push(format!("{:+} points", outcome.score_delta));
    }
    if outcome.moves_delta != 0 {
        lines.push(format!("{:+} moves", outcome.moves_delta).dimmed().to_string());
    }
    lines.join("\n")
}

fn undone(world: &World, report: &UndoReport) -> String {
    let mut text = match report.item {
        Some(id) => format!("Undid {} of the {}.", report.kind, item_name(world, id)),
        None => format!("Undid {}.", report.kind),
    };
    text.push_str(&format!(
        " You are at {}.",
        location_heading(world, report.location)
    ));
    if report.moves_restored > 0 {
        text.push_str(&format!(" (+{} moves)", report.moves_restored));
    }
    text
}

/// Lines for items that earned delivery points.
pub fn awarded(world: &World, items: &[ItemId], points: u32) -> Vec<String> {
    items
        .iter()
        .map(|id| {
            format!("Delivered the {}! +{points} points", item_name(world, *id))
                .green()
                .to_string()
        })
        .collect()
}

/// Closing message for a finished game.
pub fn ending(status: GameStatus, player: &PlayerState) -> String {
    match status {
        GameStatus::Won => format!(
            "{}\nFinal score: {}, with {} moves to spare.",
            "Project submitted. You win!".green().bold(),
            player.score,
            player.moves
        ),
        GameStatus::Lost => format!(
            "{}\nFinal score: {}.",
            "You ran out of moves. The deadline has passed.".red().bold(),
            player.score
        ),
        GameStatus::Quit => format!("Final score: {}.", player.score),
        GameStatus::Ongoing | GameStatus::AwaitingConfirmation => String::new(),
    }
}
