use std::path::Path;

use colored::Colorize;
use cq_engine::{EngineError, GameStatus};
use cq_puzzles::{PuzzleConfig, Puzzles, ScriptedConsole};

use super::Overrides;
use crate::render::{self, Presentation};

pub fn run(
    data: &Path,
    overrides: Overrides,
    seed: u64,
    answers: &[String],
    script: &[String],
    verbose: bool,
) -> Result<(), String> {
    Presentation::plain().apply();
    let mut session = super::start_session(data, overrides)?;
    let mut host = Puzzles::new(
        ScriptedConsole::new(answers.iter().cloned()),
        &PuzzleConfig::default().with_seed(seed),
    );

    let mut rejected = 0usize;
    for input in script {
        if session.status() == GameStatus::AwaitingConfirmation
            && session.confirm(input) == GameStatus::Won
        {
            break;
        }

        match session.process(input, &mut host) {
            Ok(turn) => {
                if verbose {
                    println!("> {input}");
                    println!(
                        "{}",
                        render::response(session.world(), session.log(), &turn.response)
                    );
                }
            }
            Err(e @ EngineError::UnknownCommand { .. }) => {
                rejected += 1;
                println!("  {} {e}", "skipped:".yellow());
            }
            Err(EngineError::GameOver(status)) => {
                println!("  {} game already {status}", "stopped:".yellow());
                break;
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    if verbose {
        for line in host.console().transcript() {
            println!("  | {line}");
        }
    }

    let ids: Vec<String> = session
        .log()
        .id_sequence()
        .map(|id| id.to_string())
        .collect();
    let player = session.player();

    println!("[{}]", ids.join(", "));
    println!(
        "  {} {} | score {} | moves {} | {} rejected",
        "Status:".bold(),
        session.status(),
        player.score,
        player.moves,
        rejected
    );
    if host.console().remaining() > 0 {
        println!("  {} unused answers", host.console().remaining());
    }

    Ok(())
}
