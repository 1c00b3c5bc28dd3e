//! Puzzle console backed by the real terminal.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use colored::Colorize;
use cq_puzzles::Console;

use crate::render::Presentation;

/// Print a prompt and read one line from stdin.
///
/// Returns `None` on end of input or a read error.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Talks to the player on stdin and stdout.
pub struct TerminalConsole {
    presentation: Presentation,
}

impl TerminalConsole {
    pub fn new(presentation: Presentation) -> Self {
        Self { presentation }
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, text: &str) {
        self.presentation.say(&text.cyan().to_string());
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        read_line(&format!("{prompt} "))
    }

    fn timed_enter(&mut self, start_prompt: &str, stop_prompt: &str) -> Option<Duration> {
        read_line(&format!("{start_prompt} "))?;
        let started = Instant::now();
        read_line(&format!("{stop_prompt} "))?;
        Some(started.elapsed())
    }
}
