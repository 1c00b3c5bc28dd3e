//! Player I/O used by puzzles.

use std::collections::VecDeque;
use std::time::Duration;

/// How a puzzle talks to the player.
pub trait Console {
    /// Show a line of text.
    fn say(&mut self, text: &str);

    /// Prompt for a line of input. `None` means the input is closed.
    fn ask(&mut self, prompt: &str) -> Option<String>;

    /// Measure the time between two Enter presses.
    ///
    /// `None` means the input is closed.
    fn timed_enter(&mut self, start_prompt: &str, stop_prompt: &str) -> Option<Duration>;
}

/// A console that replays canned answers and records everything said.
///
/// Timed prompts consume one answer, read as a number of seconds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will give these answers in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue more answers.
    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Everything said and asked so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any transcript line contains the text.
    pub fn heard(&self, text: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(text))
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        let answer = self.answers.pop_front()?;
        self.transcript.push(format!("{prompt}{answer}"));
        Some(answer)
    }

    fn timed_enter(&mut self, start_prompt: &str, stop_prompt: &str) -> Option<Duration> {
        let answer = self.answers.pop_front()?;
        self.transcript.push(start_prompt.to_string());
        self.transcript.push(format!("{stop_prompt}{answer}"));
        let seconds = answer.trim().parse::<f64>().unwrap_or(0.0);
        Some(Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO))
    }
}
