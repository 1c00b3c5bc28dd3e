//! Flavour text for the CSSU lounge.

use cq_engine::{PuzzleContext, PuzzleOutcome};

use super::Puzzle;
use crate::console::Console;

const EAVESDROP: &str = "As you pass a group of students, you overhear a conversation.\n\
    Student 1: I don't know if I'm cut out for this. There are too many possibilities...\n\
    Student 2: Isn't that how it always goes? We're not living in a world of binary \
    where there are only two truths: 0s and 1s.";

const TABLE_LIGHT: &[&str] = &[
    "A table lamp flickers beside you, switching on and off in an unusual rhythm.",
    "After watching for a few moments, a pattern begins to emerge:",
    "On.",
    "Off.",
    "On.",
    "Off.",
    "Off.",
];

/// Text-only actions. Always succeed and change nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narration;

impl Puzzle for Narration {
    fn play(&mut self, console: &mut dyn Console, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        let command = ctx.command.to_lowercase();
        if command.contains("eavesdrop") {
            console.say(EAVESDROP);
        } else if command.contains("light") {
            for line in TABLE_LIGHT {
                console.say(line);
            }
        } else {
            return None;
        }
        Some(PuzzleOutcome::narrated())
    }
}
