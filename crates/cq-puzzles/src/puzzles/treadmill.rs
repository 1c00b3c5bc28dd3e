//! Run on the treadmill for exactly ten seconds.

use std::ops::RangeInclusive;

use cq_engine::{PuzzleContext, PuzzleOutcome};
use tracing::debug;

use super::{Puzzle, Tally};
use crate::console::Console;

/// Number of runs allowed.
pub const TRIES: u32 = 3;
/// Accepted run length in seconds.
pub const WINDOW: RangeInclusive<f64> = 9.2..=10.8;
/// Moves lost per missed run.
pub const MISS_COST: u32 = 2;
/// Moves spent collecting the reward.
pub const SUCCESS_COST: u32 = 1;

/// Coach Carter's treadmill challenge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Treadmill;

impl Puzzle for Treadmill {
    fn play(&mut self, console: &mut dyn Console, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        let mut tally = Tally::new(ctx);

        console.say(
            "Coach Carter: Well, well, well... I knew you'd be showing up sooner or later.\n\
             Looking for your T-Card, huh? Not on my watch.",
        );
        console.say(&format!(
            "Coach Carter: You're going to run for exactly 10 seconds. \
             Run too long or too short, and you're out! You've got {TRIES} tries."
        ));
        if console.ask("Press Enter to begin your challenge...").is_none() {
            return Some(tally.failure());
        }

        for tries_left in (1..=TRIES).rev() {
            if tally.exhausted() {
                break;
            }
            console.say(&format!("You have {tries_left} tries left!"));
            console.say("Ready... Set... Go!");
            let Some(elapsed) = console.timed_enter(
                "Press Enter to start timing...",
                "Press Enter after exactly 10 seconds...",
            ) else {
                return Some(tally.failure());
            };

            let seconds = (elapsed.as_secs_f64() * 100.0).round() / 100.0;
            debug!(seconds, "treadmill run");
            if WINDOW.contains(&seconds) {
                console.say("Coach Carter: Whoa! Exactly 10 seconds?! You're a natural!");
                console.say("Coach Carter: Well done, you've earned your T-Card back!");
                return Some(tally.success(ctx, SUCCESS_COST));
            }

            console.say(&format!(
                "Coach Carter: Oops! You were {:.2} seconds off... Not quite there.",
                seconds - 10.0
            ));
            tally.spend(MISS_COST);
        }

        console.say("Coach Carter: You've used all your tries... Better luck next time!");
        Some(tally.failure())
    }
}
