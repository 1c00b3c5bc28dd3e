//! Find the Caesar key that opens the Lost and Found.

use cq_engine::{PuzzleContext, PuzzleOutcome};
use tracing::debug;

use super::{Puzzle, Tally};
use crate::console::Console;

/// Message written on the door.
pub const MESSAGE: &str = "BYFFI QILFX";
/// What the message says under the right key.
pub const PLAINTEXT: &str = "HELLO WORLD";
/// Attempts allowed.
pub const ATTEMPTS: u32 = 3;
/// Moves lost per wrong key.
pub const MISS_COST: u32 = 1;
/// Moves spent collecting the reward.
pub const SUCCESS_COST: u32 = 1;

/// Rotate ASCII letters by `shift` places; everything else is kept.
///
/// Output is upper case.
pub fn caesar_shift(text: &str, shift: i64) -> String {
    text.chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                let offset = (i64::from(upper as u8 - b'A') + shift).rem_euclid(26);
                char::from(b'A' + offset as u8)
            } else {
                upper
            }
        })
        .collect()
}

/// Undo a Caesar shift of `key` places.
pub fn caesar_decrypt(text: &str, key: i64) -> String {
    caesar_shift(text, -key.rem_euclid(26))
}

/// The locked Lost and Found door.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cipher;

impl Puzzle for Cipher {
    fn play(&mut self, console: &mut dyn Console, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        let mut tally = Tally::new(ctx);
        console.say(&format!(
            "A note is taped to the door: {MESSAGE}\nThe lock wants a number."
        ));

        let mut attempts = 0;
        while attempts < ATTEMPTS && !tally.exhausted() {
            let Some(answer) = console.ask("Enter the key to unlock the door: ") else {
                return Some(tally.failure());
            };
            let Ok(key) = answer.trim().parse::<i64>() else {
                console.say("Invalid input. Please enter a number.");
                continue;
            };

            let decrypted = caesar_decrypt(MESSAGE, key);
            debug!(key, %decrypted, "cipher attempt");
            if decrypted.contains(PLAINTEXT) {
                console.say(&format!(
                    "Congratulations! You've unlocked the Lost and Found. The message says: {decrypted}"
                ));
                return Some(tally.success(ctx, SUCCESS_COST));
            }

            console.say("The decryption didn't work. Try again.");
            attempts += 1;
            tally.spend(MISS_COST);
        }

        if attempts == ATTEMPTS {
            console.say("Sorry, you've used all your attempts. Better luck next time.");
        } else {
            console.say("Sorry, you've run out of moves. Better luck next time.");
        }
        Some(tally.failure())
    }
}
