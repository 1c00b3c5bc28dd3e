//! Ask the barista about the mug, then sort out the mixed-up orders.

use cq_engine::{PuzzleContext, PuzzleOutcome};
use tracing::debug;

use super::{Puzzle, Tally};
use crate::console::Console;

/// Order number printed on the receipt.
pub const ORDER_NUMBER: &str = "7069";
/// Attempts at the order number.
pub const ORDER_TRIES: u32 = 3;
/// Attempts at matching the mugs.
pub const MATCH_TRIES: u32 = 3;
/// Moves lost per off-topic question or wrong order number.
pub const QUESTION_COST: u32 = 1;
/// Moves lost per wrong matching.
pub const MATCH_COST: u32 = 2;

/// Customers, their drinks, and the mug each one got.
pub const SOLUTION: [(&str, &str, &str); 4] = [
    ("A", "Latte", "cat"),
    ("B", "Cappuccino", "green"),
    ("C", "Vanilla latte", "pink"),
    ("D", "Espresso", "uoft"),
];

const CLUES: [&str; 6] = [
    "The person who ordered the espresso definitely doesn't have the pink mug.",
    "The cat mug was used by the person who ordered latte.",
    "The person who has the UofT mug is not the one who ordered the cappuccino.",
    "The person who ordered vanilla latte definitely doesn't have the green mug.",
    "Customer C didn't get the cat mug.",
    "The pink mug belongs to the person who ordered the vanilla latte.",
];

/// The Starbucks barista's mug puzzle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MugMatch;

impl MugMatch {
    /// Keep asking until the question mentions the mug.
    fn question(console: &mut dyn Console, tally: &mut Tally) -> bool {
        loop {
            let Some(question) = console.ask("Enter your question: ") else {
                return false;
            };
            if question.to_lowercase().contains("mug") {
                console.say(
                    "Barista: Oh! You're looking for a mug? That sounds familiar...\n\
                     But first, can you give me your order number for confirmation?",
                );
                return true;
            }
            console.say(
                "Barista: Hmm... I don't think I can help with that. \
                 Are you sure you're asking about the right thing?",
            );
            tally.spend(QUESTION_COST);
            if tally.exhausted() {
                return false;
            }
        }
    }

    fn order_number(console: &mut dyn Console, tally: &mut Tally) -> bool {
        for attempts_left in (0..ORDER_TRIES).rev() {
            let Some(answer) = console.ask("Please type in your order number: ") else {
                return false;
            };
            if answer.trim() == ORDER_NUMBER {
                console.say(
                    "Barista: Got it! Your mug should be here... but the mugs are all jumbled.\n\
                     Can you help me figure out which one is yours?",
                );
                return true;
            }
            tally.spend(QUESTION_COST);
            if attempts_left == 0 || tally.exhausted() {
                break;
            }
            console.say(&format!(
                "Barista: Oops, that doesn't seem right. You have {attempts_left} attempts left."
            ));
        }
        console.say(
            "Barista: Hmm... I don't think I can help without the right number. \
             Maybe check your receipt and come back?",
        );
        false
    }

    fn accept(console: &mut dyn Console) -> bool {
        loop {
            match console.ask("What do you say? (Answer yes/no): ") {
                None => return false,
                Some(answer) => match answer.trim().to_lowercase().as_str() {
                    "yes" => return true,
                    "no" => {
                        console.say("Barista: Well... looks like your mug is on its own adventure!");
                        return false;
                    }
                    _ => console.say("Barista: Hmm, I didn't quite get that. Please answer with 'yes' or 'no'!"),
                },
            }
        }
    }

    fn match_mugs(console: &mut dyn Console, tally: &mut Tally) -> bool {
        console.say("PUZZLE: Help the barista match customers with their mugs!");
        for clue in CLUES {
            console.say(&format!("- {clue}"));
        }

        for attempts_left in (1..=MATCH_TRIES).rev() {
            console.say(&format!("You have {attempts_left} attempt(s) left."));
            console.say("Options: Green, Pink, UofT, Cat");

            let mut correct = true;
            for (customer, drink, mug) in SOLUTION {
                let prompt =
                    format!("Customer {customer} ({drink}): Which mug does Customer {customer} get? ");
                let Some(guess) = console.ask(&prompt) else {
                    return false;
                };
                correct &= guess.trim().to_lowercase() == mug;
            }

            if correct {
                console.say("Barista: Congrats! You matched all the customers with their mugs correctly!");
                return true;
            }
            console.say("Barista: Oops! Some of your guesses were incorrect. Try again!");
            tally.spend(MATCH_COST);
            if tally.exhausted() {
                return false;
            }
        }
        console.say("Barista: You've used all your attempts! Looks like your mug remains lost in the mix.");
        false
    }
}

impl Puzzle for MugMatch {
    fn play(&mut self, console: &mut dyn Console, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        let mut tally = Tally::new(ctx);
        console.say(
            "Barista: Oh hey! I remember you! You were here pretty late yesterday.\n\
             Did you need help with something? (Hint: try asking about your MUG!)",
        );

        let solved = Self::question(console, &mut tally)
            && Self::order_number(console, &mut tally)
            && Self::accept(console)
            && Self::match_mugs(console, &mut tally);
        debug!(solved, "mug match");

        Some(if solved {
            tally.success(ctx, 0)
        } else {
            tally.failure()
        })
    }
}
