//! The librarian's word-association grid.

use std::collections::BTreeSet;

use cq_engine::{PuzzleContext, PuzzleOutcome};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::{Puzzle, Tally};
use crate::console::Console;

/// The hidden categories and their words.
pub const CATEGORIES: [(&str, [&str; 4]); 4] = [
    ("Two of a Kind", ["Binary", "Twin", "Pair", "Clone"]),
    (
        "97th Oscar Nominated Films",
        ["Conclave", "Wicked", "Anora", "Nosferatu"],
    ),
    (
        "Having 8 of Something",
        ["Octopus", "Arachnids", "Octagon", "Medium pizza slices"],
    ),
    (
        "One__",
        ["Way Ticket", "Size Fits All", "Night Stand", "Hit Wonder"],
    ),
];

/// Wrong groupings allowed.
pub const MAX_MISTAKES: u32 = 5;
/// Moves lost per wrong grouping.
pub const MISTAKE_COST: u32 = 2;
/// Room the roommate is hiding in.
pub const ROOM_NUMBER: &str = "212789";
/// Attempts at the room number.
pub const ROOM_TRIES: u32 = 3;
/// Moves lost per wrong room number.
pub const ROOM_COST: u32 = 1;

/// Sixteen words in a shuffled four-by-four grid.
#[derive(Debug, Clone)]
pub struct WordAssociation {
    grid: Vec<&'static str>,
}

impl WordAssociation {
    /// A grid shuffled with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut grid: Vec<&'static str> = CATEGORIES
            .iter()
            .flat_map(|(_, words)| words.iter().copied())
            .collect();
        grid.shuffle(rng);
        Self { grid }
    }

    /// The grid in display order.
    pub fn grid(&self) -> &[&'static str] {
        &self.grid
    }

    fn show_grid(&self, console: &mut dyn Console, solved: &BTreeSet<usize>) {
        let solved_words: BTreeSet<&str> = solved
            .iter()
            .flat_map(|&index| CATEGORIES[index].1.iter().copied())
            .collect();
        for row in self.grid.chunks(4) {
            let cells: Vec<String> = row
                .iter()
                .map(|word| {
                    if solved_words.contains(word) {
                        format!("{:<20}", word.to_uppercase())
                    } else {
                        format!("{word:<20}")
                    }
                })
                .collect();
            console.say(cells.join(" ").trim_end());
        }
    }

    /// Ask for the room number once every category is found.
    fn room_number(console: &mut dyn Console, tally: &mut Tally) -> bool {
        console.say(
            "Librarian: Ah, sharper than I took you for at first glance!\n\
             Arrange the numbers in those categories ascendingly, \
             and your roommate's location is hidden that way!",
        );
        for _ in 0..ROOM_TRIES {
            let Some(guess) =
                console.ask("Which study room do you think your roommate is in? (hint: 2XXXXX) ")
            else {
                return false;
            };
            if guess.trim() == ROOM_NUMBER {
                console.say("Correct! Let's take our journey there!");
                return true;
            }
            console.say("Not quite there... Try again!");
            tally.spend(ROOM_COST);
            if tally.exhausted() {
                return false;
            }
        }
        false
    }
}

/// Parse a comma-separated guess into four lower-case words.
fn parse_guess(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Largest number of guessed words sharing one unsolved category.
fn best_overlap(guess: &[String], solved: &BTreeSet<usize>) -> usize {
    CATEGORIES
        .iter()
        .enumerate()
        .filter(|(index, _)| !solved.contains(index))
        .map(|(_, (_, words))| {
            words
                .iter()
                .filter(|word| guess.contains(&word.to_lowercase()))
                .count()
        })
        .max()
        .unwrap_or(0)
}

impl Puzzle for WordAssociation {
    fn play(&mut self, console: &mut dyn Console, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        let mut tally = Tally::new(ctx);
        console.say(
            "Librarian: Ah, I see you're on a quest for something important. But not so fast.\n\
             Here are 16 words. Group them into 4 categories based on their hidden connections.",
        );
        console.say(&format!(
            "You have {MAX_MISTAKES} wrong guesses to figure out all the categories."
        ));
        if console.ask("Press Enter to begin..").is_none() {
            return Some(tally.failure());
        }

        let mut solved: BTreeSet<usize> = BTreeSet::new();
        let mut mistakes = 0;
        self.show_grid(console, &solved);

        while mistakes < MAX_MISTAKES && solved.len() < CATEGORIES.len() {
            let mut remaining: Vec<&str> = self
                .grid
                .iter()
                .copied()
                .filter(|word| {
                    !solved
                        .iter()
                        .any(|&index| CATEGORIES[index].1.contains(word))
                })
                .collect();
            remaining.sort_unstable();
            console.say(&format!("Current words: {}", remaining.join(", ")));

            let Some(input) =
                console.ask("Enter 4 words you think belong together, separated by commas: ")
            else {
                return Some(tally.failure());
            };
            let guess = parse_guess(&input);
            let valid = guess.len() == 4
                && guess
                    .iter()
                    .all(|word| remaining.iter().any(|r| r.to_lowercase() == *word));
            if !valid {
                console.say("Librarian: Hmm... That doesn't seem quite right. Try again.");
                continue;
            }

            match best_overlap(&guess, &solved) {
                4 => {
                    if let Some(index) = (0..CATEGORIES.len())
                        .find(|index| !solved.contains(index) && {
                            CATEGORIES[*index]
                                .1
                                .iter()
                                .all(|word| guess.contains(&word.to_lowercase()))
                        })
                    {
                        solved.insert(index);
                        console.say(&format!(
                            "Librarian: Well done! You discovered the category: {}.",
                            CATEGORIES[index].0
                        ));
                    }
                }
                overlap => {
                    console.say(match overlap {
                        3 => "Librarian: So close! One of your words is incorrect.",
                        2 => "Librarian: Almost there! Two of your words are incorrect.",
                        1 => "Librarian: Almost there! Three of your words are incorrect.",
                        _ => "Librarian: Hmmm.. that is not a category I had in mind. Try again!",
                    });
                    mistakes += 1;
                    tally.spend(MISTAKE_COST);
                    if tally.exhausted() {
                        return Some(tally.failure());
                    }
                }
            }

            self.show_grid(console, &solved);
        }

        debug!(solved = solved.len(), mistakes, "word association");
        if solved.len() < CATEGORIES.len() {
            console.say("Game Over! Better luck next time.");
            return Some(tally.failure());
        }

        console.say("Congratulations! You've solved all categories!");
        for &index in &solved {
            console.say(&format!("- {}", CATEGORIES[index].0));
        }
        if !Self::room_number(console, &mut tally) {
            return Some(tally.failure());
        }

        console.say(
            "Roommate: OMG! You finally made it! Here's your laptop charger.\n\
             Roommate: You should check out the spot where Books, All-nighters, Hackers, \
             Energy and Never-ending inspiration meet.",
        );
        Some(tally.success(ctx, 0))
    }
}
