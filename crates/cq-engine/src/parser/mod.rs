//! Command parsing and command suggestion.

mod command;
mod resolver;

pub use command::{Command, MENU_WORDS, parse_command};
pub use resolver::{fuzzy_match, suggest_command};
