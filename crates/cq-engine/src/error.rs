use cq_core::CoreError;

use crate::evaluator::GameStatus;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from the game engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The input is neither a menu command nor a command of this location.
    #[error("unknown command: \"{input}\"{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        /// The input as typed.
        input: String,
        /// The closest available command, if any is close enough.
        suggestion: Option<String>,
    },

    /// The game has ended; no further commands are accepted.
    #[error("the game is over ({0})")]
    GameOver(GameStatus),

    /// A world lookup failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(command) => format!(" (did you mean \"{command}\"?)"),
        None => String::new(),
    }
}
