//! Fuzzy matching of mistyped commands.

use cq_core::Location;
use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Commands of a location similar to the input, best first.
pub fn fuzzy_match(location: &Location, input: &str, threshold: f64) -> Vec<(String, f64)> {
    let input_lower = input.trim().to_lowercase();
    let mut matches: Vec<(String, f64)> = location
        .available_commands
        .keys()
        .filter_map(|command| {
            let score = jaro_winkler(&input_lower, &command.to_lowercase());
            (score >= threshold).then(|| (command.clone(), score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// The closest command of a location, if any is close enough.
pub fn suggest_command(location: &Location, input: &str) -> Option<String> {
    fuzzy_match(location, input, FUZZY_THRESHOLD)
        .into_iter()
        .next()
        .map(|(command, _)| command)
}
