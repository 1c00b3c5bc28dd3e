//! Configuration for the puzzle host.

/// Configuration for the puzzle host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// RNG seed for reproducible word grids.
    pub seed: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl PuzzleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(PuzzleConfig::default().seed, 42);
        assert_eq!(PuzzleConfig::default().with_seed(7).seed, 7);
    }
}
