//! The puzzle host the engine calls into.

use cq_core::PuzzleKind;
use cq_engine::{PuzzleContext, PuzzleHost, PuzzleOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::PuzzleConfig;
use crate::console::Console;
use crate::puzzles::{Cipher, MugMatch, Narration, Puzzle, Treadmill, WordAssociation};

/// Runs every puzzle kind against one console.
#[derive(Debug)]
pub struct Puzzles<C> {
    console: C,
    rng: StdRng,
}

impl<C: Console> Puzzles<C> {
    /// Create a host talking through `console`.
    pub fn new(console: C, config: &PuzzleConfig) -> Self {
        Self {
            console,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The console, mutably.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Give the console back.
    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console> PuzzleHost for Puzzles<C> {
    fn attempt(&mut self, kind: PuzzleKind, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        // Puzzles start on the player's request, never on entry.
        if ctx.arriving {
            debug!(puzzle = %kind, command = ctx.command, "arrival ignored");
            return None;
        }
        if ctx
            .reward
            .is_some_and(|reward| !ctx.location.has_item(reward))
        {
            self.console
                .say("You've already been through this. There is nothing more to win here.");
            return None;
        }

        debug!(puzzle = %kind, command = ctx.command, "puzzle started");
        let console: &mut dyn Console = &mut self.console;
        match kind {
            PuzzleKind::Treadmill => Treadmill.play(console, ctx),
            PuzzleKind::MugMatch => MugMatch.play(console, ctx),
            PuzzleKind::WordAssociation => {
                WordAssociation::shuffled(&mut self.rng).play(console, ctx)
            }
            PuzzleKind::Cipher => Cipher.play(console, ctx),
            PuzzleKind::Narration => Narration.play(console, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use cq_core::{ItemId, Location, LocationId};

    fn context<'a>(location: &'a Location, command: &'a str) -> PuzzleContext<'a> {
        PuzzleContext {
            command,
            arriving: false,
            location,
            moves_remaining: 20,
            score: 0,
            inventory: &[],
            reward: Some(ItemId(2)),
            reward_points: 15,
        }
    }

    #[test]
    fn dispatches_by_kind() {
        let door = Location::new(LocationId(12), "Lost and Found", "A locked door.")
            .with_item(ItemId(2));
        let mut host = Puzzles::new(ScriptedConsole::new(["20"]), &PuzzleConfig::default());
        let outcome = host
            .attempt(PuzzleKind::Cipher, &context(&door, "unlock door"))
            .unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.item_granted, Some(ItemId(2)));
        assert_eq!(outcome.score_delta, 15);
        assert_eq!(host.console().remaining(), 0);
    }

    #[test]
    fn arrival_is_ignored_silently() {
        let gym = Location::new(LocationId(8), "Gym", "Treadmills hum.").with_item(ItemId(2));
        let ctx = PuzzleContext {
            arriving: true,
            ..context(&gym, "go west")
        };
        let mut host = Puzzles::new(ScriptedConsole::new(["", "10.0"]), &PuzzleConfig::default());
        assert_eq!(host.attempt(PuzzleKind::Treadmill, &ctx), None);
        let console = host.into_console();
        assert_eq!(console.remaining(), 2);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn claimed_reward_is_not_replayed() {
        let door = Location::new(LocationId(12), "Lost and Found", "An open door.");
        let mut host = Puzzles::new(ScriptedConsole::new(["20"]), &PuzzleConfig::default());
        assert_eq!(
            host.attempt(PuzzleKind::Cipher, &context(&door, "unlock door")),
            None
        );
        assert_eq!(host.into_console().remaining(), 1);
    }

    #[test]
    fn narration_needs_no_reward() {
        let lounge = Location::new(LocationId(11), "CSSU Lounge", "Couches.");
        let ctx = PuzzleContext {
            reward: None,
            ..context(&lounge, "check table light")
        };
        let mut host = Puzzles::new(ScriptedConsole::default(), &PuzzleConfig::default());
        assert_eq!(
            host.attempt(PuzzleKind::Narration, &ctx),
            Some(PuzzleOutcome::narrated())
        );
        assert!(host.console_mut().heard("On."));
    }
}
