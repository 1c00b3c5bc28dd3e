//! The game session state machine.

use cq_core::{ItemId, Location, LocationId, SpecialAction, World};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::evaluator::{self, GameStatus};
use crate::history::{Event, EventKind, EventLog};
use crate::parser::{Command, MENU_WORDS, parse_command, suggest_command};
use crate::player::PlayerState;
use crate::puzzle::{PuzzleContext, PuzzleHost, PuzzleOutcome};
use crate::response::{PuzzleReport, Response, Turn, UndoReport};

/// A running game.
///
/// Owns the world, the player and the history. Every command goes through
/// [`GameSession::process`]; the current location is always read from the
/// player state at the start of a transition.
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    player: PlayerState,
    log: EventLog,
    config: EngineConfig,
    status: GameStatus,
}

impl GameSession {
    /// Start a game at the configured start location.
    pub fn new(mut world: World, config: EngineConfig) -> EngineResult<Self> {
        world.location(config.goal_location)?;
        let start = world.location_mut(config.start_location)?;
        start.visited = true;
        let description = start.long_description.clone();

        let mut log = EventLog::new();
        log.append(
            Event::new(EventKind::Start, config.start_location).with_description(description),
            None,
        );

        debug!(start = %config.start_location, moves = config.max_moves, "session started");
        let player = PlayerState::new(config.start_location, config.max_moves);
        let status = if player.moves == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        };

        Ok(Self {
            world,
            player,
            log,
            config,
            status,
        })
    }

    /// Start a game configured from the world's own settings.
    pub fn from_world(world: World) -> EngineResult<Self> {
        let config = EngineConfig::from_settings(world.settings());
        Self::new(world, config)
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The history.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// The configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The location the player is in.
    pub fn current_location(&self) -> EngineResult<&Location> {
        Ok(self.world.location(self.player.location)?)
    }

    /// Process one line of player input.
    ///
    /// Unknown commands are returned as [`EngineError::UnknownCommand`]
    /// and change nothing. After a terminal status every call fails with
    /// [`EngineError::GameOver`].
    pub fn process(&mut self, input: &str, host: &mut dyn PuzzleHost) -> EngineResult<Turn> {
        if self.status.is_terminal() {
            return Err(EngineError::GameOver(self.status));
        }

        let response = match parse_command(input) {
            Command::Look => Response::Look(self.player.location),
            Command::Inventory => Response::Inventory(self.player.inventory.clone()),
            Command::Score => Response::Score(self.player.score),
            Command::Moves => Response::Moves(self.player.moves),
            Command::Log => Response::Log,
            Command::Help => Response::Help(self.help()?),
            Command::Undo => self.undo()?,
            Command::Drop { item } => self.drop_item(item)?,
            Command::Quit => Response::Quit,
            Command::Action { command } => self.act(&command, host)?,
        };

        let awarded =
            evaluator::award_targets(&self.world, &mut self.player, self.config.target_points);
        for item in &awarded {
            debug!(item = %item, score = self.player.score, "delivery points awarded");
        }

        self.status = if matches!(response, Response::Quit) {
            GameStatus::Quit
        } else {
            evaluator::evaluate(&self.world, &self.player, &self.config)
        };
        if self.status.is_terminal() {
            info!(
                status = %self.status,
                score = self.player.score,
                moves = self.player.moves,
                "game over"
            );
        }

        Ok(Turn {
            response,
            awarded,
            status: self.status,
        })
    }

    /// Claim the win with the confirmation phrase (case-insensitive).
    ///
    /// Does nothing unless the game is awaiting confirmation.
    pub fn confirm(&mut self, phrase: &str) -> GameStatus {
        if self.status == GameStatus::AwaitingConfirmation
            && phrase.trim().to_lowercase() == self.config.confirmation_phrase.trim().to_lowercase()
        {
            self.status = GameStatus::Won;
            info!(score = self.player.score, moves = self.player.moves, "game won");
        }
        self.status
    }

    fn help(&self) -> EngineResult<Vec<String>> {
        let location = self.current_location()?;
        Ok(MENU_WORDS
            .iter()
            .map(|word| (*word).to_string())
            .chain(location.available_commands.keys().cloned())
            .collect())
    }

    // -----------------------------------------------------------------------
    // Location actions
    // -----------------------------------------------------------------------

    fn act(&mut self, input: &str, host: &mut dyn PuzzleHost) -> EngineResult<Response> {
        let location = self.current_location()?;
        let Some((command, destination)) = location.command(input) else {
            return Err(EngineError::UnknownCommand {
                input: input.to_string(),
                suggestion: suggest_command(location, input),
            });
        };
        let command = command.to_string();
        let handler = location.special.is_handler();

        match destination {
            Some(to) => self.move_to(&command, to, host),
            None if handler => Ok(Response::Special(self.run_puzzle(&command, false, host)?)),
            None => self.pickup(&command),
        }
    }

    fn move_to(
        &mut self,
        command: &str,
        to: LocationId,
        host: &mut dyn PuzzleHost,
    ) -> EngineResult<Response> {
        let from = self.player.location;
        let requirement = self.world.location(from)?.requirement(command);
        if let Some(required) = requirement.filter(|&item| !self.player.has_item(item)) {
            debug!(command, required = %required, "move blocked");
            return Ok(Response::Blocked {
                command: command.to_string(),
                required,
            });
        }

        let destination = self.world.location_mut(to)?;
        let first_visit = !destination.visited;
        destination.visited = true;
        let description = destination.long_description.clone();
        let handler = destination.special.is_handler();

        self.player.location = to;
        let spent = self.player.spend_moves(1);
        self.log.append(
            Event::new(EventKind::Move, to)
                .with_description(description)
                .with_moves_spent(spent),
            Some(command.to_string()),
        );
        debug!(from = %from, to = %to, command, moves = self.player.moves, "moved");

        let arrival = if handler {
            Some(self.run_puzzle(command, true, host)?)
        } else {
            None
        };

        Ok(Response::Moved {
            from,
            to,
            first_visit,
            arrival,
        })
    }

    fn pickup(&mut self, command: &str) -> EngineResult<Response> {
        let here = self.player.location;
        let needle = command.to_lowercase();
        let found = self.named_in(&self.world.location(here)?.items, &needle);
        let held = self.named_in(&self.player.inventory, &needle);

        match (found, held) {
            (Some(item), _) => {
                self.world.take_item(here, item)?;
                self.player.add_item(item);
                self.log.append(
                    Event::new(EventKind::Pickup, here).with_item(item),
                    Some(command.to_string()),
                );
                debug!(item = %item, location = %here, "picked up");
                Ok(Response::PickedUp(item))
            }
            (None, Some(item)) => Ok(Response::AlreadyHeld(item)),
            (None, None) => Ok(Response::NothingToPickUp {
                command: command.to_string(),
            }),
        }
    }

    /// First item in `items` whose name occurs in `text`.
    fn named_in(&self, items: &[ItemId], text: &str) -> Option<ItemId> {
        items.iter().copied().find(|&id| {
            self.world
                .item(id)
                .is_ok_and(|item| text.contains(&item.name.to_lowercase()))
        })
    }

    fn run_puzzle(
        &mut self,
        command: &str,
        arriving: bool,
        host: &mut dyn PuzzleHost,
    ) -> EngineResult<PuzzleReport> {
        let here = self.player.location;
        let location = self.world.location(here)?;

        let (puzzle, outcome) = match &location.special {
            SpecialAction::Puzzle {
                puzzle,
                reward,
                points,
                ..
            } => {
                let ctx = PuzzleContext {
                    command,
                    arriving,
                    location,
                    moves_remaining: self.player.moves,
                    score: self.player.score,
                    inventory: &self.player.inventory,
                    reward: *reward,
                    reward_points: *points,
                };
                (Some(*puzzle), host.attempt(*puzzle, &ctx))
            }
            SpecialAction::NoAction | SpecialAction::Pickup => (None, None),
        };

        let outcome = outcome.unwrap_or_else(|| {
            debug!(command, arriving, location = %here, "no puzzle reacted");
            PuzzleOutcome::failure(0)
        });

        self.player.adjust_moves(outcome.moves_delta);
        self.player.adjust_score(outcome.score_delta);

        let granted = match outcome.item_granted {
            Some(item) => self.grant(here, item)?,
            None => None,
        };

        self.log.append(Event::new(EventKind::Special, here), Some(command.to_string()));
        debug!(
            command,
            solved = outcome.solved,
            moves = self.player.moves,
            score = self.player.score,
            "special action"
        );

        Ok(PuzzleReport {
            puzzle,
            outcome,
            granted,
        })
    }

    /// Move a puzzle reward from the location into the inventory.
    fn grant(&mut self, here: LocationId, item: ItemId) -> EngineResult<Option<ItemId>> {
        if self.world.take_item(here, item)? {
            self.player.add_item(item);
            Ok(Some(item))
        } else {
            warn!(item = %item, location = %here, "granted item is not here, ignored");
            Ok(None)
        }
    }

    // -----------------------------------------------------------------------
    // Menu actions
    // -----------------------------------------------------------------------

    fn drop_item(&mut self, name: Option<String>) -> EngineResult<Response> {
        let Some(name) = name else {
            return Ok(Response::DropWhat);
        };
        let held = self
            .world
            .find_item(&name)
            .map(|item| item.id)
            .filter(|&id| self.player.has_item(id));
        let Some(item) = held else {
            return Ok(Response::NotHeld(name));
        };

        let here = self.player.location;
        self.player.remove_item(item);
        self.world.place_item(here, item)?;
        self.log.append(
            Event::new(EventKind::Drop, here).with_item(item),
            Some(format!("drop {name}")),
        );
        debug!(item = %item, location = %here, "dropped");
        Ok(Response::Dropped(item))
    }

    fn undo(&mut self) -> EngineResult<Response> {
        let Some(tail) = self.log.tail() else {
            return Ok(Response::NothingToUndo);
        };
        if tail.kind == EventKind::Start || tail.prev().is_none() {
            return Ok(Response::NoPreviousLocation);
        }
        let Some(event) = self.log.remove_tail() else {
            return Ok(Response::NothingToUndo);
        };

        match (event.kind, event.item) {
            (EventKind::Pickup, Some(item)) => {
                if self.player.remove_item(item) {
                    self.world.place_item(event.location, item)?;
                }
            }
            (EventKind::Drop, Some(item)) => {
                if self.world.take_item(event.location, item)? {
                    self.player.add_item(item);
                }
            }
            _ => {}
        }

        if let Some(previous) = self.log.tail() {
            self.player.location = previous.location;
        }
        self.player.restore_moves(event.moves_spent);
        debug!(kind = %event.kind, location = %self.player.location, "undone");

        Ok(Response::Undone(UndoReport {
            kind: event.kind,
            location: self.player.location,
            item: event.item,
            moves_restored: event.moves_spent,
        }))
    }
}
