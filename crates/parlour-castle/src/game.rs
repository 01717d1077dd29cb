//! The game loop: explore until an encounter ends the run, then offer a replay.

use log::debug;
use rand::rngs::StdRng;

use crate::castle::Castle;
use crate::clue::ClueComposer;
use crate::config::CastleConfig;
use crate::console::Console;
use crate::encounter::{Outcome, Scene};
use crate::error::{CastleError, CastleResult};

const WELCOME: &[&str] = &[
    "Welcome to the Castle Adventure!",
    "Your objective is to navigate through the castle and find the treasure.",
    "Good luck!",
];
const CONTINUE: &str = "You continue your journey through the castle.";
const GAME_OVER: &str = "Game Over.";
const REPLAY_PROMPT: &str = "Would you like to explore a different castle? (yes/no): ";
const GOODBYE: &str = "Thank you for playing! Goodbye!";

/// Where the game loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Moving from room to room.
    Running,
    /// A run just ended; the player is asked whether to go again.
    AwaitingReplay,
    /// The player is done.
    Stopped,
}

/// One castle game session with its own castle, narration and randomness.
#[derive(Debug)]
pub struct Game {
    castle: Castle,
    composer: ClueComposer,
    rng: StdRng,
}

impl Game {
    /// Build a game from configuration, rejecting empty catalogs.
    pub fn new(config: &CastleConfig) -> CastleResult<Self> {
        config.catalog.validate()?;
        Ok(Self::from_parts(
            Castle::from_catalog(&config.catalog),
            ClueComposer::from_catalog(&config.catalog),
            config.rng(),
        ))
    }

    /// Assemble a game from ready-made parts.
    pub fn from_parts(castle: Castle, composer: ClueComposer, rng: StdRng) -> Self {
        Self {
            castle,
            composer,
            rng,
        }
    }

    /// The castle being explored.
    pub fn castle(&self) -> &Castle {
        &self.castle
    }

    /// Greet the player and run until they stop.
    pub fn play(&mut self, console: &mut dyn Console) -> CastleResult<()> {
        for line in WELCOME {
            console.say(line)?;
        }

        let mut state = GameState::Running;
        while state != GameState::Stopped {
            state = self.step(state, console)?;
        }
        Ok(())
    }

    /// Run one transition of the game loop.
    pub fn step(&mut self, state: GameState, console: &mut dyn Console) -> CastleResult<GameState> {
        let next = match state {
            GameState::Running => self.explore(console)?,
            GameState::AwaitingReplay => self.offer_replay(console)?,
            GameState::Stopped => GameState::Stopped,
        };
        if next != state {
            debug!("game state {state:?} -> {next:?}");
        }
        Ok(next)
    }

    fn explore(&mut self, console: &mut dyn Console) -> CastleResult<GameState> {
        let mut scene = Scene {
            composer: &mut self.composer,
            rng: &mut self.rng,
            console,
        };
        match self.castle.advance(&mut scene) {
            Ok(Outcome::Continue) => {
                scene.console.say(CONTINUE)?;
                Ok(GameState::Running)
            }
            Ok(Outcome::End) => {
                scene.console.say(GAME_OVER)?;
                Ok(GameState::AwaitingReplay)
            }
            Err(CastleError::InputClosed) => {
                scene.console.say("")?;
                scene.console.say(GOODBYE)?;
                Ok(GameState::Stopped)
            }
            Err(e) => Err(e),
        }
    }

    fn offer_replay(&mut self, console: &mut dyn Console) -> CastleResult<GameState> {
        self.castle.reset(console)?;
        let answer = console.ask(REPLAY_PROMPT)?;
        if answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes")) {
            Ok(GameState::Running)
        } else {
            console.say(GOODBYE)?;
            Ok(GameState::Stopped)
        }
    }
}
