//! Encounters: what happens once the player is inside a room.

use std::fmt;

use rand::rngs::StdRng;

use crate::clue::ClueComposer;
use crate::console::Console;
use crate::error::CastleResult;

/// Whether the game goes on after an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep exploring.
    Continue,
    /// The run is over; the player may start again.
    End,
}

/// Everything an encounter may draw on while it runs.
pub struct Scene<'a> {
    /// Narrative line source for this game.
    pub composer: &'a mut ClueComposer,
    /// Random source for this game.
    pub rng: &'a mut StdRng,
    /// Where narration goes and answers come from.
    pub console: &'a mut dyn Console,
}

impl fmt::Debug for Scene<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}

/// A unit of gameplay attached to a room.
///
/// One encounter value is reused for every visit to its room, so any state
/// it keeps lives across visits. Returning [`Outcome::End`] ends the run.
pub trait Encounter: fmt::Debug {
    /// Play the encounter out and report whether the game continues.
    fn run(&self, scene: &mut Scene<'_>) -> CastleResult<Outcome>;
}

/// Narrates one composite clue line and lets the player move on.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEncounter;

impl Encounter for DefaultEncounter {
    fn run(&self, scene: &mut Scene<'_>) -> CastleResult<Outcome> {
        let line = scene.composer.composite_line(scene.rng)?;
        scene.console.say(&line)?;
        Ok(Outcome::Continue)
    }
}
