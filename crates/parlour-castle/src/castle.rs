//! The castle: a door prompt, then a room nobody has seen this cycle.

use std::rc::Rc;

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::console::Console;
use crate::encounter::{DefaultEncounter, Encounter, Outcome, Scene};
use crate::error::{CastleError, CastleResult};
use crate::room::Room;
use crate::selector::ExhaustiveSelector;

/// Fewest doors ever offered.
pub const MIN_DOORS: u32 = 2;
/// Most doors ever offered.
pub const MAX_DOORS: u32 = 4;

/// Why an answer to the door prompt was refused.
///
/// The message is shown to the player before asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DoorInputError {
    /// The answer is not a whole number.
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    /// The number does not name one of the doors.
    #[error("Invalid choice. Please select a number between 1 and {max}.")]
    OutOfRange {
        /// Number of doors on offer.
        max: u32,
    },
}

/// Roll how many doors stand in front of the player.
pub fn door_count(rng: &mut StdRng) -> u32 {
    rng.random_range(MIN_DOORS..=MAX_DOORS)
}

/// Parse an answer to the door prompt for `count` doors.
///
/// A whole number too large to represent is still a number, just not one of
/// the doors.
pub fn parse_door(input: &str, count: u32) -> Result<u32, DoorInputError> {
    let answer = input.trim();
    let Ok(number) = answer.parse::<i64>() else {
        let digits = answer.strip_prefix(['+', '-']).unwrap_or(answer);
        return if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Err(DoorInputError::OutOfRange { max: count })
        } else {
            Err(DoorInputError::NotANumber)
        };
    };
    if (1..=i64::from(count)).contains(&number) {
        u32::try_from(number).map_err(|_| DoorInputError::OutOfRange { max: count })
    } else {
        Err(DoorInputError::OutOfRange { max: count })
    }
}

/// Traversal controller over a fixed set of rooms.
///
/// The door the player picks is flavour only; the next room comes from the
/// room selector regardless of the number chosen.
#[derive(Debug, Clone)]
pub struct Castle {
    rooms: ExhaustiveSelector<Room>,
}

impl Castle {
    /// Create a castle over the given rooms.
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: ExhaustiveSelector::new(rooms).labelled("room"),
        }
    }

    /// Create a castle whose rooms all hold a [`DefaultEncounter`].
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let encounter: Rc<dyn Encounter> = Rc::new(DefaultEncounter);
        let rooms = catalog
            .rooms
            .iter()
            .map(|name| Room::new(name.as_str(), Rc::clone(&encounter)))
            .collect();
        Self::new(rooms)
    }

    /// The room selector.
    pub fn rooms(&self) -> &ExhaustiveSelector<Room> {
        &self.rooms
    }

    /// Offer between two and four doors and wait for a valid pick.
    ///
    /// Refused answers are explained and the prompt repeats. Fails with
    /// [`CastleError::InputClosed`] if input ends first.
    pub fn choose_door(&self, scene: &mut Scene<'_>) -> CastleResult<u32> {
        let count = door_count(scene.rng);
        scene
            .console
            .say(&format!("There are {count} doors in front of you."))?;

        let prompt = format!("Select a door (1 to {count}): ");
        loop {
            let answer = scene
                .console
                .ask(&prompt)?
                .ok_or(CastleError::InputClosed)?;
            match parse_door(&answer, count) {
                Ok(door) => return Ok(door),
                Err(refusal) => scene.console.say(&refusal.to_string())?,
            }
        }
    }

    /// Pick a door, then visit the next unvisited room.
    pub fn advance(&mut self, scene: &mut Scene<'_>) -> CastleResult<Outcome> {
        let door = self.choose_door(scene)?;
        scene.console.say(&format!("You selected door {door}."))?;

        let room = self.rooms.pull(scene.rng)?.clone();
        debug!("door {door} leads to {}", room.name());
        scene
            .console
            .say(&format!("The door opens to reveal the {}.", room.name()))?;
        room.visit(scene)
    }

    /// Make every room available again.
    pub fn reset(&mut self, console: &mut dyn Console) -> CastleResult<()> {
        self.rooms.reset();
        console.say("The castle has been reset. All rooms are now available again.")?;
        Ok(())
    }
}
