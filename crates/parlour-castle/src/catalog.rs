//! Narrative catalogs: clue sentences, sensory impressions and room names.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CastleError, CastleResult};

/// Built-in clue sentences (10 entries).
pub const CLUES: &[&str] = &[
    "There is a faint smell of smoke lingering in the air, as if a fire once raged here.",
    "There is a broken clock on the wall, its hands frozen at an ominous hour.",
    "There is a trail of muddy footprints leading deeper into the shadows.",
    "There is a torn piece of fabric caught on a jagged nail, fluttering slightly.",
    "There is a faint whisper echoing, though no one else seems to be around.",
    "There is a dusty book on the table, its pages filled with cryptic symbols.",
    "There is a shattered mirror on the floor, reflecting fragments of the room.",
    "There is a locked chest in the corner, its surface scratched as if someone tried to force it open.",
    "There is a flickering lightbulb overhead, casting eerie shadows on the walls.",
    "There is a strange chill in the air, as though something unseen is watching.",
];

/// Built-in sensory impressions (12 entries).
pub const SENSES: &[&str] = &[
    "You see faint candlelight flickering in the distance, casting long shadows on the stone walls.",
    "You hear the distant echo of footsteps, though the corridor appears empty.",
    "You smell the damp, earthy scent of moss growing between the cracks in the stone floor.",
    "You feel a cold draft brushing against your skin, as if a hidden door has been left ajar.",
    "You sense an unshakable feeling of being watched, though no one is in sight.",
    "You see cobwebs draped across a forgotten chandelier, glinting faintly in the dim light.",
    "You hear the soft creak of wood, as if the castle itself is shifting in its slumber.",
    "You smell the faint aroma of burnt wood, as though a fire once roared in the nearby hearth.",
    "You feel the rough texture of the stone wall beneath your fingertips, worn smooth in places by time.",
    "You sense a strange warmth emanating from a nearby tapestry, as if it hides something alive.",
    "You see a faint trail of glowing dust leading toward a spiral staircase descending into darkness.",
    "You hear the faint murmur of voices, too quiet to understand, coming from behind a locked door.",
];

/// Built-in room names (6 entries).
pub const ROOMS: &[&str] = &[
    "Grand Hall",
    "Dungeon",
    "Library of Shadows",
    "Armory",
    "Throne Room",
    "Tower Chamber",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| (*s).to_string()).collect()
}

fn default_clues() -> Vec<String> {
    owned(CLUES)
}

fn default_senses() -> Vec<String> {
    owned(SENSES)
}

fn default_rooms() -> Vec<String> {
    owned(ROOMS)
}

/// The text a castle is built from.
///
/// Loaded from JSON, any list left out falls back to the built-in one:
///
/// ```json
/// { "rooms": ["Cellar", "Chapel"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    /// Clue sentences, the first half of each composite line.
    #[serde(default = "default_clues")]
    pub clues: Vec<String>,
    /// Sensory impressions, the second half of each composite line.
    #[serde(default = "default_senses")]
    pub senses: Vec<String>,
    /// Room names.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            clues: default_clues(),
            senses: default_senses(),
            rooms: default_rooms(),
        }
    }
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(source: &str) -> CastleResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> CastleResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Reject catalogs with an empty list, which could never be drawn from.
    pub fn validate(&self) -> CastleResult<()> {
        let lists = [
            ("clues", &self.clues),
            ("senses", &self.senses),
            ("rooms", &self.rooms),
        ];
        match lists.iter().find(|(_, list)| list.is_empty()) {
            Some((name, _)) => Err(CastleError::EmptyCatalog((*name).to_string())),
            None => Ok(()),
        }
    }
}
