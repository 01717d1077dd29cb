//! Rooms of the castle.

use std::rc::Rc;

use crate::encounter::{Encounter, Outcome, Scene};
use crate::error::CastleResult;

/// A named room and the encounter waiting inside it.
///
/// Cloning a room shares its encounter.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    encounter: Rc<dyn Encounter>,
}

impl Room {
    /// Create a room.
    pub fn new(name: impl Into<String>, encounter: Rc<dyn Encounter>) -> Self {
        Self {
            name: name.into(),
            encounter,
        }
    }

    /// The room's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Announce entry, then hand over to the encounter.
    pub fn visit(&self, scene: &mut Scene<'_>) -> CastleResult<Outcome> {
        scene
            .console
            .say(&format!("You have entered the {}.", self.name))?;
        self.encounter.run(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::clue::ClueComposer;
    use crate::console::LineConsole;
    use crate::encounter::DefaultEncounter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[derive(Debug)]
    struct Collapse;

    impl Encounter for Collapse {
        fn run(&self, scene: &mut Scene<'_>) -> CastleResult<Outcome> {
            scene.console.say("The ceiling gives way.")?;
            Ok(Outcome::End)
        }
    }

    fn visit(room: &Room) -> (Outcome, String) {
        let mut composer = ClueComposer::from_catalog(&Catalog::default());
        let mut rng = StdRng::seed_from_u64(3);
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        let outcome = room
            .visit(&mut Scene {
                composer: &mut composer,
                rng: &mut rng,
                console: &mut console,
            })
            .unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn visit_announces_then_runs_encounter() {
        let room = Room::new("Armory", Rc::new(DefaultEncounter));
        let (outcome, out) = visit(&room);
        assert_eq!(outcome, Outcome::Continue);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("You have entered the Armory."));
        assert!(lines.next().is_some_and(|l| l.starts_with("There is ")));
    }

    #[test]
    fn outcome_is_passed_through() {
        let room = Room::new("Crypt", Rc::new(Collapse));
        let (outcome, out) = visit(&room);
        assert_eq!(outcome, Outcome::End);
        assert_eq!(out, "You have entered the Crypt.\nThe ceiling gives way.\n");
    }

    #[test]
    fn clones_share_the_encounter() {
        let encounter: Rc<dyn Encounter> = Rc::new(DefaultEncounter);
        let room = Room::new("Dungeon", Rc::clone(&encounter));
        let copy = room.clone();
        assert_eq!(copy.name(), "Dungeon");
        assert_eq!(Rc::strong_count(&encounter), 3);
    }
}
