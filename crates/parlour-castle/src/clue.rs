//! Composite narrative lines built from a clue and a sensory impression.

use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::error::CastleResult;
use crate::selector::ExhaustiveSelector;

/// Pairs a clue with a sensory impression, each drawn from its own
/// exhaustive selector.
///
/// The two pools cycle independently, so with 10 clues and 12 senses the
/// clue pool starts its second cycle two lines before the sense pool does.
/// One composer belongs to one game; separate games never share a sequence.
#[derive(Debug, Clone)]
pub struct ClueComposer {
    clues: ExhaustiveSelector<String>,
    senses: ExhaustiveSelector<String>,
}

impl ClueComposer {
    /// Create a composer over explicit clue and sense lists.
    pub fn new(clues: Vec<String>, senses: Vec<String>) -> Self {
        Self {
            clues: ExhaustiveSelector::new(clues).labelled("clue"),
            senses: ExhaustiveSelector::new(senses).labelled("sense"),
        }
    }

    /// Create a composer from a catalog's clue and sense lists.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.clues.clone(), catalog.senses.clone())
    }

    /// Draw one clue and one sense and join them with a space.
    pub fn composite_line(&mut self, rng: &mut StdRng) -> CastleResult<String> {
        let clue = self.clues.pull(rng)?;
        let sense = self.senses.pull(rng)?;
        Ok(format!("{clue} {sense}"))
    }

    /// The clue selector.
    pub fn clues(&self) -> &ExhaustiveSelector<String> {
        &self.clues
    }

    /// The sense selector.
    pub fn senses(&self) -> &ExhaustiveSelector<String> {
        &self.senses
    }
}
