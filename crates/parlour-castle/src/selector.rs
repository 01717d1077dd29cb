//! Random selection without repeats until the pool is exhausted.
//!
//! Draw state is tracked per slot rather than per value, so a pool holding
//! two equal items still yields both of them once per cycle.

use log::{debug, trace};
use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{CastleError, CastleResult};

/// A pool of items drawn in random order, each exactly once per cycle.
///
/// Once every item has been drawn, the next pull starts a fresh cycle with
/// the whole pool eligible again. The last item of one cycle may therefore
/// be the first item of the next.
#[derive(Debug, Clone)]
pub struct ExhaustiveSelector<T> {
    label: &'static str,
    items: Vec<T>,
    used: Vec<bool>,
    drawn: usize,
}

impl<T> ExhaustiveSelector<T> {
    /// Create a selector over the given items.
    pub fn new(items: Vec<T>) -> Self {
        let used = vec![false; items.len()];
        Self {
            label: "item",
            items,
            used,
            drawn: 0,
        }
    }

    /// Name the pool for log and error messages.
    pub fn labelled(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Append an item to the pool. It is eligible in the current cycle.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.used.push(false);
    }

    /// Draw one item not yet drawn in the current cycle.
    ///
    /// Starts a new cycle first if the current one is exhausted. Fails with
    /// [`CastleError::EmptyPool`] if the pool holds no items at all.
    pub fn pull(&mut self, rng: &mut StdRng) -> CastleResult<&T> {
        let index = self.pull_index(rng)?;
        trace!("{} pool: drew slot {index}", self.label);
        Ok(&self.items[index])
    }

    fn pull_index(&mut self, rng: &mut StdRng) -> CastleResult<usize> {
        if self.items.is_empty() {
            return Err(CastleError::EmptyPool { pool: self.label });
        }
        if self.is_exhausted() {
            debug!("{} pool exhausted, starting a new cycle", self.label);
            self.clear();
        }

        let pick = rng.random_range(0..self.remaining());
        let index = self
            .used
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(i, _)| i)
            .nth(pick)
            .ok_or(CastleError::EmptyPool { pool: self.label })?;

        self.used[index] = true;
        self.drawn += 1;
        Ok(index)
    }

    /// Make every item eligible again. Pool contents are unchanged.
    pub fn reset(&mut self) {
        debug!("{} pool reset", self.label);
        self.clear();
    }

    fn clear(&mut self) {
        self.used.iter_mut().for_each(|u| *u = false);
        self.drawn = 0;
    }

    /// Number of items still eligible in the current cycle.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.drawn
    }

    /// Whether every item has been drawn in the current cycle.
    pub fn is_exhausted(&self) -> bool {
        self.drawn == self.items.len()
    }

    /// Total number of items in the pool.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
