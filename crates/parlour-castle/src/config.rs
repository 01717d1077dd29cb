//! Configuration for a castle game.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;

/// Configuration for a castle game.
#[derive(Debug, Clone, Default)]
pub struct CastleConfig {
    /// RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Clues, senses and rooms to build the castle from.
    pub catalog: Catalog,
}

impl CastleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build the random source this configuration asks for.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = CastleConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.catalog, Catalog::default());
    }

    #[test]
    fn builder_methods() {
        let catalog = Catalog {
            rooms: vec!["Crypt".to_string()],
            ..Catalog::default()
        };
        let cfg = CastleConfig::default()
            .with_seed(123)
            .with_catalog(catalog.clone());
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.catalog, catalog);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = CastleConfig::default().with_seed(42);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
