pub mod castle;
pub mod hands;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded RNG when a seed is given, OS-seeded otherwise.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
