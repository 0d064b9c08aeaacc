use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use tracing::{info, warn};

use super::types::StateVector;

/// Build a generator from an optional seed, falling back to OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            info!("Creating new RNG with seed: {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => {
            warn!("No seed provided, using entropy");
            ChaCha8Rng::from_entropy()
        }
    }
}

/// Draw every state component independently from N(0, 1).
pub fn standard_normal_state<R: Rng + ?Sized>(rng: &mut R) -> StateVector {
    StateVector::from_fn(|_, _| rng.sample(StandardNormal))
}
