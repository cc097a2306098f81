//! Randomized boundary data, repeatable between runs.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by every randomized trajectory test
const BOUNDARY_SEED: u64 = 0x0ddb_a11_5eed;

/// Generator that replays the same boundary data on every run
pub fn boundary_rng() -> StdRng {
    StdRng::seed_from_u64(BOUNDARY_SEED)
}

/// Start or end vector with entries uniform in `[-span, span)`
pub fn rand_boundary(rng: &mut StdRng, ndims: usize, span: f64) -> Vec<f64> {
    (0..ndims).map(|_| rng.random_range(-span..span)).collect()
}

/// Transition time uniform in `[shortest, longest)`
pub fn rand_transition_time(rng: &mut StdRng, shortest: f64, longest: f64) -> f64 {
    rng.random_range(shortest..longest)
}
