//! Generator trait.
//!
//! RULE: Every synthetic data source implements DataGenerator.
//! A generator owns only its parameters; all randomness comes from
//! the GeneratorRng it is handed, so the same rng state always
//! yields the same output.

use crate::rng::{GeneratorRng, GeneratorSlot};

/// The contract every synthetic data source must fulfil.
pub trait DataGenerator {
    type Output;

    /// Stable slot this generator draws its stream from.
    fn slot(&self) -> GeneratorSlot;

    /// Produce a full batch from scratch. Never called incrementally.
    fn generate(&self, rng: &mut GeneratorRng) -> Self::Output;

    /// Build the slot's stream from `seed` and generate.
    fn generate_seeded(&self, seed: u64) -> Self::Output {
        let mut rng = GeneratorRng::new(seed, self.slot());
        log::debug!("{}: generating from seed {seed}", rng.name);
        self.generate(&mut rng)
    }
}
