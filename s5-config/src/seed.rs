//! Keypair seed generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of the seed offered as the keypair default.
pub const SEED_LENGTH: usize = 43;

/// Generate a random seed of `length` characters from `A-Z`, `a-z` and `0-9`.
///
/// Draws from the thread-local generator, which is a CSPRNG seeded from the
/// operating system.
pub fn generate_seed(length: usize) -> String {
    generate_seed_with(&mut rand::thread_rng(), length)
}

/// Like [`generate_seed`], with an explicit random source.
pub fn generate_seed_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
