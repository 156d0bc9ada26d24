//! Card identifier allocation.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Symbols card identifiers are drawn from.
pub const ID_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in a card identifier.
pub const ID_LEN: usize = 4;

/// Source of fresh card identifiers.
pub trait IdGenerator {
    /// Produce a new identifier. Uniqueness is the caller's concern.
    fn generate(&mut self) -> String;
}

/// Uniformly random identifiers backed by any `rand` generator.
///
/// Seed it with `StdRng::seed_from_u64` for reproducible output.
#[derive(Debug, Clone)]
pub struct RandomIds<R = ThreadRng> {
    rng: R,
}

impl RandomIds<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomIds<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomIds<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IdGenerator for RandomIds<R> {
    fn generate(&mut self) -> String {
        (0..ID_LEN)
            .map(|_| ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn generate(&mut self) -> String {
        (**self).generate()
    }
}
