use rand::Rng;

// Knuth's MMIX constants.
const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// Source of random bits for the id sampler.
///
/// The sampler pulls 64 bits at a time and slices them into bytes. Sources
/// are stateful: every call advances the internal state. A source must not
/// be shared between concurrent callers without external synchronization,
/// or the interleaving (and with it any reproducibility) is lost.
///
/// Closures work as sources too:
///
/// ```
/// use nid::{generate, Alphabet};
///
/// let alphabet = Alphabet::new("ab");
/// let id = generate(&alphabet, 4, &mut || -> u64 { 0 });
/// assert_eq!(&*id, "aaaa");
/// ```
pub trait RandomSource {
    /// Returns the next 64 random bits.
    fn next_u64(&mut self) -> u64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> u64,
{
    fn next_u64(&mut self) -> u64 {
        self()
    }
}

/// The process-wide cryptographically secure source.
///
/// Backed by the thread-local CSPRNG. Stateless from the caller's point of
/// view and safe for uncoordinated use from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn next_u64(&mut self) -> u64 {
        rand::rng().random()
    }
}

/// Deterministic source for reproducible sequences.
///
/// A fixed linear-congruential recurrence over a 64-bit state: each call
/// steps `state = state * 6364136223846793005 + 1442695040888963407` (mod
/// 2^64) and returns the new state. Two sources with the same seed produce
/// identical streams regardless of platform, which is the whole point.
/// Unsuitable for anything security-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Creates a source with initial state `seed`.
    pub fn new(seed: u64) -> Self {
        SeededRandom { state: seed }
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        self.state
    }
}

/// Cheap non-cryptographic source.
///
/// For ids that don't need to be unguessable, this avoids the cost of the
/// CSPRNG. Each instance owns its own state, randomly seeded on creation.
#[derive(Debug, Clone)]
pub struct FastRandom(fastrand::Rng);

impl FastRandom {
    /// Creates a new source with randomized initial state.
    pub fn new() -> Self {
        FastRandom(fastrand::Rng::new())
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn next_u64(&mut self) -> u64 {
        self.0.u64(..)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seeded_recurrence_is_fixed() {
        // The first step from seed 0 is the increment itself.
        let mut src = SeededRandom::new(0);
        assert_eq!(src.next_u64(), 1442695040888963407);
        assert_eq!(src.next_u64(), 1876011003808476466);
        assert_eq!(src.next_u64(), 11166244414315200793);
    }

    #[test]
    fn seeded_streams_with_same_seed_are_identical() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn seeded_streams_with_different_seeds_diverge() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn seeded_state_wraps_without_panicking() {
        let mut src = SeededRandom::new(u64::MAX);
        let _ = src.next_u64();
        let _ = src.next_u64();
    }

    #[test]
    fn closures_are_sources() {
        let mut n = 0;
        let mut src = move || -> u64 {
            n += 1;
            n
        };
        assert_eq!(src.next_u64(), 1);
        assert_eq!(src.next_u64(), 2);
    }

    #[test]
    fn secure_source_produces_varied_values() {
        let mut src = SecureRandom;
        let values: Vec<u64> = (0..8).map(|_| src.next_u64()).collect();
        // Eight identical draws from a CSPRNG is not a thing.
        assert!(values.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn fast_source_produces_varied_values() {
        let mut src = FastRandom::new();
        let values: Vec<u64> = (0..8).map(|_| src.next_u64()).collect();
        assert!(values.windows(2).any(|w| w[0] != w[1]));
    }
}
