//! Tiny unique string id generator with custom alphabets.
//!
//! Ids are random strings sampled from an [`Alphabet`] (1–256 characters,
//! duplicates allowed). The sampling is unbiased: each random byte is masked
//! down to the smallest power-of-two range covering the alphabet and
//! rejected if it still falls outside the valid indexes. This avoids the
//! modulo bias a naive `byte % alphabet_len` would introduce for alphabet
//! sizes that are not powers of two.
//!
//! The randomness itself is injected. [`RandomSource`] is a one-method
//! capability with three standard implementations: [`SecureRandom`] (the
//! process CSPRNG), [`SeededRandom`] (a fixed deterministic recurrence for
//! reproducible sequences) and [`FastRandom`] (cheap, non-cryptographic).
//! Closures returning `u64` work too.
//!
//! # Usage
//!
//! The one-liner uses the URL-safe 64-character alphabet and 21 characters:
//!
//! ```
//! use nid::Id;
//!
//! let id = Id::new();
//! assert_eq!(id.chars().count(), 21);
//! ```
//!
//! Full control over alphabet, length and randomness:
//!
//! ```
//! use nid::{generate, Alphabet, SeededRandom};
//!
//! let hex = Alphabet::new("0123456789abcdef");
//!
//! let a = generate(&hex, 16, &mut SeededRandom::new(1));
//! let b = generate(&hex, 16, &mut SeededRandom::new(1));
//!
//! // Same seed, same id.
//! assert_eq!(a, b);
//! ```
//!
//! # Swapping generators in dependent code
//!
//! Code that needs "some source of ids" should depend on [`IdGenerator`]
//! rather than calling [`generate`] directly. Production wires in a
//! [`LiveGenerator`]; tests substitute a [`ConstantGenerator`] or an
//! [`IncrementingGenerator`] to become deterministic:
//!
//! ```
//! use nid::{ConstantGenerator, IdGenerator};
//!
//! fn receipt_number(ids: &dyn IdGenerator) -> String {
//!     format!("receipt-{}", ids.generate_id())
//! }
//!
//! let fixed = ConstantGenerator::new("0000");
//! assert_eq!(receipt_number(&fixed), "receipt-0000");
//! ```
//!
//! # Serialization
//!
//! [`Id`] serializes as a plain string (and therefore works as a map key in
//! formats like JSON), and deserializes from any string, including `""`.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod alphabet;
pub use alphabet::{Alphabet, AlphabetError, MAX_ALPHABET_LEN};

mod generate;
pub use generate::generate;

mod generator;
pub use generator::{ConstantGenerator, IdGenerator, IncrementingGenerator, LiveGenerator};

mod id;
pub use id::Id;

mod rng;
pub use rng::{FastRandom, RandomSource, SecureRandom, SeededRandom};
