use std::sync::Mutex;

use crate::alphabet::Alphabet;
use crate::generate::generate;
use crate::id::{Id, DEFAULT_LENGTH};
use crate::rng::SecureRandom;

/// Capability producing a new [`Id`] per call.
///
/// Dependent code that needs "some source of ids" should take this trait
/// (usually as `&dyn IdGenerator` or `Box<dyn IdGenerator>`) instead of
/// calling [`generate`] directly. That keeps call sites unchanged when
/// tests substitute a [`ConstantGenerator`] or [`IncrementingGenerator`]
/// for the live randomness. Closures returning [`Id`] implement it too.
pub trait IdGenerator: Send + Sync {
    /// Produces the next id.
    fn generate_id(&self) -> Id;
}

impl<F> IdGenerator for F
where
    F: Fn() -> Id + Send + Sync,
{
    fn generate_id(&self) -> Id {
        self()
    }
}

/// Generator drawing random ids from the secure source.
#[derive(Debug, Clone)]
pub struct LiveGenerator {
    alphabet: Alphabet,
    length: usize,
}

impl LiveGenerator {
    /// The default shape: URL-safe alphabet, 21 characters.
    pub fn new() -> Self {
        Self::with_config(Alphabet::url_safe().clone(), DEFAULT_LENGTH)
    }

    /// Custom alphabet and length.
    pub fn with_config(alphabet: Alphabet, length: usize) -> Self {
        LiveGenerator { alphabet, length }
    }
}

impl Default for LiveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveGenerator {
    fn generate_id(&self) -> Id {
        generate(&self.alphabet, self.length, &mut SecureRandom)
    }
}

/// Generator always returning the same id.
///
/// Makes code under test deterministic without touching its call sites.
#[derive(Debug, Clone)]
pub struct ConstantGenerator(Id);

impl ConstantGenerator {
    /// Creates a generator that always returns `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        ConstantGenerator(id.into())
    }
}

impl IdGenerator for ConstantGenerator {
    fn generate_id(&self) -> Id {
        self.0.clone()
    }
}

/// Generator rendering an increasing counter.
///
/// Each call renders the current counter value as ascii decimal,
/// left-pads it with `'0'` to at least `size` characters and keeps the
/// last `size` characters, then advances the counter. Once the rendering
/// outgrows `size` the most significant digits fall off: a size-1
/// generator yields `"8"`, `"9"`, `"0"`, `"1"`, ... (textual truncation,
/// not modulo arithmetic on the counter).
///
/// The counter advances atomically; two concurrent calls never observe
/// the same value.
#[derive(Debug)]
pub struct IncrementingGenerator {
    counter: Mutex<u64>,
    size: usize,
}

impl IncrementingGenerator {
    /// Creates a generator of `size`-character ids, counting from 0.
    pub fn new(size: usize) -> Self {
        IncrementingGenerator {
            counter: Mutex::new(0),
            size,
        }
    }
}

impl IdGenerator for IncrementingGenerator {
    fn generate_id(&self) -> Id {
        let value = {
            let mut counter = self.counter.lock().expect("counter lock poisoned");
            let v = *counter;
            *counter = counter.wrapping_add(1);
            v
        };

        let rendered = format!("{:0>width$}", value, width = self.size);
        // Ascii digits only, byte slicing is char slicing.
        Id::from(&rendered[rendered.len() - self.size..])
    }
}
