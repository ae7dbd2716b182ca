use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::generate::generate;
use crate::rng::SecureRandom;

/// Characters in an [`Id::new`] id.
pub(crate) const DEFAULT_LENGTH: usize = 21;

/// A generated (or reconstructed) identifier.
///
/// An immutable wrapper around the string value. Equality, ordering and
/// hashing are by value. Any string is a valid id, including the empty
/// string; alphabet membership and length are guarantees of the
/// [`generate`] contract, not of this type.
///
/// Serializes as a plain string, so it round-trips through formats like
/// JSON unchanged and works as a map key.
///
/// ```
/// use nid::Id;
///
/// let id = Id::from("V1StGXR8_Z5jdHi6B-myT");
/// assert_eq!(id.to_string(), "V1StGXR8_Z5jdHi6B-myT");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(String);

impl Id {
    /// Generates a new id: 21 characters from the URL-safe alphabet,
    /// drawn from the secure source.
    pub fn new() -> Id {
        generate(Alphabet::url_safe(), DEFAULT_LENGTH, &mut SecureRandom)
    }

    /// Generates an id of `length` characters from the URL-safe alphabet,
    /// drawn from the secure source.
    pub fn with_length(length: usize) -> Id {
        generate(Alphabet::url_safe(), length, &mut SecureRandom)
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the id into its string value.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Id {
    fn default() -> Self {
        Id::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl Deref for Id {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(v: String) -> Self {
        Id(v)
    }
}

impl<'a> From<&'a str> for Id {
    fn from(v: &'a str) -> Self {
        Id(v.to_string())
    }
}

impl From<Id> for String {
    fn from(v: Id) -> Self {
        v.0
    }
}

impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id(s.to_string()))
    }
}
