//! Fixed-position limb codes.
//!
//! Each character of a limb code describes one limb. Position 0 is the left
//! arm and position 1 the right arm; later positions are reserved and kept
//! verbatim.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of the left arm within a limb code.
pub const LEFT_ARM: usize = 0;

/// Index of the right arm within a limb code.
pub const RIGHT_ARM: usize = 1;

/// A fighter's limb code string, e.g. `E-B-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LimbCode(String);

impl LimbCode {
    /// Wraps a raw limb code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code exactly as it appeared in the notation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the state character at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.0.chars().nth(index)
    }

    /// Left arm state character.
    #[must_use]
    pub fn left_arm(&self) -> Option<char> {
        self.get(LEFT_ARM)
    }

    /// Right arm state character.
    #[must_use]
    pub fn right_arm(&self) -> Option<char> {
        self.get(RIGHT_ARM)
    }

    /// Number of limb positions in the code.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the code has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LimbCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LimbCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
