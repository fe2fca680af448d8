//! Opaque notation tokens.
//!
//! Stance, turn, and distance are carried through decoding verbatim. The
//! notation defines no closed vocabulary for stance or turn, so they stay
//! plain strings. Distance codes are interpreted later by the pose layer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! token_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw notation token.
            #[must_use]
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Returns the raw token.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the first character of the token, if any.
            #[must_use]
            pub fn first_char(&self) -> Option<char> {
                self.0.chars().next()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::new(token)
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }
    };
}

token_type!(
    /// A fighter's stance token (e.g. `o` for orthodox, `s` for southpaw).
    Stance
);

token_type!(
    /// Whose turn is active (e.g. `A` or `B`).
    Turn
);

token_type!(
    /// Qualitative range band between the fighters (`c`, `s`, `m`, `l`, `v`).
    ///
    /// Unrecognized codes are preserved; the pose layer maps them to a default
    /// separation.
    DistanceCode
);
