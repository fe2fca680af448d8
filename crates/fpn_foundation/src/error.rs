//! Error types for notation decoding.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for FPN decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed field error for a split that produced the wrong
    /// number of components.
    #[must_use]
    pub fn malformed_field(
        level: FieldLevel,
        field: impl Into<String>,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::new(ErrorKind::MalformedField {
            level,
            field: field.into(),
            expected,
            found,
        })
    }

    /// Creates an invalid number error for a numeric field that failed to parse.
    #[must_use]
    pub fn invalid_number(field: &'static str, token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            field,
            token: token.into(),
        })
    }

    /// Returns the offending substring or token carried by this error.
    #[must_use]
    pub fn offending(&self) -> &str {
        match &self.kind {
            ErrorKind::MalformedField { field, .. } => field,
            ErrorKind::InvalidNumber { token, .. } => token,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A delimiter split produced the wrong number of components.
    #[error("malformed {level} field '{field}': expected {expected} components, found {found}")]
    MalformedField {
        /// Which grammar level was being split.
        level: FieldLevel,
        /// The offending substring.
        field: String,
        /// Number of components the grammar requires.
        expected: usize,
        /// Number of components the split produced.
        found: usize,
    },

    /// A numeric field failed to parse as a base-10 integer.
    #[error("invalid number for {field}: '{token}'")]
    InvalidNumber {
        /// Grammar name of the field (e.g. `balance`, `hip_rot`).
        field: &'static str,
        /// The offending token.
        token: String,
    },
}

/// Grammar levels at which the notation is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLevel {
    /// The top-level `/`-separated position.
    Position,
    /// A `.`-separated fighter record.
    Fighter,
    /// A `,`-separated momentum pair.
    Momentum,
    /// A `,`-separated biomechanics record.
    Biomech,
}

impl FieldLevel {
    /// The literal delimiter used at this level.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Position => '/',
            Self::Fighter => '.',
            Self::Momentum | Self::Biomech => ',',
        }
    }

    /// The exact number of components the grammar requires at this level.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Position | Self::Biomech => 5,
            Self::Fighter => 7,
            Self::Momentum => 2,
        }
    }
}

impl fmt::Display for FieldLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::Fighter => "fighter",
            Self::Momentum => "momentum",
            Self::Biomech => "biomech",
        };
        f.write_str(name)
    }
}

/// Context about where in the notation an error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// The section being decoded (`fighter_a`, `fighter_b`, `position`).
    pub section: Option<String>,
    /// The complete notation input, when available.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section being decoded.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Sets the full notation input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(section) = &self.section {
            write!(f, "in {section}")?;
        }
        if let Some(input) = &self.input {
            if self.section.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "of '{input}'")?;
        }
        Ok(())
    }
}

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;
