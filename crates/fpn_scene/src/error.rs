//! Errors from staging and composing a fight scene.

use thiserror::Error;

use crate::composer::ComposeError;

/// Error raised while turning notation into a rendered scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The notation could not be decoded; nothing was composed.
    #[error("decode failed: {0}")]
    Decode(#[from] fpn_foundation::Error),

    /// The composer rejected the scene or failed to render it.
    #[error("composer '{composer}': {source}")]
    Composer {
        /// Name of the composer that failed.
        composer: &'static str,
        /// The underlying composer error.
        #[source]
        source: ComposeError,
    },

    /// A scene request could not be encoded or decoded for handoff.
    #[error("handoff serialization failed: {0}")]
    Handoff(String),
}

/// Result type alias for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
