//! The scene composer capability.
//!
//! A composer owns everything engine-specific: meshes, materials, lights,
//! the camera, and the render call. The core only hands it a
//! [`SceneRequest`] and an output path.

use std::path::{Path, PathBuf};

use crate::stage::SceneRequest;

/// Builds and renders scenes in some external 3-D engine.
pub trait SceneComposer {
    /// Engine-side reference to a composed scene.
    type Handle;

    /// Builds a render-ready scene from a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot build the scene.
    fn compose(&mut self, request: &SceneRequest) -> Result<Self::Handle, ComposeError>;

    /// Renders a composed scene to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing the image fails.
    fn render(&mut self, handle: Self::Handle, output: &Path) -> Result<(), ComposeError>;

    /// Composer name for logs and errors.
    fn name(&self) -> &'static str;
}

/// Failure reported by a scene composer.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The scene could not be built.
    #[error("compose failed: {0}")]
    ComposeFailed(String),

    /// The scene could not be rendered or written.
    #[error("render to '{}' failed: {message}", path.display())]
    RenderFailed {
        /// Requested output path.
        path: PathBuf,
        /// Engine-provided reason.
        message: String,
    },
}
