//! Scene staging for decoded fight positions.
//!
//! This crate is the boundary between the pure decode/map core and whatever
//! 3-D engine builds and renders the scene. The engine is reached only
//! through the [`SceneComposer`] trait; nothing here builds geometry.
//!
//! # Pipeline
//!
//! ```text
//! notation ──decode──▶ FightState ──map_fight/placements──▶ SceneRequest
//!                                                              │
//!                                           SceneComposer::compose
//!                                                              │
//!                                           SceneComposer::render ──▶ image
//! ```
//!
//! A decode failure stops the pipeline before the composer is called, so no
//! partial scene is ever rendered.
//!
//! # Modules
//!
//! - [`color`] - Base colors, tint policies, and mannequin body parts
//! - [`config`] - Fixed scene configuration (lights, camera, render settings)
//! - [`composer`] - The scene composer capability trait
//! - [`stage`] - Building scene requests and driving a composer
//! - `handoff` - `MessagePack` encoding of scene requests (feature `serde`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod color;
pub mod composer;
pub mod config;
pub mod error;
#[cfg(feature = "serde")]
pub mod handoff;
pub mod stage;

pub use color::{BodyPart, Rgba, TintPolicy};
pub use composer::{ComposeError, SceneComposer};
pub use config::SceneConfig;
pub use error::{Result, SceneError};
pub use stage::{FighterRig, SceneRequest, stage, stage_notation};
