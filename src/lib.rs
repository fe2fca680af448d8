//! FPN - Fight Position Notation decoding and pose mapping
//!
//! This crate re-exports all layers of the FPN system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: fpn_scene       — Scene composer boundary, config, staging
//! Layer 2: fpn_pose        — Pose mapping, placement, facing
//! Layer 1: fpn_notation    — Notation decoder
//! Layer 0: fpn_foundation  — Core types (FightState, FighterState, Error)
//! ```

pub use fpn_foundation as foundation;
pub use fpn_notation as notation;
pub use fpn_pose as pose;
pub use fpn_scene as scene;
