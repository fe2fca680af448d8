//! Pose mapping for decoded fight states.
//!
//! Turns a [`FighterState`](fpn_foundation::FighterState) into renderer-agnostic
//! [`PoseParameters`] and a [`DistanceCode`](fpn_foundation::DistanceCode) into
//! a separation in meters. Everything here is a pure function of its input:
//! no I/O, no scene objects, no shared state.
//!
//! # Conventions
//!
//! ```text
//!            fighter A                 fighter B
//!   x = -d/2, yaw = +90°  ──── d ────  x = +d/2, yaw = -90°
//! ```
//!
//! Rotations are in radians. Arm angles are measured from vertical; the
//! right arm is mirrored (negative) relative to the left.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod placement;
pub mod pose;

pub use placement::{
    DEFAULT_SEPARATION, DistanceBand, Facing, Placement, placement, placements,
};
pub use pose::{ArmPose, PoseParameters, Side, map_fight, map_pose, tint_factor};
