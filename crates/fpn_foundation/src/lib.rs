//! Core data model and error types for Fight Position Notation (FPN).
//!
//! This crate provides:
//! - [`FightState`] - One decoded instant of a two-party confrontation
//! - [`FighterState`] - One side's balance, momentum, biomechanics, and limbs
//! - [`LimbCode`] - Fixed-position limb extension codes
//! - [`Stance`], [`Turn`], [`DistanceCode`] - Opaque notation tokens
//! - [`Error`] - Decode errors with context
//!
//! Nothing here parses notation; see `fpn_notation` for the decoder.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fight;
pub mod limbs;
pub mod token;

pub use error::{Error, ErrorContext, ErrorKind, FieldLevel, Result};
pub use fight::{Biomech, FightState, FighterState, Momentum};
pub use limbs::LimbCode;
pub use token::{DistanceCode, Stance, Turn};
