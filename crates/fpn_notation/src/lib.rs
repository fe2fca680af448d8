//! Decoder for Fight Position Notation (FPN).
//!
//! This crate turns a compact notation string like
//! `o.95.15.0.3,5.10,15,55,0,0.----/s.90.20.5.-1,0.-5,-10,45,0,0.----/m/A/5`
//! into a validated [`FightState`](fpn_foundation::FightState).
//!
//! # Architecture
//!
//! ```text
//! "<fighterA>/<fighterB>/<distance>/<turn>/<moveCount>"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ POSITION SPLIT  │  → 5 fields on '/'
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FIGHTER SPLIT   │  → 7 fields on '.' (per fighter)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MOMENTUM /      │  → 2 and 5 fields on ','
//! │ BIOMECH SPLIT   │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NUMBER SCALING  │  → percentages / 100, linear momentum / 10
//! └─────────────────┘
//!          │
//!          ▼
//!      FightState
//! ```
//!
//! Decoding fails fast on the first violation and never returns a partially
//! populated state.
//!
//! # Modules
//!
//! - [`fields`] - Exact-arity delimiter splitting
//! - [`number`] - Integer parsing and unit scaling
//! - [`decoder`] - The decode pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decoder;
pub mod fields;
pub mod number;


pub use decoder::{Decoder, DecoderConfig, decode};
