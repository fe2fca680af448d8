//! Decoded fight state.
//!
//! Percentage fields are stored already scaled to `[0.0, 1.0]` and linear
//! momentum already scaled from tenths, so every value here is in the unit
//! the pose layer consumes. Raw notation integers are never kept.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::limbs::LimbCode;
use crate::token::{DistanceCode, Stance, Turn};

/// One decoded instant of a two-party confrontation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FightState {
    /// The fighter placed on the left (negative x).
    pub fighter_a: FighterState,
    /// The fighter placed on the right (positive x).
    pub fighter_b: FighterState,
    /// Range band between the fighters.
    pub distance: DistanceCode,
    /// Whose turn is active.
    pub turn: Turn,
    /// Ply number.
    pub move_count: u32,
}

impl FightState {
    /// Returns both fighters in placement order (A, then B).
    #[must_use]
    pub fn fighters(&self) -> [&FighterState; 2] {
        [&self.fighter_a, &self.fighter_b]
    }
}

/// One side's decoded biomechanical and momentum data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FighterState {
    /// Opaque stance token.
    pub stance: Stance,
    /// Balance in `[0.0, 1.0]`.
    pub balance: f64,
    /// Fatigue in `[0.0, 1.0]`.
    pub fatigue: f64,
    /// Accumulated damage in `[0.0, 1.0]`.
    pub damage: f64,
    /// Linear and rotational momentum.
    pub momentum: Momentum,
    /// Joint rotations, weight distribution, and recovery state.
    pub biomech: Biomech,
    /// Limb extension codes, kept verbatim.
    pub limbs: LimbCode,
}

/// Momentum carried by a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Momentum {
    /// Signed linear momentum (notation tenths divided by 10).
    pub linear: f64,
    /// Signed rotational momentum in raw notation units.
    pub rotational: i32,
}

/// Biomechanical state of a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Biomech {
    /// Hip rotation in degrees.
    pub hip_rot: i32,
    /// Torso rotation in degrees.
    pub torso_rot: i32,
    /// Weight distribution in `[0.0, 1.0]`.
    pub weight: f64,
    /// Whether the fighter is recovering from an action.
    pub recovering: bool,
    /// Frames remaining in the current action.
    pub frames: u32,
}
