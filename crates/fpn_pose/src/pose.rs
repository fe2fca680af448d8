//! Per-fighter pose derivation.
//!
//! [`map_pose`] is total over any decoded [`FighterState`]: short limb codes
//! are treated as relaxed arms rather than failing.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use fpn_foundation::limbs::{LEFT_ARM, RIGHT_ARM};
use fpn_foundation::{FightState, FighterState};

use crate::placement::Facing;

/// Lean at zero balance, in radians.
pub const MAX_LEAN: f64 = 0.2;

/// Arm angle from vertical when extended.
pub const EXTENDED_ARM_ANGLE: f64 = FRAC_PI_3;

/// Arm angle from vertical when relaxed.
pub const RELAXED_ARM_ANGLE: f64 = FRAC_PI_6;

/// Limb codes that mark an arm as extended.
pub const EXTENDED_CODES: [char; 2] = ['E', 'B'];

/// Fraction of base color removed at full damage.
pub const MAX_DARKENING: f64 = 0.5;

/// Which corner a fighter occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Fighter A, placed at negative x.
    Left,
    /// Fighter B, placed at positive x.
    Right,
}

impl Side {
    /// Both sides in placement order.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// The fighter label used for this side.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "FighterA",
            Self::Right => "FighterB",
        }
    }
}

/// Rotation of one upper arm.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmPose {
    /// Whether the limb code marks this arm as extended.
    pub extended: bool,
    /// Signed angle from vertical, in radians.
    pub angle: f64,
}

impl ArmPose {
    fn from_code(code: Option<char>, mirrored: bool) -> Self {
        let extended = code.is_some_and(|c| EXTENDED_CODES.contains(&c));
        let magnitude = if extended {
            EXTENDED_ARM_ANGLE
        } else {
            RELAXED_ARM_ANGLE
        };
        Self {
            extended,
            angle: if mirrored { -magnitude } else { magnitude },
        }
    }

    /// Unsigned angle from vertical.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.angle.abs()
    }
}

/// Renderer-agnostic pose for one fighter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoseParameters {
    /// Corner the pose was mapped for.
    pub side: Side,
    /// Yaw about the vertical axis.
    pub facing: f64,
    /// Rotation about the lateral axis.
    pub lean: f64,
    /// Hip rotation about the vertical axis.
    pub hip_rotation: f64,
    /// Torso rotation about the vertical axis.
    pub torso_rotation: f64,
    /// Left upper arm.
    pub left_arm: ArmPose,
    /// Right upper arm (mirrored sign).
    pub right_arm: ArmPose,
    /// Multiplicative darkening for the fighter's base color, in `[0.5, 1.0]`
    /// for damage in `[0, 1]`.
    pub tint_factor: f64,
}

/// Darkening factor for a damage fraction.
#[must_use]
pub fn tint_factor(damage: f64) -> f64 {
    1.0 - damage * MAX_DARKENING
}

/// Maps one fighter's state to pose parameters.
#[must_use]
pub fn map_pose(fighter: &FighterState, side: Side) -> PoseParameters {
    let pose = PoseParameters {
        side,
        facing: Facing::yaw(side),
        lean: (1.0 - fighter.balance) * MAX_LEAN,
        hip_rotation: f64::from(fighter.biomech.hip_rot).to_radians(),
        torso_rotation: f64::from(fighter.biomech.torso_rot).to_radians(),
        left_arm: ArmPose::from_code(fighter.limbs.get(LEFT_ARM), false),
        right_arm: ArmPose::from_code(fighter.limbs.get(RIGHT_ARM), true),
        tint_factor: tint_factor(fighter.damage),
    };
    trace!(
        side = side.label(),
        lean = pose.lean,
        left_extended = pose.left_arm.extended,
        right_extended = pose.right_arm.extended,
        tint = pose.tint_factor,
        "mapped pose"
    );
    pose
}

/// Maps both fighters: A on the left, B on the right.
#[must_use]
pub fn map_fight(state: &FightState) -> [PoseParameters; 2] {
    [
        map_pose(&state.fighter_a, Side::Left),
        map_pose(&state.fighter_b, Side::Right),
    ]
}
