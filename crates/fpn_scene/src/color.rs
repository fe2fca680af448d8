//! Fighter colors and damage tinting.
//!
//! The pose layer only computes a tint factor. Applying it to a color is a
//! scene concern, and how often it is applied is an explicit policy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scales the color channels by `factor`. Alpha is forced opaque.
    #[must_use]
    pub fn tinted(self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: 1.0,
        }
    }

    /// Channels as an `[r, g, b, a]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Parts of the primitive mannequin a composer builds for each fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum BodyPart {
    Head,
    Torso,
    Hips,
    LeftUpperArm,
    LeftLowerArm,
    LeftHand,
    RightUpperArm,
    RightLowerArm,
    RightHand,
    LeftUpperLeg,
    LeftLowerLeg,
    LeftFoot,
    RightUpperLeg,
    RightLowerLeg,
    RightFoot,
}

impl BodyPart {
    /// Every mesh part of one mannequin.
    pub const ALL: [Self; 15] = [
        Self::Head,
        Self::Torso,
        Self::Hips,
        Self::LeftUpperArm,
        Self::LeftLowerArm,
        Self::LeftHand,
        Self::RightUpperArm,
        Self::RightLowerArm,
        Self::RightHand,
        Self::LeftUpperLeg,
        Self::LeftLowerLeg,
        Self::LeftFoot,
        Self::RightUpperLeg,
        Self::RightLowerLeg,
        Self::RightFoot,
    ];

    /// Object name suffix (`head`, `left_upper_arm`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Torso => "torso",
            Self::Hips => "hips",
            Self::LeftUpperArm => "left_upper_arm",
            Self::LeftLowerArm => "left_lower_arm",
            Self::LeftHand => "left_hand",
            Self::RightUpperArm => "right_upper_arm",
            Self::RightLowerArm => "right_lower_arm",
            Self::RightHand => "right_hand",
            Self::LeftUpperLeg => "left_upper_leg",
            Self::LeftLowerLeg => "left_lower_leg",
            Self::LeftFoot => "left_foot",
            Self::RightUpperLeg => "right_upper_leg",
            Self::RightLowerLeg => "right_lower_leg",
            Self::RightFoot => "right_foot",
        }
    }
}

/// How a fighter's tint factor is applied to its base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TintPolicy {
    /// Apply the factor once per fighter.
    #[default]
    Once,
    /// Apply the factor once per body part sharing one material, so the
    /// darkening compounds `parts` times.
    Compounding {
        /// Number of parts sharing the material.
        parts: u32,
    },
}

impl TintPolicy {
    /// Compounding across every part of the mannequin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn per_body_part() -> Self {
        Self::Compounding {
            parts: BodyPart::ALL.len() as u32,
        }
    }

    /// The base color after damage tinting under this policy.
    #[must_use]
    pub fn apply(self, base: Rgba, factor: f64) -> Rgba {
        match self {
            Self::Once => base.tinted(factor),
            Self::Compounding { parts } => {
                (0..parts).fold(base, |color, _| color.tinted(factor))
            }
        }
    }
}
