//! Fighter placement from distance bands.
//!
//! Both fighters stand on the ground plane along the x axis, centered on the
//! origin and facing each other regardless of separation.

use std::f64::consts::FRAC_PI_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use fpn_foundation::DistanceCode;

use crate::pose::Side;

/// Separation used for unrecognized distance codes, in meters.
pub const DEFAULT_SEPARATION: f64 = 4.0;

/// Qualitative range bands recognized by the notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceBand {
    /// `c` - clinch range.
    Close,
    /// `s` - short range.
    Short,
    /// `m` - medium range.
    Medium,
    /// `l` - long range.
    Long,
    /// `v` - very long range.
    VeryLong,
}

impl DistanceBand {
    /// All bands, closest first.
    pub const ALL: [Self; 5] = [
        Self::Close,
        Self::Short,
        Self::Medium,
        Self::Long,
        Self::VeryLong,
    ];

    /// Looks up the band for a notation code.
    #[must_use]
    pub fn from_code(code: &DistanceCode) -> Option<Self> {
        match code.as_str() {
            "c" => Some(Self::Close),
            "s" => Some(Self::Short),
            "m" => Some(Self::Medium),
            "l" => Some(Self::Long),
            "v" => Some(Self::VeryLong),
            _ => None,
        }
    }

    /// The notation character for this band.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Close => 'c',
            Self::Short => 's',
            Self::Medium => 'm',
            Self::Long => 'l',
            Self::VeryLong => 'v',
        }
    }

    /// Separation between the fighters, in meters.
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Close => 1.5,
            Self::Short => 2.5,
            Self::Medium => 4.0,
            Self::Long => 6.0,
            Self::VeryLong => 8.0,
        }
    }
}

/// Separation in meters for a distance code.
///
/// Unrecognized codes fall back to [`DEFAULT_SEPARATION`].
#[must_use]
pub fn placement(distance: &DistanceCode) -> f64 {
    DistanceBand::from_code(distance).map_or(DEFAULT_SEPARATION, DistanceBand::meters)
}

/// Facing convention: yaw about the vertical axis, in radians.
pub struct Facing;

impl Facing {
    /// Fighter A looks toward +x.
    pub const LEFT: f64 = FRAC_PI_2;
    /// Fighter B looks toward -x.
    pub const RIGHT: f64 = -FRAC_PI_2;

    /// Yaw for the fighter standing on `side`.
    #[must_use]
    pub const fn yaw(side: Side) -> f64 {
        match side {
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }
}

/// World transform of one fighter's root.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Position along the line between the fighters.
    pub x: f64,
    /// Depth; always 0.
    pub y: f64,
    /// Height above the ground plane; always 0.
    pub z: f64,
    /// Rotation about the vertical axis.
    pub yaw: f64,
}

impl Placement {
    /// Places the fighter on `side` for a given separation.
    #[must_use]
    pub fn for_side(side: Side, separation: f64) -> Self {
        let half = separation / 2.0;
        let x = match side {
            Side::Left => -half,
            Side::Right => half,
        };
        Self {
            x,
            y: 0.0,
            z: 0.0,
            yaw: Facing::yaw(side),
        }
    }

    /// Location as an `[x, y, z]` triple.
    #[must_use]
    pub fn location(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Placements for fighter A and fighter B at the given distance.
#[must_use]
pub fn placements(distance: &DistanceCode) -> [Placement; 2] {
    let separation = placement(distance);
    trace!(%distance, separation, "placing fighters");
    [
        Placement::for_side(Side::Left, separation),
        Placement::for_side(Side::Right, separation),
    ]
}
