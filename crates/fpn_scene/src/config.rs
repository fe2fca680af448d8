//! Fixed scene configuration.
//!
//! Lights, camera, ground, fighter colors, and render settings that every
//! composed scene shares. None of this depends on the fight state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use fpn_pose::Side;

use crate::color::{Rgba, TintPolicy};

/// Configuration handed to a scene composer alongside the fighter rigs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Base color of fighter A.
    pub fighter_a_color: Rgba,
    /// Base color of fighter B.
    pub fighter_b_color: Rgba,
    /// How damage tint is applied to the base colors.
    pub tint_policy: TintPolicy,

    /// Ground plane color.
    pub ground_color: Rgba,
    /// Ground plane edge length.
    pub ground_size: f64,

    /// Sun light strength.
    pub sun_energy: f64,
    /// Sun light position.
    pub sun_location: [f64; 3],
    /// Sun light rotation, in degrees per axis.
    pub sun_rotation_deg: [f64; 3],

    /// Area fill light strength.
    pub fill_energy: f64,
    /// Area fill light size.
    pub fill_size: f64,
    /// Area fill light position.
    pub fill_location: [f64; 3],

    /// Camera height above the ground plane.
    pub camera_height: f64,
    /// Camera distance back from the fighters' line.
    pub camera_distance: f64,
    /// Camera pitch, in degrees.
    pub camera_pitch_deg: f64,

    /// Path tracer samples per pixel.
    pub samples: u32,
    /// Output width in pixels.
    pub resolution_x: u32,
    /// Output height in pixels.
    pub resolution_y: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fighter_a_color: Rgba::new(1.0, 0.3, 0.3, 1.0),
            fighter_b_color: Rgba::new(0.3, 0.3, 1.0, 1.0),
            tint_policy: TintPolicy::Once,
            ground_color: Rgba::new(0.3, 0.3, 0.3, 1.0),
            ground_size: 20.0,
            sun_energy: 3.0,
            sun_location: [5.0, -5.0, 10.0],
            sun_rotation_deg: [45.0, 0.0, 45.0],
            fill_energy: 200.0,
            fill_size: 5.0,
            fill_location: [-5.0, 5.0, 5.0],
            camera_height: 5.0,
            camera_distance: 10.0,
            camera_pitch_deg: 60.0,
            samples: 128,
            resolution_x: 1920,
            resolution_y: 1080,
        }
    }
}

impl SceneConfig {
    /// A fast configuration for previews: few samples, half resolution.
    #[must_use]
    pub fn preview() -> Self {
        Self {
            samples: 16,
            resolution_x: 960,
            resolution_y: 540,
            ..Self::default()
        }
    }

    /// A slow configuration for final stills.
    #[must_use]
    pub fn final_quality() -> Self {
        Self {
            samples: 512,
            ..Self::default()
        }
    }

    /// Base color for the fighter on `side`.
    #[must_use]
    pub fn base_color(&self, side: Side) -> Rgba {
        match side {
            Side::Left => self.fighter_a_color,
            Side::Right => self.fighter_b_color,
        }
    }

    /// Camera position, looking at the fighters from -y.
    #[must_use]
    pub fn camera_location(&self) -> [f64; 3] {
        [0.0, -self.camera_distance, self.camera_height]
    }

    /// Camera rotation in radians per axis.
    #[must_use]
    pub fn camera_rotation(&self) -> [f64; 3] {
        [self.camera_pitch_deg.to_radians(), 0.0, 0.0]
    }

    /// Builder method to set both fighter colors.
    #[must_use]
    pub fn with_fighter_colors(mut self, a: Rgba, b: Rgba) -> Self {
        self.fighter_a_color = a;
        self.fighter_b_color = b;
        self
    }

    /// Builder method to set the tint policy.
    #[must_use]
    pub fn with_tint_policy(mut self, policy: TintPolicy) -> Self {
        self.tint_policy = policy;
        self
    }

    /// Builder method to set the sun strength.
    #[must_use]
    pub fn with_sun_energy(mut self, energy: f64) -> Self {
        self.sun_energy = energy;
        self
    }

    /// Builder method to set the fill light strength.
    #[must_use]
    pub fn with_fill_energy(mut self, energy: f64) -> Self {
        self.fill_energy = energy;
        self
    }

    /// Builder method to set the camera height.
    #[must_use]
    pub fn with_camera_height(mut self, height: f64) -> Self {
        self.camera_height = height;
        self
    }

    /// Builder method to set samples per pixel.
    #[must_use]
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Builder method to set the output resolution.
    #[must_use]
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution_x = width;
        self.resolution_y = height;
        self
    }
}
