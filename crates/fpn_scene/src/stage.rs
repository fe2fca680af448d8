//! Building scene requests and driving a composer.

use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, span};

use fpn_foundation::FightState;
use fpn_notation::decode;
use fpn_pose::{Placement, PoseParameters, Side, map_pose, placement};

use crate::color::Rgba;
use crate::composer::{ComposeError, SceneComposer};
use crate::config::SceneConfig;
use crate::error::{Result, SceneError};

/// Everything a composer needs to build one fighter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FighterRig {
    /// Object name prefix (`FighterA`, `FighterB`).
    pub label: String,
    /// Root transform.
    pub placement: Placement,
    /// Joint rotations and tint factor.
    pub pose: PoseParameters,
    /// Base color with damage tint already applied.
    pub color: Rgba,
}

impl FighterRig {
    fn build(state: &FightState, side: Side, separation: f64, config: &SceneConfig) -> Self {
        let fighter = match side {
            Side::Left => &state.fighter_a,
            Side::Right => &state.fighter_b,
        };
        let pose = map_pose(fighter, side);
        let color = config
            .tint_policy
            .apply(config.base_color(side), pose.tint_factor);
        debug!(
            fighter = side.label(),
            tint = pose.tint_factor,
            policy = ?config.tint_policy,
            "resolved fighter color"
        );
        Self {
            label: side.label().to_string(),
            placement: Placement::for_side(side, separation),
            pose,
            color,
        }
    }
}

/// A complete, renderer-agnostic description of one scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneRequest {
    /// Fighter A, on the left.
    pub fighter_a: FighterRig,
    /// Fighter B, on the right.
    pub fighter_b: FighterRig,
    /// Distance between the fighters, in meters.
    pub separation: f64,
    /// Ply number of the staged position.
    pub move_count: u32,
    /// Fixed scene configuration.
    pub config: SceneConfig,
}

/// Stages a decoded fight state. Pure: no composer is involved.
#[must_use]
pub fn stage(state: &FightState, config: &SceneConfig) -> SceneRequest {
    let separation = placement(&state.distance);
    debug!(distance = %state.distance, separation, "staging fighters");

    SceneRequest {
        fighter_a: FighterRig::build(state, Side::Left, separation, config),
        fighter_b: FighterRig::build(state, Side::Right, separation, config),
        separation,
        move_count: state.move_count,
        config: config.clone(),
    }
}

/// Decodes `text`, stages it, and has `composer` render it to `output`.
///
/// Returns the staged request on success.
///
/// # Errors
///
/// Returns [`SceneError::Decode`] without touching the composer if the
/// notation is invalid, or [`SceneError::Composer`] if composing or
/// rendering fails.
pub fn stage_notation<C: SceneComposer>(
    text: &str,
    config: &SceneConfig,
    composer: &mut C,
    output: &Path,
) -> Result<SceneRequest> {
    let span = span!(Level::INFO, "stage_notation", composer = composer.name());
    let _enter = span.enter();

    let state = decode(text)?;
    let request = stage(&state, config);

    let name = composer.name();
    let wrap = |source: ComposeError| SceneError::Composer {
        composer: name,
        source,
    };
    let handle = composer.compose(&request).map_err(wrap)?;
    composer.render(handle, output).map_err(wrap)?;

    info!(
        move_count = request.move_count,
        output = %output.display(),
        "rendered fight position"
    );
    Ok(request)
}
