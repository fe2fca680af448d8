//! The notation decode pipeline.
//!
//! Orchestrates the split levels and number scaling:
//! position (`/`) → fighter (`.`) → momentum and biomech (`,`).

use tracing::{debug, trace};

use fpn_foundation::{
    Biomech, DistanceCode, ErrorContext, FieldLevel, FightState, FighterState, LimbCode, Momentum,
    Result, Stance, Turn,
};

use crate::fields::split_exact;
use crate::number::{parse_flag, parse_int, parse_percent, parse_tenths, parse_unsigned};

/// Configuration for the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Trim surrounding whitespace from the whole notation before splitting.
    pub trim: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { trim: true }
    }
}

impl DecoderConfig {
    /// A configuration that decodes the input exactly as given.
    #[must_use]
    pub fn strict() -> Self {
        Self { trim: false }
    }

    /// Builder method to enable/disable whitespace trimming.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Decodes FPN strings into [`FightState`] values.
///
/// The decoder holds only configuration; decoding is a pure function of the
/// input text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with the given configuration.
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder configuration.
    #[must_use]
    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    /// Decodes one notation string.
    ///
    /// # Errors
    ///
    /// Returns `MalformedField` if any split yields the wrong number of
    /// components, or `InvalidNumber` if a numeric field is not a base-10
    /// integer. The first violation encountered is reported.
    pub fn decode(&self, text: &str) -> Result<FightState> {
        let input = if self.config.trim { text.trim() } else { text };

        let result = decode_position(input);
        match &result {
            Ok(state) => debug!(
                move_count = state.move_count,
                distance = %state.distance,
                turn = %state.turn,
                "decoded fight position"
            ),
            Err(err) => debug!(error = %err, input, "rejected fight position"),
        }
        result.map_err(|err| {
            let context = err
                .context
                .clone()
                .unwrap_or_default()
                .with_input(input);
            err.with_context(context)
        })
    }
}

/// Decodes one notation string with the default configuration.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(text: &str) -> Result<FightState> {
    Decoder::default().decode(text)
}

fn decode_position(input: &str) -> Result<FightState> {
    let [fighter_a, fighter_b, distance, turn, move_count] =
        split_exact::<5>(input, FieldLevel::Position)
            .map_err(|err| err.with_context(ErrorContext::new().with_section("position")))?;

    let fighter_a = decode_fighter(fighter_a)
        .map_err(|err| err.with_context(ErrorContext::new().with_section("fighter_a")))?;
    let fighter_b = decode_fighter(fighter_b)
        .map_err(|err| err.with_context(ErrorContext::new().with_section("fighter_b")))?;
    let move_count = parse_unsigned("move_count", move_count)
        .map_err(|err| err.with_context(ErrorContext::new().with_section("position")))?;

    Ok(FightState {
        fighter_a,
        fighter_b,
        distance: DistanceCode::new(distance),
        turn: Turn::new(turn),
        move_count,
    })
}

fn decode_fighter(input: &str) -> Result<FighterState> {
    let [stance, balance, fatigue, damage, momentum, biomech, limbs] =
        split_exact::<7>(input, FieldLevel::Fighter)?;

    let fighter = FighterState {
        stance: Stance::new(stance),
        balance: parse_percent("balance", balance)?,
        fatigue: parse_percent("fatigue", fatigue)?,
        damage: parse_percent("damage", damage)?,
        momentum: decode_momentum(momentum)?,
        biomech: decode_biomech(biomech)?,
        limbs: LimbCode::new(limbs),
    };
    trace!(stance = %fighter.stance, limbs = %fighter.limbs, "decoded fighter");
    Ok(fighter)
}

fn decode_momentum(input: &str) -> Result<Momentum> {
    let [linear, rotational] = split_exact::<2>(input, FieldLevel::Momentum)?;

    Ok(Momentum {
        linear: parse_tenths("linear", linear)?,
        rotational: parse_int("rotational", rotational)?,
    })
}

fn decode_biomech(input: &str) -> Result<Biomech> {
    let [hip_rot, torso_rot, weight, recovering, frames] =
        split_exact::<5>(input, FieldLevel::Biomech)?;

    Ok(Biomech {
        hip_rot: parse_int("hip_rot", hip_rot)?,
        torso_rot: parse_int("torso_rot", torso_rot)?,
        weight: parse_percent("weight", weight)?,
        recovering: parse_flag(recovering),
        frames: parse_unsigned("frames", frames)?,
    })
}
