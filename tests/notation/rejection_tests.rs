//! Rejection tests.
//!
//! Tests that malformed notation fails fast with the right error kind.

use fpn_foundation::{ErrorKind, FieldLevel};
use fpn_notation::decode;

const FIGHTER_A: &str = "o.95.15.0.3,5.10,15,55,0,0.----";
const FIGHTER_B: &str = "s.90.20.5.-1,0.-5,-10,45,0,0.----";

fn malformed(text: &str) -> (FieldLevel, String, usize, usize) {
    match decode(text).unwrap_err().kind {
        ErrorKind::MalformedField {
            level,
            field,
            expected,
            found,
        } => (level, field, expected, found),
        other => panic!("expected MalformedField, got {other}"),
    }
}

fn invalid_number(text: &str) -> (&'static str, String) {
    match decode(text).unwrap_err().kind {
        ErrorKind::InvalidNumber { field, token } => (field, token),
        other => panic!("expected InvalidNumber, got {other}"),
    }
}

// =============================================================================
// Field Counts
// =============================================================================

#[test]
fn position_with_four_fields() {
    let text = format!("{FIGHTER_A}/{FIGHTER_B}/m/A");
    let (level, field, expected, found) = malformed(&text);

    assert_eq!(level, FieldLevel::Position);
    assert_eq!(field, text);
    assert_eq!((expected, found), (5, 4));
}

#[test]
fn position_with_six_fields() {
    let (level, _, expected, found) = malformed(&format!("{FIGHTER_A}/{FIGHTER_B}/m/A/5/extra"));

    assert_eq!(level, FieldLevel::Position);
    assert_eq!((expected, found), (5, 6));
}

#[test]
fn empty_input() {
    let (level, _, _, found) = malformed("");

    assert_eq!(level, FieldLevel::Position);
    assert_eq!(found, 1);
}

#[test]
fn fighter_with_six_fields() {
    let (level, field, expected, found) =
        malformed(&format!("o.95.15.0.3,5.10,15,55,0,0/{FIGHTER_B}/m/A/5"));

    assert_eq!(level, FieldLevel::Fighter);
    assert_eq!(field, "o.95.15.0.3,5.10,15,55,0,0");
    assert_eq!((expected, found), (7, 6));
}

#[test]
fn fighter_b_with_eight_fields() {
    let (level, _, _, found) = malformed(&format!("{FIGHTER_A}/{FIGHTER_B}.x/m/A/5"));

    assert_eq!(level, FieldLevel::Fighter);
    assert_eq!(found, 8);
}

#[test]
fn momentum_with_one_field() {
    let (level, field, expected, found) =
        malformed(&format!("o.95.15.0.3.10,15,55,0,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(level, FieldLevel::Momentum);
    assert_eq!(field, "3");
    assert_eq!((expected, found), (2, 1));
}

#[test]
fn momentum_with_three_fields() {
    let (level, _, _, found) =
        malformed(&format!("o.95.15.0.3,5,7.10,15,55,0,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(level, FieldLevel::Momentum);
    assert_eq!(found, 3);
}

#[test]
fn biomech_with_four_fields() {
    let (level, field, expected, found) =
        malformed(&format!("o.95.15.0.3,5.10,15,55,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(level, FieldLevel::Biomech);
    assert_eq!(field, "10,15,55,0");
    assert_eq!((expected, found), (5, 4));
}

#[test]
fn biomech_with_six_fields() {
    let (level, _, _, found) =
        malformed(&format!("{FIGHTER_A}/s.90.20.5.-1,0.-5,-10,45,0,0,9.----/m/A/5"));

    assert_eq!(level, FieldLevel::Biomech);
    assert_eq!(found, 6);
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn balance_with_letter() {
    let (field, token) =
        invalid_number(&format!("o.9a.15.0.3,5.10,15,55,0,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(field, "balance");
    assert_eq!(token, "9a");
}

#[test]
fn decimal_point_splits_fighter() {
    let (level, _, _, found) =
        malformed(&format!("o.95.15.0.5.3,5.10,15,55,0,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(level, FieldLevel::Fighter);
    assert_eq!(found, 8);
}

#[test]
fn linear_momentum_with_suffix() {
    let (field, token) =
        invalid_number(&format!("o.95.15.0.3x,5.10,15,55,0,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(field, "linear");
    assert_eq!(token, "3x");
}

#[test]
fn hip_rotation_not_numeric() {
    let (field, token) =
        invalid_number(&format!("{FIGHTER_A}/s.90.20.5.-1,0.left,-10,45,0,0.----/m/A/5"));

    assert_eq!(field, "hip_rot");
    assert_eq!(token, "left");
}

#[test]
fn negative_move_count_rejected() {
    let (field, token) = invalid_number(&format!("{FIGHTER_A}/{FIGHTER_B}/m/A/-1"));

    assert_eq!(field, "move_count");
    assert_eq!(token, "-1");
}

#[test]
fn negative_frames_rejected() {
    let (field, _) =
        invalid_number(&format!("o.95.15.0.3,5.10,15,55,0,-2.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(field, "frames");
}

#[test]
fn empty_numeric_field_rejected() {
    let (field, token) =
        invalid_number(&format!("o.95..0.3,5.10,15,55,0,0.----/{FIGHTER_B}/m/A/5"));

    assert_eq!(field, "fatigue");
    assert_eq!(token, "");
}

#[test]
fn error_display_names_token() {
    let err = decode(&format!("o.9a.15.0.3,5.10,15,55,0,0.----/{FIGHTER_B}/m/A/5")).unwrap_err();
    let msg = format!("{err}");

    assert!(msg.contains("balance"));
    assert!(msg.contains("9a"));
}
