//! Scene configuration tests.

use fpn_notation::decode;
use fpn_scene::{BodyPart, Rgba, SceneConfig, TintPolicy, stage};

#[test]
fn default_lights_and_camera() {
    let config = SceneConfig::default();

    assert_eq!(config.sun_energy, 3.0);
    assert_eq!(config.fill_energy, 200.0);
    assert_eq!(config.fill_size, 5.0);
    assert_eq!(config.camera_height, 5.0);
    assert_eq!(config.camera_location(), [0.0, -10.0, 5.0]);
    assert!((config.camera_rotation()[0] - 60f64.to_radians()).abs() < 1e-12);
    assert_eq!((config.resolution_x, config.resolution_y), (1920, 1080));
}

#[test]
fn builders_override_defaults() {
    let config = SceneConfig::final_quality()
        .with_sun_energy(5.0)
        .with_fill_energy(50.0)
        .with_resolution(640, 480)
        .with_fighter_colors(Rgba::new(0.0, 1.0, 0.0, 1.0), Rgba::new(1.0, 1.0, 0.0, 1.0));

    assert_eq!(config.samples, 512);
    assert_eq!(config.sun_energy, 5.0);
    assert_eq!(config.fill_energy, 50.0);
    assert_eq!(config.resolution_x, 640);
    assert_eq!(config.fighter_a_color.g, 1.0);
}

#[test]
fn tint_applied_once_by_default() {
    let state = decode("o.95.15.0.3,5.10,15,55,0,0.----/s.90.20.5.-1,0.-5,-10,45,0,0.----/m/A/5")
        .unwrap();
    let request = stage(&state, &SceneConfig::default());

    let blue = request.fighter_b.color;
    assert!((blue.b - 0.975).abs() < 1e-12);
    assert!((blue.r - 0.3 * 0.975).abs() < 1e-12);
}

#[test]
fn compounding_matches_part_count() {
    let state = decode("o.95.15.0.3,5.10,15,55,0,0.----/s.90.20.100.-1,0.-5,-10,45,0,0.----/m/A/5")
        .unwrap();
    let config = SceneConfig::default().with_tint_policy(TintPolicy::per_body_part());
    let request = stage(&state, &config);

    let expected = 0.5f64.powi(BodyPart::ALL.len() as i32);
    assert!((request.fighter_b.color.b - expected).abs() < 1e-15);
}
