//! Handoff encoding tests.

use fpn_notation::decode;
use fpn_scene::handoff::{from_bytes, to_bytes};
use fpn_scene::{SceneConfig, SceneError, stage};

#[test]
fn staged_request_round_trips() {
    let state = decode("o.70.15.30.3,5.10,15,55,1,2.EB--/s.90.20.5.-1,0.-5,-10,45,0,0.-B--/v/B/40")
        .unwrap();
    let request = stage(&state, &SceneConfig::preview());

    let restored = from_bytes(&to_bytes(&request).unwrap()).unwrap();
    assert_eq!(restored, request);
    assert_eq!(restored.separation, 8.0);
}

#[test]
fn truncated_bytes_rejected() {
    let state = decode("o.95.15.0.3,5.10,15,55,0,0.----/s.90.20.5.-1,0.-5,-10,45,0,0.----/m/A/5")
        .unwrap();
    let bytes = to_bytes(&stage(&state, &SceneConfig::default())).unwrap();

    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, SceneError::Handoff(_)));
}
