//! Composer boundary tests using a capturing stub.

use std::path::{Path, PathBuf};

use fpn_scene::{ComposeError, SceneComposer, SceneConfig, SceneError, SceneRequest, stage_notation};

const REFERENCE: &str = "o.95.15.0.3,5.10,15,55,0,0.----/s.90.20.5.-1,0.-5,-10,45,0,0.----/m/A/5";

/// Records every call instead of rendering.
#[derive(Default)]
struct StubComposer {
    requests: Vec<SceneRequest>,
    outputs: Vec<PathBuf>,
    reject_compose: bool,
}

impl SceneComposer for StubComposer {
    type Handle = SceneRequest;

    fn compose(&mut self, request: &SceneRequest) -> Result<SceneRequest, ComposeError> {
        if self.reject_compose {
            return Err(ComposeError::ComposeFailed("scene rejected".to_string()));
        }
        self.requests.push(request.clone());
        Ok(request.clone())
    }

    fn render(&mut self, _handle: SceneRequest, output: &Path) -> Result<(), ComposeError> {
        self.outputs.push(output.to_path_buf());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

#[test]
fn composer_receives_staged_fighters() {
    let mut composer = StubComposer::default();
    stage_notation(REFERENCE, &SceneConfig::default(), &mut composer, Path::new("fight.png"))
        .unwrap();

    let request = &composer.requests[0];
    assert_eq!(request.fighter_a.placement.x, -2.0);
    assert_eq!(request.fighter_b.placement.x, 2.0);
    assert_eq!(request.fighter_a.pose.tint_factor, 1.0);
    assert_eq!(request.fighter_b.pose.tint_factor, 0.975);
    assert_eq!(request.move_count, 5);
    assert_eq!(composer.outputs, vec![PathBuf::from("fight.png")]);
}

#[test]
fn invalid_notation_never_reaches_composer() {
    let mut composer = StubComposer::default();
    let bad = REFERENCE.replace("o.95", "o.9a");
    let err = stage_notation(&bad, &SceneConfig::default(), &mut composer, Path::new("x.png"))
        .unwrap_err();

    assert!(matches!(err, SceneError::Decode(_)));
    assert!(composer.requests.is_empty());
    assert!(composer.outputs.is_empty());
}

#[test]
fn compose_failure_skips_render() {
    let mut composer = StubComposer {
        reject_compose: true,
        ..StubComposer::default()
    };
    let err = stage_notation(REFERENCE, &SceneConfig::default(), &mut composer, Path::new("x.png"))
        .unwrap_err();

    assert!(matches!(
        err,
        SceneError::Composer {
            composer: "stub",
            source: ComposeError::ComposeFailed(_)
        }
    ));
    assert!(composer.outputs.is_empty());
}
