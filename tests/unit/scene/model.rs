use super::*;

#[test]
fn minimal_scene_uses_default_params() {
    let scene = OrbScene::from_json_str(
        r##"{ "canvas": { "width": 200, "height": 100 }, "color": "#ff0000" }"##,
    )
    .unwrap();
    assert_eq!(scene.color, Rgba::rgb(1.0, 0.0, 0.0));
    assert_eq!(scene.params, OrbParams::default());
    assert_eq!(scene.background, None);
    assert_eq!(scene.region().width(), 200.0);
    assert_eq!(scene.region().height(), 100.0);
    assert_eq!(scene.surface_opts().clear_rgba, None);
}

#[test]
fn background_and_param_overrides() {
    let scene = OrbScene::from_json_str(
        r##"{
            "canvas": { "width": 64, "height": 64 },
            "color": { "h": 200.0, "s": 0.8, "l": 0.5 },
            "background": [0, 0, 0],
            "params": { "circle_count": 5, "animation_speed": 0.1 }
        }"##,
    )
    .unwrap();
    assert_eq!(scene.params.circle_count, 5);
    assert_eq!(scene.surface_opts().clear_rgba, Some([0, 0, 0, 255]));
    let r = scene.renderer().unwrap();
    assert_eq!(r.params().animation_speed, 0.1);
}

#[test]
fn invalid_scenes_are_rejected() {
    let zero = r##"{ "canvas": { "width": 0, "height": 64 }, "color": "#ffffff" }"##;
    assert!(matches!(
        OrbScene::from_json_str(zero),
        Err(OrbError::Validation(_))
    ));

    let bad_params = r##"{
        "canvas": { "width": 8, "height": 8 },
        "color": "#ffffff",
        "params": { "circle_count": 0 }
    }"##;
    assert!(OrbScene::from_json_str(bad_params).is_err());

    assert!(matches!(
        OrbScene::from_json_str("{ not json"),
        Err(OrbError::Serde(_))
    ));
    assert!(OrbScene::from_path("/definitely/not/here.json").is_err());
}

#[test]
fn json_roundtrip_preserves_scene() {
    let mut scene = OrbScene::new(
        Canvas {
            width: 32,
            height: 16,
        },
        Rgba::rgba(0.25, 0.5, 0.75, 1.0),
    );
    scene.background = Some(Rgba::rgb(0.0, 0.0, 0.0));
    let text = scene.to_json_pretty().unwrap();
    assert_eq!(OrbScene::from_json_str(&text).unwrap(), scene);
}
