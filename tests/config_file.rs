use std::fs;
use std::path::PathBuf;

use kinetic_slider::{SliderConfig, SliderError};

#[test]
fn relative_paths_resolve_against_the_config_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slider.json");
    fs::write(
        &path,
        r#"{
            "slideImages": ["images/one.jpg", "/abs/two.jpg"],
            "backgroundDisplacementSprite": "maps/bg.jpg",
            "fonts": ["fonts/Title.ttf:700"],
            "imagesRgbEffect": true
        }"#,
    )
    .unwrap();

    let config = SliderConfig::load(&path).unwrap();
    assert_eq!(config.slide_images[0], dir.path().join("images/one.jpg"));
    assert_eq!(config.slide_images[1], PathBuf::from("/abs/two.jpg"));
    assert_eq!(config.background_displacement_sprite, Some(dir.path().join("maps/bg.jpg")));
    assert_eq!(config.cursor_displacement_sprite, None);
    assert_eq!(config.fonts[0].path, dir.path().join("fonts/Title.ttf"));
    assert_eq!(config.fonts[0].weight, Some(700));
    assert!(config.images_rgb_effect);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match SliderConfig::load(&path) {
        Err(SliderError::ConfigRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "swipe": "#).unwrap();
    let err = SliderConfig::load(&path).unwrap_err();
    assert!(matches!(err, SliderError::ConfigParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn wrong_types_are_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typed.json");
    fs::write(&path, r#"{ "swipeDistance": "far" }"#).unwrap();
    assert!(matches!(SliderConfig::load(&path), Err(SliderError::ConfigParse { .. })));
}
