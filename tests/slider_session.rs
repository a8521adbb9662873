use raylib::prelude::*;

use kinetic_slider::scene::LayerKind;
use kinetic_slider::state::Direction;
use kinetic_slider::{FrameInput, Slider, SliderConfig};

const VIEWPORT: Vector2 = Vector2 { x: 1280.0, y: 720.0 };
const DT: f32 = 1.0 / 60.0;

fn config() -> SliderConfig {
    SliderConfig::from_json(
        r#"{
            "slideImages": ["one.jpg", "two.jpg", "three.jpg"],
            "itemsTitles": [["One", "first"], ["Two", "second"], ["Three", "third"]],
            "textsDisplay": true,
            "textsSubTitleDisplay": true,
            "imagesRgbEffect": true,
            "slideTransitionDuration": 0.5
        }"#,
    )
    .unwrap()
}

fn run(slider: &mut Slider, frames: usize, pointer: Option<Vector2>) {
    for _ in 0..frames {
        slider.update(FrameInput { dt: DT, pointer, viewport: VIEWPORT });
    }
}

fn settle(slider: &mut Slider) {
    let mut frames = 0;
    while slider.is_transitioning() {
        run(slider, 1, None);
        frames += 1;
        assert!(frames < 600, "transition never finished");
    }
}

fn visible(slider: &Slider) -> Vec<usize> {
    (0..slider.scene().slide_count())
        .filter(|&i| slider.scene().images.nodes[i].alpha > 0.0)
        .collect()
}

#[test]
fn a_full_session() {
    let mut slider = Slider::new(config(), VIEWPORT);
    assert_eq!(
        slider.scene().layer_kinds(),
        [LayerKind::Images, LayerKind::Titles, LayerKind::Subtitles]
    );
    assert!(visible(&slider).is_empty());

    slider.start();
    settle(&mut slider);
    assert!(slider.is_loaded());
    assert_eq!(visible(&slider), [0]);

    // keyboard style navigation
    assert!(slider.navigate(Direction::Next));
    run(&mut slider, 5, None);
    assert!(!slider.navigate(Direction::Next));
    settle(&mut slider);
    assert_eq!(slider.current_index(), 1);
    assert_eq!(visible(&slider), [1]);

    // swipe right past the threshold
    let view = *slider.view();
    let origin = view.to_window(Vector2::new(200.0, 540.0));
    let far = view.to_window(Vector2::new(900.0, 540.0));
    assert!(slider.pointer_down(origin));
    run(&mut slider, 2, Some(origin));
    assert!(slider.pointer_move(far));
    assert_eq!(slider.pending_index(), Some(2));
    settle(&mut slider);
    assert_eq!(visible(&slider), [2]);

    // wrap forward
    slider.navigate(Direction::Next);
    settle(&mut slider);
    assert_eq!(slider.current_index(), 0);
    assert!(slider.scene().text_split.is_zero());
    assert!(slider.scene().image_split.is_zero());
    assert_eq!(slider.scene().background.filter_scale, Vector2::new(0.0, 0.0));
}

#[test]
fn resizing_to_mobile_moves_subtitles_up() {
    let mut slider = Slider::new(config(), VIEWPORT);
    slider.start();
    settle(&mut slider);
    let desktop = *slider.scene().node(LayerKind::Subtitles, 1).unwrap();
    assert_eq!(slider.metrics().title_size, 125.0);

    let narrow = Vector2::new(400.0, 800.0);
    slider.update(FrameInput { dt: DT, pointer: None, viewport: narrow });
    assert_eq!(slider.metrics().title_size, 45.0);
    let mobile = *slider.scene().node(LayerKind::Subtitles, 1).unwrap();
    assert_eq!(desktop.home.y - mobile.home.y, 80.0);
}

#[test]
fn pointer_leaving_the_window_recentres() {
    let mut slider = Slider::new(config(), VIEWPORT);
    slider.start();
    settle(&mut slider);
    run(&mut slider, 30, Some(Vector2::new(1100.0, 600.0)));
    assert!(slider.pointer().moving);

    run(&mut slider, 1, None);
    let sample = slider.pointer();
    assert!(!sample.moving);
    assert_eq!(sample.trailing, Vector2::new(640.0, 360.0));
    assert_eq!(sample.kinetic, Vector2::new(0.0, 0.0));
}
