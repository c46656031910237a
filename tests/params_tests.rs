// Host-side tests for game parameters, defaults and the category tables.

use glam::Vec3;
use std::time::Duration;
use trash_sort_core::effects::FallAnimation;
use trash_sort_core::*;

#[test]
fn defaults_are_valid() {
    let p = GameParams::default();
    assert!(p.validate().is_ok());
    assert_eq!(p.bins.len(), 3);
    assert_eq!(p.bin_radius, BIN_RADIUS);
    assert_eq!(p.respawn_delay, Duration::from_millis(RESPAWN_DELAY_MS));
    let cats: Vec<BinCategory> = p.bins.iter().map(|b| b.category).collect();
    assert_eq!(cats, ALL_BIN_CATEGORIES.to_vec());
}

#[test]
fn validation_errors() {
    let base = GameParams::default();
    let cases = [
        (
            GameParams {
                bins: Vec::new(),
                ..base.clone()
            },
            ParamsError::NoBins,
        ),
        (
            GameParams {
                spawn_count: 0,
                ..base.clone()
            },
            ParamsError::ZeroSpawnCount,
        ),
        (
            GameParams {
                points_per_correct: 0,
                ..base.clone()
            },
            ParamsError::ZeroPoints,
        ),
        (
            GameParams {
                bin_radius: -1.0,
                ..base.clone()
            },
            ParamsError::NotPositive {
                name: "bin_radius",
                value: -1.0,
            },
        ),
        (
            GameParams {
                pick_radius: f32::NAN,
                ..base.clone()
            },
            ParamsError::NotFinite {
                name: "pick_radius",
            },
        ),
        (
            GameParams {
                drag_height: f32::INFINITY,
                ..base.clone()
            },
            ParamsError::NotFinite {
                name: "drag_height",
            },
        ),
    ];
    for (params, expected) in cases {
        assert_eq!(params.validate(), Err(expected));
    }
}

#[test]
fn non_finite_bin_position_is_rejected() {
    let mut p = GameParams::default();
    p.bins[1].position = Vec3::new(f32::NAN, 0.0, 0.0);
    assert!(matches!(p.validate(), Err(ParamsError::NotFinite { .. })));
}

#[test]
fn error_messages_name_the_field() {
    let e = ParamsError::NotPositive {
        name: "bin_radius",
        value: 0.0,
    };
    assert!(e.to_string().contains("bin_radius"));
}

#[test]
fn each_category_has_three_variants() {
    for c in ALL_TRASH_CATEGORIES {
        assert_eq!(c.variants().len(), 3);
    }
    let organic: Vec<&str> = TrashCategory::Organic
        .variants()
        .iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(organic, vec!["apple", "banana", "fish"]);
}

#[test]
fn hex_colors_decode() {
    assert_eq!(hex_rgb(0xff0000), [1.0, 0.0, 0.0]);
    assert_eq!(hex_rgb(0x00ff00), [0.0, 1.0, 0.0]);
    assert_eq!(hex_rgb(0x0000ff), [0.0, 0.0, 1.0]);
}

#[test]
fn fall_animation_ends_at_bin_height() {
    let fall = FallAnimation {
        node: SceneTree::new(Camera::default(), glam::Vec2::ONE).root(),
        started: Duration::from_millis(100),
        from: Transform::from_translation(Vec3::new(1.0, 2.0, 3.0)),
        to_y: 0.0,
    };
    let d = Duration::from_millis(FALL_DURATION_MS);
    let (start, done) = fall.sample(Duration::from_millis(100), d);
    assert!(!done);
    assert_eq!(start.translation, Vec3::new(1.0, 2.0, 3.0));
    let (end, done) = fall.sample(Duration::from_millis(100 + FALL_DURATION_MS), d);
    assert!(done);
    assert!(end.translation.y.abs() < 1e-6);
    assert!((end.scale - FALL_END_SCALE).abs() < 1e-6);
    // Sampling before the start clamps to the beginning.
    let (early, _) = fall.sample(Duration::ZERO, d);
    assert_eq!(early.translation.y, 2.0);
}
