// Host-side tests for drop resolution.

use glam::{Vec2, Vec3};
use trash_sort_core::*;

fn default_bins() -> Vec<BinConfig> {
    GameParams::default().bins
}

#[test]
fn every_category_has_exactly_one_bin() {
    assert_eq!(TrashCategory::Organic.correct_bin(), BinCategory::Green);
    assert_eq!(TrashCategory::Plastic.correct_bin(), BinCategory::Yellow);
    assert_eq!(TrashCategory::Paper.correct_bin(), BinCategory::Blue);
    for c in ALL_TRASH_CATEGORIES {
        let matching = ALL_BIN_CATEGORIES
            .iter()
            .filter(|b| **b == c.correct_bin())
            .count();
        assert_eq!(matching, 1);
    }
}

#[test]
fn organic_near_green_bin_is_correct() {
    let bins = default_bins();
    let p = resolve(TrashCategory::Organic, Vec2::new(-4.5, -3.2), &bins, BIN_RADIUS);
    assert_eq!(
        p,
        Placement::Correct {
            bin: 0,
            category: BinCategory::Green
        }
    );
    assert!(p.is_correct());
    assert_eq!(p.bin_index(), Some(0));
}

#[test]
fn organic_near_yellow_bin_is_incorrect() {
    let bins = default_bins();
    let p = resolve(TrashCategory::Organic, Vec2::new(0.2, -3.1), &bins, BIN_RADIUS);
    assert_eq!(
        p,
        Placement::Incorrect {
            bin: 1,
            category: BinCategory::Yellow
        }
    );
    assert!(p.is_incorrect());
}

#[test]
fn drop_far_from_bins_is_missed() {
    let bins = default_bins();
    let p = resolve(TrashCategory::Paper, Vec2::new(0.0, 5.0), &bins, BIN_RADIUS);
    assert_eq!(p, Placement::Missed);
    assert_eq!(p.bin_index(), None);
}

#[test]
fn radius_is_exclusive() {
    let bins = vec![BinConfig {
        category: BinCategory::Blue,
        position: Vec3::new(0.0, 0.0, 0.0),
    }];
    let at_edge = resolve(TrashCategory::Paper, Vec2::new(2.5, 0.0), &bins, 2.5);
    assert_eq!(at_edge, Placement::Missed);
    let inside = resolve(TrashCategory::Paper, Vec2::new(2.49, 0.0), &bins, 2.5);
    assert!(inside.is_correct());
}

#[test]
fn height_does_not_count_toward_distance() {
    let bins = vec![BinConfig {
        category: BinCategory::Green,
        position: Vec3::new(1.0, 40.0, 1.0),
    }];
    let p = resolve(TrashCategory::Organic, Vec2::new(1.0, 1.0), &bins, 2.5);
    assert!(p.is_correct());
}

#[test]
fn nearest_bin_prefers_first_on_tie() {
    let bins = default_bins();
    // Exactly between green (-5) and yellow (0)
    let (index, d) = nearest_bin(&bins, Vec2::new(-2.5, -3.0)).unwrap();
    assert_eq!(index, 0);
    assert!((d - 2.5).abs() < 1e-6);
}

#[test]
fn nearest_bin_picks_closest() {
    let bins = default_bins();
    let (index, _) = nearest_bin(&bins, Vec2::new(4.0, -2.0)).unwrap();
    assert_eq!(index, 2);
}

#[test]
fn no_bins_means_missed() {
    let bins: Vec<BinConfig> = Vec::new();
    assert!(nearest_bin(&bins, Vec2::ZERO).is_none());
    assert_eq!(
        resolve(TrashCategory::Plastic, Vec2::ZERO, &bins, 2.5),
        Placement::Missed
    );
}

#[test]
fn nan_drop_is_missed() {
    let bins = default_bins();
    let p = resolve(TrashCategory::Paper, Vec2::new(f32::NAN, -3.0), &bins, BIN_RADIUS);
    assert_eq!(p, Placement::Missed);
    assert!(nearest_bin(&bins, Vec2::NAN).is_none());
}

#[test]
fn nan_radius_never_matches() {
    let bins = default_bins();
    let p = resolve(TrashCategory::Organic, Vec2::new(-5.0, -3.0), &bins, f32::NAN);
    assert_eq!(p, Placement::Missed);
}
