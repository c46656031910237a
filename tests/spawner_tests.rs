// Host-side tests for batch spawning.

use rand::prelude::*;
use trash_sort_core::*;

#[test]
fn batch_has_configured_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let params = GameParams::default();
    let batch = spawn_batch(&mut rng, &params);
    assert_eq!(batch.len(), SPAWN_COUNT);

    let five = GameParams {
        spawn_count: 5,
        ..GameParams::default()
    };
    assert_eq!(spawn_batch(&mut rng, &five).len(), 5);
}

#[test]
fn items_are_laid_out_in_rows() {
    let mut rng = StdRng::seed_from_u64(11);
    let params = GameParams::default();
    for _ in 0..20 {
        let batch = spawn_batch(&mut rng, &params);
        for (i, plan) in batch.iter().enumerate() {
            let expected_z = SPAWN_Z_START + i as f32 * SPAWN_Z_STEP;
            assert!((plan.position.z - expected_z).abs() < 1e-6);
            assert_eq!(plan.position.y, SPAWN_HEIGHT);
            assert!(plan.position.x >= -SPAWN_WIDTH / 2.0);
            assert!(plan.position.x <= SPAWN_WIDTH / 2.0);
        }
    }
}

#[test]
fn variant_belongs_to_its_category() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = GameParams::default();
    for _ in 0..50 {
        for plan in spawn_batch(&mut rng, &params) {
            assert!(plan
                .category
                .variants()
                .iter()
                .any(|v| v.name == plan.variant.name));
        }
    }
}

#[test]
fn same_seed_same_batch() {
    let params = GameParams::default();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        assert_eq!(spawn_batch(&mut a, &params), spawn_batch(&mut b, &params));
    }
}

#[test]
fn every_category_shows_up_eventually() {
    let mut rng = StdRng::seed_from_u64(1234);
    let params = GameParams::default();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        for plan in spawn_batch(&mut rng, &params) {
            seen.insert(plan.category);
        }
    }
    assert_eq!(seen.len(), ALL_TRASH_CATEGORIES.len());
}
