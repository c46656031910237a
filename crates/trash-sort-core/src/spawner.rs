use crate::category::{TrashCategory, TrashVariant};
use crate::params::GameParams;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnPlan {
    pub category: TrashCategory,
    pub variant: &'static TrashVariant,
    pub position: Vec3,
}

pub type SpawnBatch = SmallVec<[SpawnPlan; 4]>;

/// Roll a fresh batch: uniform categories, one row per item in front of the bins.
pub fn spawn_batch(rng: &mut impl Rng, params: &GameParams) -> SpawnBatch {
    (0..params.spawn_count)
        .map(|i| {
            let category = TrashCategory::random(rng);
            let x = (rng.gen::<f32>() - 0.5) * params.spawn_width;
            let variant = category.random_variant(rng);
            SpawnPlan {
                category,
                variant,
                position: Vec3::new(
                    x,
                    params.spawn_height,
                    params.spawn_z_start + i as f32 * params.spawn_z_step,
                ),
            }
        })
        .collect()
}
