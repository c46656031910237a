use crate::constants::{FALL_END_SCALE, FALL_SPIN_PER_SEC};
use crate::item::ItemId;
use crate::scene::{NodeId, Transform};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::time::Duration;

/// Work the session defers to a later `update`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Task {
    ShakeStep {
        item: ItemId,
        generation: u32,
        step: u32,
    },
    RespawnCheck,
}

/// A correctly sorted item sinking into its bin. The node is already out of
/// the active set; it only lives on in the scene until the animation ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallAnimation {
    pub node: NodeId,
    pub started: Duration,
    pub from: Transform,
    pub to_y: f32,
}

impl FallAnimation {
    /// Transform at `now`, and whether the fall has finished.
    pub fn sample(&self, now: Duration, duration: Duration) -> (Transform, bool) {
        let elapsed = now.saturating_sub(self.started);
        let progress = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
        let y = self.from.translation.y + (self.to_y - self.from.translation.y) * progress;
        let shrink = 1.0 + (FALL_END_SCALE - 1.0) * progress;
        let t = Transform {
            translation: Vec3::new(self.from.translation.x, y, self.from.translation.z),
            rotation_y: self.from.rotation_y + FALL_SPIN_PER_SEC * elapsed.as_secs_f32(),
            scale: self.from.scale * shrink,
        };
        (t, progress >= 1.0)
    }
}

/// Random x/z jitter within a square `amount` wide.
#[inline]
pub fn shake_jitter(rng: &mut impl Rng, amount: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * amount,
        (rng.gen::<f32>() - 0.5) * amount,
    )
}
