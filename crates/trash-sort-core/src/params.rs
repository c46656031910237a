use crate::category::BinCategory;
use crate::constants::*;
use glam::Vec3;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct BinConfig {
    pub category: BinCategory,
    pub position: Vec3,
}

#[derive(Clone, Debug)]
pub struct GameParams {
    pub bins: Vec<BinConfig>,
    pub bin_radius: f32,
    pub points_per_correct: u32,
    pub spawn_count: usize,
    pub spawn_width: f32,
    pub spawn_height: f32,
    pub spawn_z_start: f32,
    pub spawn_z_step: f32,
    pub drag_height: f32,
    pub drag_plane_y: f32,
    pub pick_radius: f32,
    pub respawn_delay: Duration,
    pub shake_steps: u32,
    pub shake_interval: Duration,
    pub shake_amount: f32,
    pub fall_duration: Duration,
}

impl Default for GameParams {
    fn default() -> Self {
        let categories = [BinCategory::Green, BinCategory::Yellow, BinCategory::Blue];
        let bins = categories
            .iter()
            .zip(DEFAULT_BIN_POSITIONS.iter())
            .map(|(&category, &p)| BinConfig {
                category,
                position: Vec3::from_array(p),
            })
            .collect();
        Self {
            bins,
            bin_radius: BIN_RADIUS,
            points_per_correct: POINTS_PER_CORRECT,
            spawn_count: SPAWN_COUNT,
            spawn_width: SPAWN_WIDTH,
            spawn_height: SPAWN_HEIGHT,
            spawn_z_start: SPAWN_Z_START,
            spawn_z_step: SPAWN_Z_STEP,
            drag_height: DRAG_HEIGHT,
            drag_plane_y: DRAG_PLANE_Y,
            pick_radius: PICK_SPHERE_RADIUS,
            respawn_delay: Duration::from_millis(RESPAWN_DELAY_MS),
            shake_steps: SHAKE_STEPS,
            shake_interval: Duration::from_millis(SHAKE_INTERVAL_MS),
            shake_amount: SHAKE_AMOUNT,
            fall_duration: Duration::from_millis(FALL_DURATION_MS),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("at least one bin is required")]
    NoBins,
    #[error("spawn count must be at least 1")]
    ZeroSpawnCount,
    #[error("points per correct placement must be at least 1")]
    ZeroPoints,
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} is not finite")]
    NotFinite { name: &'static str },
}

impl GameParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.bins.is_empty() {
            return Err(ParamsError::NoBins);
        }
        if self.spawn_count == 0 {
            return Err(ParamsError::ZeroSpawnCount);
        }
        if self.points_per_correct == 0 {
            return Err(ParamsError::ZeroPoints);
        }
        for (name, value) in [
            ("bin_radius", self.bin_radius),
            ("pick_radius", self.pick_radius),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name });
            }
            if value <= 0.0 {
                return Err(ParamsError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("spawn_width", self.spawn_width),
            ("spawn_height", self.spawn_height),
            ("spawn_z_start", self.spawn_z_start),
            ("spawn_z_step", self.spawn_z_step),
            ("drag_height", self.drag_height),
            ("drag_plane_y", self.drag_plane_y),
            ("shake_amount", self.shake_amount),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name });
            }
        }
        if self.bins.iter().any(|b| !b.position.is_finite()) {
            return Err(ParamsError::NotFinite {
                name: "bin position",
            });
        }
        Ok(())
    }
}
