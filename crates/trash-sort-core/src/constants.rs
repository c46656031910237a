use glam::Vec3;

// Shared gameplay tuning constants used by the core and the web frontend.

// Placement
pub const BIN_RADIUS: f32 = 2.5; // max x/z distance from a bin center that counts as a drop into it
pub const POINTS_PER_CORRECT: u32 = 10;

// Spawning
pub const SPAWN_COUNT: usize = 3;
pub const SPAWN_WIDTH: f32 = 8.0; // items spawn with x in [-SPAWN_WIDTH/2, SPAWN_WIDTH/2)
pub const SPAWN_HEIGHT: f32 = 2.0;
pub const SPAWN_Z_START: f32 = 3.0;
pub const SPAWN_Z_STEP: f32 = 1.5; // each item in a batch sits one row further from the bins

// Dragging
pub const DRAG_HEIGHT: f32 = 2.0; // y held constant while an item is dragged
pub const DRAG_PLANE_Y: f32 = 0.0; // pointer rays are intersected with this plane
pub const PICK_SPHERE_RADIUS: f32 = 0.8; // ray-sphere radius for picking trash

// Deferred effects (milliseconds)
pub const RESPAWN_DELAY_MS: u64 = 1000;
pub const SHAKE_STEPS: u32 = 6;
pub const SHAKE_INTERVAL_MS: u64 = 50;
pub const SHAKE_AMOUNT: f32 = 0.3; // full width of the random x/z jitter
pub const FALL_DURATION_MS: u64 = 500;
pub const FALL_SPIN_PER_SEC: f32 = 6.0; // radians
pub const FALL_END_SCALE: f32 = 0.05;

// Default bin row, left to right
pub const DEFAULT_BIN_POSITIONS: [[f32; 3]; 3] = [
    [-5.0, 0.0, -3.0],
    [0.0, 0.0, -3.0],
    [5.0, 0.0, -3.0],
];

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 8.0, 12.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_EYE)
}
