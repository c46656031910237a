//! Camera description shared by picking and the web renderer.
//!
//! These types avoid referencing platform-specific APIs. Screen coordinates are
//! pixels with the origin at the top-left of the viewport, `y` growing down.

use crate::constants::{camera_eye_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Keep the projection in step with the drawing surface.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.aspect = viewport.x / viewport.y.max(1.0);
    }

    /// World-space ray through a screen pixel.
    pub fn screen_ray(&self, screen: Vec2, viewport: Vec2) -> Ray {
        let ndc_x = (2.0 * screen.x / viewport.x.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / viewport.y.max(1.0));
        let inv = self.view_proj().inverse();
        let p_near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p0: Vec3 = p_near.truncate() / p_near.w;
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: p0,
            dir: (p1 - p0).normalize(),
        }
    }

    /// Pixel position of a world point, or `None` when it is behind the camera.
    pub fn world_to_screen(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }
}
