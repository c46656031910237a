use glam::{Vec2, Vec3};

/// Distance along the ray to the first sphere hit in front of the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Intersection of a ray with the horizontal plane at height `y`.
#[inline]
pub fn ray_plane_y(ray_origin: Vec3, ray_dir: Vec3, y: f32) -> Option<Vec3> {
    if ray_dir.y.abs() <= 1e-6 {
        return None;
    }
    let t = (y - ray_origin.y) / ray_dir.y;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}

/// Project a world position onto the ground plane used for bin distances.
#[inline]
pub fn xz(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}
