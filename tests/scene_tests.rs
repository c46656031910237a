// Host-side tests for the scene tree, camera rays and picking helpers.

use glam::{Vec2, Vec3};
use trash_sort_core::*;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn tree() -> SceneTree {
    SceneTree::new(Camera::default(), VIEWPORT)
}

fn pickable(at: Vec3) -> SceneObject {
    SceneObject {
        kind: NodeKind::Group("ball"),
        transform: Transform::from_translation(at),
        pick_radius: 0.8,
    }
}

#[test]
fn removing_a_group_removes_its_children() {
    let mut t = tree();
    let root = t.root();
    let group = t.add_object(root, SceneObject::group("g")).unwrap();
    let a = t.add_object(group, pickable(Vec3::ZERO)).unwrap();
    let b = t.add_object(group, pickable(Vec3::X)).unwrap();
    assert_eq!(t.len(), 4);
    assert_eq!(t.children(group), &[a, b]);
    assert_eq!(t.parent(a), Some(group));

    assert!(t.remove_object(group));
    assert!(!t.contains(group));
    assert!(!t.contains(a));
    assert!(!t.contains(b));
    assert!(t.children(root).is_empty());
    assert_eq!(t.len(), 1);
}

#[test]
fn root_cannot_be_removed() {
    let mut t = tree();
    let root = t.root();
    assert!(!t.remove_object(root));
    assert!(t.contains(root));
}

#[test]
fn removing_twice_reports_false() {
    let mut t = tree();
    let root = t.root();
    let n = t.add_object(root, pickable(Vec3::ZERO)).unwrap();
    assert!(t.remove_object(n));
    assert!(!t.remove_object(n));
    assert!(!t.set_transform(n, Transform::IDENTITY));
    assert!(t.transform(n).is_none());
}

#[test]
fn cannot_attach_to_missing_parent() {
    let mut t = tree();
    let root = t.root();
    let gone = t.add_object(root, SceneObject::group("tmp")).unwrap();
    t.remove_object(gone);
    assert!(t.add_object(gone, pickable(Vec3::ZERO)).is_none());
}

#[test]
fn world_position_includes_parent_transform() {
    let mut t = tree();
    let root = t.root();
    let group = t
        .add_object(
            root,
            SceneObject {
                transform: Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
                ..SceneObject::group("offset")
            },
        )
        .unwrap();
    let child = t.add_object(group, pickable(Vec3::new(0.0, 2.0, 0.0))).unwrap();
    let p = t.world_position(child).unwrap();
    assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
}

#[test]
fn visit_walks_parents_before_children() {
    let mut t = tree();
    let root = t.root();
    let g1 = t.add_object(root, SceneObject::group("g1")).unwrap();
    let a = t.add_object(g1, pickable(Vec3::ZERO)).unwrap();
    let g2 = t.add_object(root, SceneObject::group("g2")).unwrap();
    let mut order = Vec::new();
    t.visit(|id, _, _| order.push(id));
    assert_eq!(order, vec![g1, a, g2]);
}

#[test]
fn hit_test_returns_closest_candidate() {
    let mut t = tree();
    let root = t.root();
    let eye = t.camera().eye;
    // Two spheres on the same line of sight; `near` sits closer to the camera.
    let far_pos = Vec3::new(0.0, 2.0, 0.0);
    let near_pos = far_pos + (eye - far_pos).normalize() * 3.0;
    let far = t.add_object(root, pickable(far_pos)).unwrap();
    let near = t.add_object(root, pickable(near_pos)).unwrap();
    let screen = t.camera().world_to_screen(far_pos, VIEWPORT).unwrap();

    assert_eq!(t.hit_test(screen, &[far, near]), Some(near));
    assert_eq!(t.hit_test(screen, &[far]), Some(far));
    assert_eq!(t.hit_test(Vec2::new(1.0, 1.0), &[far, near]), None);
}

#[test]
fn hit_test_skips_unpickable_and_missing_nodes() {
    let mut t = tree();
    let root = t.root();
    let group = t.add_object(root, SceneObject::group("g")).unwrap();
    let ball = t.add_object(root, pickable(Vec3::ZERO)).unwrap();
    let screen = t.camera().world_to_screen(Vec3::ZERO, VIEWPORT).unwrap();
    assert_eq!(t.hit_test(screen, &[group]), None);
    t.remove_object(ball);
    assert_eq!(t.hit_test(screen, &[ball]), None);
}

#[test]
fn pointer_projects_onto_ground_plane() {
    let t = tree();
    let ground = Vec3::new(-2.0, 0.0, 1.5);
    let screen = t.camera().world_to_screen(ground, VIEWPORT).unwrap();
    let hit = t.project_to_plane(screen, 0.0).unwrap();
    assert!((hit - ground).length() < 0.1);
}

#[test]
fn viewport_change_updates_aspect() {
    let mut t = tree();
    t.set_viewport(Vec2::new(1000.0, 500.0));
    assert!((t.camera().aspect - 2.0).abs() < 1e-6);
    t.set_viewport(Vec2::ZERO);
    assert_eq!(t.viewport(), Vec2::ONE);
}

#[test]
fn ray_sphere_from_outside_and_inside() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
    assert!((hit - 4.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 1.0).is_some());
}

#[test]
fn ray_plane_parallel_misses() {
    assert!(ray_plane_y(Vec3::new(0.0, 1.0, 0.0), Vec3::X, 0.0).is_none());
    let p = ray_plane_y(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 0.0).unwrap();
    assert_eq!(p, Vec3::ZERO);
}

#[test]
fn screen_ray_through_center_points_at_target() {
    let cam = Camera::default();
    let ray = cam.screen_ray(VIEWPORT / 2.0, VIEWPORT);
    let to_target = (cam.target - cam.eye).normalize();
    assert!(ray.dir.dot(to_target) > 0.999);
}
