//! Scene graph seam between the game logic and whatever draws it.
//!
//! [`Scene`] is what the session talks to: add and remove objects, move them,
//! and ask which object sits under a screen point. [`SceneTree`] is the
//! in-memory implementation the web renderer draws from. Every node has exactly
//! one parent and owns its children; removing a node drops its whole subtree.

use crate::camera::Camera;
use crate::category::{BinCategory, TrashCategory, TrashVariant};
use crate::item::ItemId;
use crate::picking::{ray_plane_y, ray_sphere};
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation_y: 0.0,
        scale: 1.0,
    };

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Group(&'static str),
    Bin(BinCategory),
    Trash {
        item: ItemId,
        category: TrashCategory,
        variant: &'static TrashVariant,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub kind: NodeKind,
    pub transform: Transform,
    /// Radius used by [`Scene::hit_test`]; zero means never picked.
    pub pick_radius: f32,
}

impl SceneObject {
    pub fn group(name: &'static str) -> Self {
        Self {
            kind: NodeKind::Group(name),
            transform: Transform::IDENTITY,
            pick_radius: 0.0,
        }
    }
}

pub trait Scene {
    fn root(&self) -> NodeId;
    /// Attach a new object under `parent`. `None` if `parent` is not in the scene.
    fn add_object(&mut self, parent: NodeId, object: SceneObject) -> Option<NodeId>;
    /// Remove a node and everything below it. The root cannot be removed.
    fn remove_object(&mut self, node: NodeId) -> bool;
    fn contains(&self, node: NodeId) -> bool;
    fn transform(&self, node: NodeId) -> Option<Transform>;
    fn set_transform(&mut self, node: NodeId, transform: Transform) -> bool;
    /// Topmost (closest to the camera) of `candidates` under a screen point.
    fn hit_test(&self, screen: Vec2, candidates: &[NodeId]) -> Option<NodeId>;
    /// Where the pointer ray through `screen` meets the horizontal plane at `plane_y`.
    fn project_to_plane(&self, screen: Vec2, plane_y: f32) -> Option<Vec3>;
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    object: SceneObject,
}

#[derive(Clone, Debug)]
pub struct SceneTree {
    nodes: FnvHashMap<NodeId, Node>,
    root: NodeId,
    next_id: u32,
    camera: Camera,
    viewport: Vec2,
}

impl SceneTree {
    pub fn new(camera: Camera, viewport: Vec2) -> Self {
        let root = NodeId(0);
        let mut nodes = FnvHashMap::default();
        nodes.insert(
            root,
            Node {
                parent: None,
                children: SmallVec::new(),
                object: SceneObject::group("root"),
            },
        );
        let mut tree = Self {
            nodes,
            root,
            next_id: 1,
            camera,
            viewport,
        };
        tree.set_viewport(viewport);
        tree
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport.max(Vec2::ONE);
        self.camera.set_viewport(self.viewport);
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn object(&self, node: NodeId) -> Option<&SceneObject> {
        self.nodes.get(&node).map(|n| &n.object)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn world_matrix(&self, node: NodeId) -> Option<Mat4> {
        let mut m = self.nodes.get(&node)?.object.transform.matrix();
        let mut cursor = self.parent(node);
        while let Some(p) = cursor {
            let parent = self.nodes.get(&p)?;
            m = parent.object.transform.matrix() * m;
            cursor = parent.parent;
        }
        Some(m)
    }

    pub fn world_position(&self, node: NodeId) -> Option<Vec3> {
        self.world_matrix(node).map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Depth-first walk over every node below the root, parents before children.
    pub fn visit(&self, mut f: impl FnMut(NodeId, &SceneObject, Mat4)) {
        let mut stack: Vec<(NodeId, Mat4)> = self
            .children(self.root)
            .iter()
            .rev()
            .map(|&c| (c, Mat4::IDENTITY))
            .collect();
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            let world = parent_world * node.object.transform.matrix();
            f(id, &node.object, world);
            for &c in node.children.iter().rev() {
                stack.push((c, world));
            }
        }
    }
}

impl Scene for SceneTree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn add_object(&mut self, parent: NodeId, object: SceneObject) -> Option<NodeId> {
        let id = NodeId(self.next_id);
        self.nodes.get_mut(&parent)?.children.push(id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                parent: Some(parent),
                children: SmallVec::new(),
                object,
            },
        );
        Some(id)
    }

    fn remove_object(&mut self, node: NodeId) -> bool {
        if node == self.root {
            return false;
        }
        let Some(removed) = self.nodes.remove(&node) else {
            return false;
        };
        if let Some(parent) = removed.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != node);
        }
        let mut pending: Vec<NodeId> = removed.children.into_vec();
        while let Some(id) = pending.pop() {
            if let Some(n) = self.nodes.remove(&id) {
                pending.extend(n.children);
            }
        }
        true
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn transform(&self, node: NodeId) -> Option<Transform> {
        self.nodes.get(&node).map(|n| n.object.transform)
    }

    fn set_transform(&mut self, node: NodeId, transform: Transform) -> bool {
        match self.nodes.get_mut(&node) {
            Some(n) => {
                n.object.transform = transform;
                true
            }
            None => false,
        }
    }

    fn hit_test(&self, screen: Vec2, candidates: &[NodeId]) -> Option<NodeId> {
        let ray = self.camera.screen_ray(screen, self.viewport);
        let mut best = None::<(NodeId, f32)>;
        for &id in candidates {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if node.object.pick_radius <= 0.0 {
                continue;
            }
            let Some(center) = self.world_position(id) else {
                continue;
            };
            let radius = node.object.pick_radius * node.object.transform.scale;
            if let Some(t) = ray_sphere(ray.origin, ray.dir, center, radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((id, t)),
                }
            }
        }
        best.map(|(id, _)| id)
    }

    fn project_to_plane(&self, screen: Vec2, plane_y: f32) -> Option<Vec3> {
        let ray = self.camera.screen_ray(screen, self.viewport);
        ray_plane_y(ray.origin, ray.dir, plane_y)
    }
}
