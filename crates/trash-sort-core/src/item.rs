use crate::category::{BinCategory, TrashCategory, TrashVariant};
use crate::params::BinConfig;
use crate::scene::NodeId;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An in-progress wrong-bin wiggle. `generation` tells stale timer steps apart
/// from the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ShakeState {
    pub origin: Vec3,
    pub generation: u32,
}

#[derive(Clone, Debug)]
pub struct TrashItem {
    pub id: ItemId,
    pub category: TrashCategory,
    pub variant: &'static TrashVariant,
    pub position: Vec3,
    pub node: NodeId,
    pub(crate) shake: Option<ShakeState>,
}

impl TrashItem {
    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Bin {
    pub category: BinCategory,
    pub position: Vec3,
    pub node: NodeId,
}

/// Anything that has a bin category at a fixed spot on the ground.
pub trait BinSite {
    fn category(&self) -> BinCategory;
    fn position(&self) -> Vec3;
}

impl BinSite for Bin {
    fn category(&self) -> BinCategory {
        self.category
    }
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl BinSite for BinConfig {
    fn category(&self) -> BinCategory {
        self.category
    }
    fn position(&self) -> Vec3 {
        self.position
    }
}
