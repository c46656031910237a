use crate::item::ItemId;
use crate::picking::xz;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSelection {
    pub item: ItemId,
    /// Pointer plane hit minus item position at pickup, on the ground plane.
    pub offset: Vec2,
}

/// One pointer, one item. A second `begin` while something is held is ignored.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    selection: Option<DragSelection>,
    drag_height: f32,
}

impl DragController {
    pub fn new(drag_height: f32) -> Self {
        Self {
            selection: None,
            drag_height,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.selection.is_some()
    }

    #[inline]
    pub fn selected(&self) -> Option<ItemId> {
        self.selection.map(|s| s.item)
    }

    pub fn selection(&self) -> Option<DragSelection> {
        self.selection
    }

    pub fn begin(
        &mut self,
        item: ItemId,
        item_position: Vec3,
        pointer_on_plane: Option<Vec3>,
    ) -> bool {
        if self.selection.is_some() {
            return false;
        }
        let offset = pointer_on_plane
            .map(|p| xz(p) - xz(item_position))
            .unwrap_or(Vec2::ZERO);
        self.selection = Some(DragSelection { item, offset });
        true
    }

    /// New position of the held item for a pointer plane hit.
    pub fn update(&self, pointer_on_plane: Vec3) -> Option<(ItemId, Vec3)> {
        let sel = self.selection?;
        let target = xz(pointer_on_plane) - sel.offset;
        Some((sel.item, Vec3::new(target.x, self.drag_height, target.y)))
    }

    pub fn end(&mut self) -> Option<ItemId> {
        self.selection.take().map(|s| s.item)
    }
}
