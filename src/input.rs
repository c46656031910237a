use glam::Vec2;
use web_sys as web;

/// Map a CSS-pixel client position into the canvas backing store, which may
/// be scaled by devicePixelRatio.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return local;
    }
    local / rect_size * backing
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Only the first pointer that went down drives a drag; others are ignored
/// until it lifts.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerSlot {
    active: Option<i32>,
}

impl PointerSlot {
    pub fn claim(&mut self, pointer_id: i32) -> bool {
        match self.active {
            Some(id) => id == pointer_id,
            None => {
                self.active = Some(pointer_id);
                true
            }
        }
    }

    #[inline]
    pub fn owns(&self, pointer_id: i32) -> bool {
        self.active == Some(pointer_id)
    }

    pub fn release(&mut self, pointer_id: i32) -> bool {
        if self.owns(pointer_id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
