// Host-side tests for pure pointer helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_position_scales_to_backing_store() {
    // 400x300 CSS box at (10, 20), backing store at 2x
    let p = client_to_canvas_px(
        Vec2::new(210.0, 170.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(400.0, 300.0));
}

#[test]
fn zero_sized_rect_falls_back_to_local_offset() {
    let p = client_to_canvas_px(
        Vec2::new(15.0, 25.0),
        Vec2::new(10.0, 20.0),
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(5.0, 5.0));
}

#[test]
fn first_pointer_owns_the_slot() {
    let mut slot = PointerSlot::default();
    assert!(slot.claim(1));
    assert!(slot.owns(1));
    assert!(!slot.claim(2));
    assert!(!slot.owns(2));
    assert!(!slot.release(2));
    assert!(slot.owns(1));
    assert!(slot.release(1));
    assert!(slot.claim(2));
}
