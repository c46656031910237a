use crate::constants::DRAGGING_CLASS;
use crate::dom;
use crate::input::{self, PointerSlot};
use crate::GameSession;
use std::cell::RefCell;
use std::rc::Rc;
use trash_sort_core::Placement;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub session: Rc<RefCell<GameSession>>,
    pub pointer: Rc<RefCell<PointerSlot>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.pointer.borrow_mut().claim(ev.pointer_id()) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let picked = w.session.borrow_mut().pointer_down(pos);
        match picked {
            Some(id) => {
                log::debug!("[pointer] begin drag on {}", id);
                _ = w.canvas.set_pointer_capture(ev.pointer_id());
                dom::set_body_class(&w.document, DRAGGING_CLASS, true);
                // only swallow the event when it started a drag, so buttons keep working
                ev.prevent_default();
            }
            None => {
                w.pointer.borrow_mut().release(ev.pointer_id());
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.pointer.borrow().owns(ev.pointer_id()) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if w.session.borrow_mut().pointer_move(pos) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event_name: &'static str) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.pointer.borrow_mut().release(ev.pointer_id()) {
            return;
        }
        dom::set_body_class(&w.document, DRAGGING_CLASS, false);
        let outcome = w.session.borrow_mut().pointer_up();
        match outcome {
            Some(Placement::Correct { category, .. }) => {
                log::debug!("[pointer] {event_name}: sorted into {}", category.name())
            }
            Some(Placement::Incorrect { category, .. }) => {
                log::debug!("[pointer] {event_name}: wrong bin ({})", category.name())
            }
            Some(Placement::Missed) | None => {}
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
