#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LOADING_HIDE_DELAY_MS, START_BUTTON_ID};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use trash_sort_core::{Camera, GameParams, InstantClock, SceneTree, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod ui;

/// The session as the browser runs it: a real scene, DOM feedback and wall time.
pub type GameSession = Session<SceneTree, ui::DomFeedback, InstantClock>;

fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width().max(1) as f32, canvas.height().max(1) as f32)
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, session: &Rc<RefCell<GameSession>>) {
    let canvas_resize = canvas.clone();
    let session = session.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        session
            .borrow_mut()
            .scene_mut()
            .set_viewport(canvas_viewport(&canvas_resize));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_start_button(document: &web::Document, session: &Rc<RefCell<GameSession>>) {
    let session = session.clone();
    let doc = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        if session.borrow_mut().start() {
            overlay::hide_instructions(&doc);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trash-sort-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let scene = SceneTree::new(Camera::default(), canvas_viewport(&canvas));
    let feedback = ui::DomFeedback::new(document.clone(), rand::random());
    let session = Session::new(
        GameParams::default(),
        scene,
        feedback,
        InstantClock::new(),
        rand::random(),
    )
    .map_err(|e| anyhow::anyhow!("session setup failed: {e}"))?;
    let session = Rc::new(RefCell::new(session));

    wire_canvas_resize(&canvas, &session);
    overlay::show_instructions(&document);
    wire_start_button(&document, &session);
    {
        let doc = document.clone();
        dom::after_ms(LOADING_HIDE_DELAY_MS, move || overlay::hide_loading(&doc));
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        session: session.clone(),
        pointer: Rc::new(RefCell::new(input::PointerSlot::default())),
    });

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[render] running without WebGPU; game logic still active");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
