use crate::render::{self, Highlights};
use crate::GameSession;
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use trash_sort_core::NodeId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<GameSession>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let mut session = self.session.borrow_mut();
        let viewport = Vec2::new(w as f32, h as f32);
        if session.scene().viewport() != viewport {
            session.scene_mut().set_viewport(viewport);
        }
        session.update();

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.resize_if_needed(w, h);

        let held = session
            .dragged_item()
            .and_then(|id| session.item(id))
            .map(|i| i.node);
        let shaking: SmallVec<[NodeId; 4]> = session
            .items()
            .iter()
            .filter(|i| i.is_shaking())
            .map(|i| i.node)
            .collect();
        let scene = session.scene();
        let instances = render::collect_instances(
            scene,
            &Highlights {
                held,
                shaking: &shaking,
            },
        );
        if let Err(e) = gpu.render(scene.camera(), &instances) {
            match e {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    gpu.resize_if_needed(w.max(1), h.max(1));
                }
                other => log::error!("render error: {:?}", other),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
