use crate::app::App;
use crate::render::{self, MarkerInstance, SceneView};
use globe_core::{Camera, GlobeEvent, PickMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<App>,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
    pub instances: Vec<MarkerInstance>,
}

impl FrameContext {
    pub fn new(app: Rc<App>, gpu: Option<render::GpuState>) -> Self {
        Self {
            app,
            gpu,
            last_instant: Instant::now(),
            instances: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.app.send(GlobeEvent::Tick { dt_sec });

        let state = self.app.state.borrow();
        if self.app.take_markers_dirty() {
            self.instances = state
                .markers()
                .iter()
                .map(MarkerInstance::from_marker)
                .collect();
        }
        for (inst, m) in self.instances.iter_mut().zip(state.markers()) {
            inst.color[3] = state.marker_opacity(m);
        }

        let Some(g) = &mut self.gpu else {
            return;
        };
        let canvas = &self.app.canvas;
        g.resize_if_needed(canvas.width(), canvas.height());
        let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
        let scene = SceneView {
            camera: Camera::looking_at_origin(state.controls.camera_z, aspect),
            globe_rotation: state.controls.orientation,
            markers_follow_globe: state.config.pick_mode == PickMode::Oriented,
            time_sec: state.elapsed_sec,
            markers: &self.instances,
        };
        if let Err(e) = g.render(&scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
