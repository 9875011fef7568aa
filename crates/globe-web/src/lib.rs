#![cfg(target_arch = "wasm32")]
use globe_core::{Dispatcher, GlobeConfig, GlobeEvent, GlobeState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "globe-canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let config = GlobeConfig::with_seed(seed);
    log::info!("[config] seed={} pick_mode={:?}", seed, config.pick_mode);
    let state = GlobeState::new(config, dom::css_viewport(&canvas));
    let app = app::App::new(
        state,
        Dispatcher::with_default_handlers(),
        document.clone(),
        canvas.clone(),
    );

    events::wire_dom_events(&app);

    // pick up whatever the selects were restored to by the browser
    if let Some(v) = dom::select_value(&document, "data-toggle") {
        app.send(GlobeEvent::LayerChanged(v));
    }
    if let Some(v) = dom::select_value(&document, "region-filter") {
        app.send(GlobeEvent::RegionChanged(v));
    }
    app.send(GlobeEvent::Refresh);

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
