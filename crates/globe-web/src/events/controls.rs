use crate::app::App;
use crate::dom;
use globe_core::GlobeEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_select_value(ev: &web::Event) -> Option<String> {
    let select = ev.target()?.dyn_into::<web::HtmlSelectElement>().ok()?;
    Some(select.value())
}

pub fn resize(_ev: &web::Event, app: &App) -> Option<GlobeEvent> {
    // backing store follows CSS size so the renderer picks up the change next frame
    dom::sync_canvas_backing_size(&app.canvas);
    Some(GlobeEvent::Resize(dom::css_viewport(&app.canvas)))
}

pub fn layer(ev: &web::Event, _app: &App) -> Option<GlobeEvent> {
    target_select_value(ev).map(GlobeEvent::LayerChanged)
}

pub fn region(ev: &web::Event, _app: &App) -> Option<GlobeEvent> {
    target_select_value(ev).map(GlobeEvent::RegionChanged)
}

pub fn refresh(_ev: &web::Event, _app: &App) -> Option<GlobeEvent> {
    Some(GlobeEvent::Refresh)
}

pub fn close_info(_ev: &web::Event, _app: &App) -> Option<GlobeEvent> {
    Some(GlobeEvent::CloseInfo)
}
