use crate::app::App;
use crate::input;
use globe_core::GlobeEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn mouse_pos(ev: &web::Event, app: &App) -> Option<glam::Vec2> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    Some(input::pointer_canvas_css(me, &app.canvas))
}

pub fn down(ev: &web::Event, app: &App) -> Option<GlobeEvent> {
    mouse_pos(ev, app).map(GlobeEvent::PointerDown)
}

pub fn up(_ev: &web::Event, _app: &App) -> Option<GlobeEvent> {
    Some(GlobeEvent::PointerUp)
}

pub fn moved(ev: &web::Event, app: &App) -> Option<GlobeEvent> {
    mouse_pos(ev, app).map(GlobeEvent::PointerMove)
}

pub fn click(ev: &web::Event, app: &App) -> Option<GlobeEvent> {
    mouse_pos(ev, app).map(GlobeEvent::Click)
}

pub fn wheel(ev: &web::Event, _app: &App) -> Option<GlobeEvent> {
    let we = ev.dyn_ref::<web::WheelEvent>()?;
    ev.prevent_default();
    Some(GlobeEvent::Wheel {
        delta_y: we.delta_y() as f32,
    })
}
