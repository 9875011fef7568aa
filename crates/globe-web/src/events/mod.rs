//! DOM listener table.
//!
//! Each binding names a target, a DOM event type and a translator that turns
//! the raw event into a [`GlobeEvent`]. The table is walked once at startup;
//! every listener forwards into [`App::send`].

pub mod controls;
pub mod pointer;

use crate::app::App;
use globe_core::GlobeEvent;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Translate = fn(&web::Event, &App) -> Option<GlobeEvent>;

#[derive(Clone, Copy, Debug)]
pub enum Target {
    Canvas,
    Window,
    Element(&'static str),
}

pub struct Binding {
    pub target: Target,
    pub event: &'static str,
    pub passive: bool,
    pub translate: Translate,
}

const fn bind(target: Target, event: &'static str, translate: Translate) -> Binding {
    Binding {
        target,
        event,
        passive: true,
        translate,
    }
}

pub const BINDINGS: &[Binding] = &[
    bind(Target::Canvas, "mousedown", pointer::down),
    bind(Target::Canvas, "mouseup", pointer::up),
    bind(Target::Canvas, "mousemove", pointer::moved),
    bind(Target::Canvas, "click", pointer::click),
    Binding {
        target: Target::Canvas,
        event: "wheel",
        passive: false,
        translate: pointer::wheel,
    },
    bind(Target::Window, "resize", controls::resize),
    bind(Target::Element("data-toggle"), "change", controls::layer),
    bind(Target::Element("region-filter"), "change", controls::region),
    bind(Target::Element("refresh-data"), "click", controls::refresh),
    bind(Target::Element("close-info"), "click", controls::close_info),
];

fn resolve(target: Target, app: &App) -> Option<web::EventTarget> {
    match target {
        Target::Canvas => Some(app.canvas.clone().into()),
        Target::Window => web::window().map(Into::into),
        Target::Element(id) => app.document.get_element_by_id(id).map(Into::into),
    }
}

pub fn wire_dom_events(app: &Rc<App>) {
    for b in BINDINGS {
        let Some(target) = resolve(b.target, app) else {
            log::warn!("[events] no target for {:?} `{}`", b.target, b.event);
            continue;
        };
        let app = app.clone();
        let translate = b.translate;
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(event) = translate(&ev, &app) {
                app.send(event);
            }
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(b.passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            b.event,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::error!("[events] {} listener failed: {:?}", b.event, e);
        }
        closure.forget();
    }
}
