use crate::dom;
use crate::panel;
use globe_core::{Dispatcher, Effect, GlobeEvent, GlobeState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything the DOM callbacks and the frame loop share. Built once in
/// `init` and handed around as `Rc<App>`.
pub struct App {
    pub state: RefCell<GlobeState>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    dispatcher: Dispatcher,
    markers_dirty: Cell<bool>,
}

impl App {
    pub fn new(
        state: GlobeState,
        dispatcher: Dispatcher,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            document,
            canvas,
            dispatcher,
            markers_dirty: Cell::new(true),
        })
    }

    /// Dispatch an event and apply the resulting effects.
    pub fn send(self: &Rc<Self>, event: GlobeEvent) {
        let effects = {
            let mut st = self.state.borrow_mut();
            self.dispatcher.dispatch(&mut st, &event)
        };
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Returns true once after the visible marker list was rebuilt.
    pub fn take_markers_dirty(&self) -> bool {
        self.markers_dirty.replace(false)
    }

    fn apply(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::ShowLoading => panel::set_loading(&self.document, true),
            Effect::HideLoading => panel::set_loading(&self.document, false),
            Effect::ScheduleDataLoad { delay_ms } => {
                let app = self.clone();
                dom::set_timeout(delay_ms as i32, move || {
                    let today = chrono::Local::now().date_naive();
                    app.send(GlobeEvent::DataLoaded { today });
                });
            }
            Effect::ShowPanel(info) => panel::show(&self.document, &info),
            Effect::HidePanel => panel::hide(&self.document),
            Effect::MarkersChanged => {
                log::info!("[data] {} markers visible", self.state.borrow().markers().len());
                self.markers_dirty.set(true);
            }
        }
    }
}
