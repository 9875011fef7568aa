//! Event dispatch table.
//!
//! Front-ends translate platform input into [`GlobeEvent`]s and hand them to
//! a [`Dispatcher`] built once at startup. Handlers mutate the
//! [`GlobeState`] and report UI work as [`Effect`]s; they never touch the
//! DOM themselves.

use crate::error::{GlobeError, Result};
use crate::geo::Region;
use crate::marker::InfoPanel;
use crate::picker::Viewport;
use crate::state::{GlobeState, LayerFilter};
use chrono::NaiveDate;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum GlobeEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    Wheel { delta_y: f32 },
    Click(Vec2),
    Resize(Viewport),
    LayerChanged(String),
    RegionChanged(String),
    Refresh,
    DataLoaded { today: NaiveDate },
    CloseInfo,
    Tick { dt_sec: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    Wheel,
    Click,
    Resize,
    LayerChanged,
    RegionChanged,
    Refresh,
    DataLoaded,
    CloseInfo,
    Tick,
}

impl GlobeEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GlobeEvent::PointerDown(_) => EventKind::PointerDown,
            GlobeEvent::PointerMove(_) => EventKind::PointerMove,
            GlobeEvent::PointerUp => EventKind::PointerUp,
            GlobeEvent::Wheel { .. } => EventKind::Wheel,
            GlobeEvent::Click(_) => EventKind::Click,
            GlobeEvent::Resize(_) => EventKind::Resize,
            GlobeEvent::LayerChanged(_) => EventKind::LayerChanged,
            GlobeEvent::RegionChanged(_) => EventKind::RegionChanged,
            GlobeEvent::Refresh => EventKind::Refresh,
            GlobeEvent::DataLoaded { .. } => EventKind::DataLoaded,
            GlobeEvent::CloseInfo => EventKind::CloseInfo,
            GlobeEvent::Tick { .. } => EventKind::Tick,
        }
    }
}

/// UI work requested by a handler, applied by the front-end in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ShowLoading,
    HideLoading,
    ScheduleDataLoad { delay_ms: u32 },
    ShowPanel(InfoPanel),
    HidePanel,
    MarkersChanged,
}

pub type Effects = SmallVec<[Effect; 4]>;

pub type Handler = fn(&mut GlobeState, &GlobeEvent, &mut Effects);

#[derive(Default)]
pub struct Dispatcher {
    handlers: FnvHashMap<EventKind, Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every built-in handler registered.
    pub fn with_default_handlers() -> Self {
        let mut d = Self::new();
        d.register(EventKind::PointerDown, on_pointer_down)
            .register(EventKind::PointerMove, on_pointer_move)
            .register(EventKind::PointerUp, on_pointer_up)
            .register(EventKind::Wheel, on_wheel)
            .register(EventKind::Click, on_click)
            .register(EventKind::Resize, on_resize)
            .register(EventKind::LayerChanged, on_layer_changed)
            .register(EventKind::RegionChanged, on_region_changed)
            .register(EventKind::Refresh, on_refresh)
            .register(EventKind::DataLoaded, on_data_loaded)
            .register(EventKind::CloseInfo, on_close_info)
            .register(EventKind::Tick, on_tick);
        d
    }

    pub fn register(&mut self, kind: EventKind, handler: Handler) -> &mut Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn handler(&self, kind: EventKind) -> Result<Handler> {
        self.handlers
            .get(&kind)
            .copied()
            .ok_or(GlobeError::MissingHandler(kind))
    }

    /// Route `event` to its handler. Unhandled kinds are ignored.
    pub fn dispatch(&self, state: &mut GlobeState, event: &GlobeEvent) -> Effects {
        let mut effects = Effects::new();
        match self.handler(event.kind()) {
            Ok(h) => h(state, event, &mut effects),
            Err(e) => log::debug!("[dispatch] {}", e),
        }
        effects
    }
}

fn on_pointer_down(state: &mut GlobeState, ev: &GlobeEvent, _fx: &mut Effects) {
    if let GlobeEvent::PointerDown(pos) = ev {
        state.controls.pointer_down(*pos);
    }
}

fn on_pointer_move(state: &mut GlobeState, ev: &GlobeEvent, _fx: &mut Effects) {
    if let GlobeEvent::PointerMove(pos) = ev {
        state.controls.pointer_move(*pos);
    }
}

fn on_pointer_up(state: &mut GlobeState, _ev: &GlobeEvent, _fx: &mut Effects) {
    state.controls.pointer_up();
}

fn on_wheel(state: &mut GlobeState, ev: &GlobeEvent, _fx: &mut Effects) {
    if let GlobeEvent::Wheel { delta_y } = ev {
        state.controls.wheel(*delta_y);
    }
}

fn on_click(state: &mut GlobeState, ev: &GlobeEvent, fx: &mut Effects) {
    let GlobeEvent::Click(pos) = ev else {
        return;
    };
    match state.select_at(*pos) {
        Some(m) => {
            log::info!("[pick] {} ({}) at ({:.0},{:.0})", m.id(), m.category(), pos.x, pos.y);
            fx.push(Effect::ShowPanel(m.panel()));
        }
        None => fx.push(Effect::HidePanel),
    }
}

fn on_resize(state: &mut GlobeState, ev: &GlobeEvent, _fx: &mut Effects) {
    if let GlobeEvent::Resize(vp) = ev {
        match Viewport::try_new(vp.width, vp.height) {
            Ok(vp) => state.viewport = vp,
            Err(e) => log::warn!("[resize] {}", e),
        }
    }
}

fn on_layer_changed(state: &mut GlobeState, ev: &GlobeEvent, fx: &mut Effects) {
    let GlobeEvent::LayerChanged(value) = ev else {
        return;
    };
    match value.parse::<LayerFilter>() {
        Ok(layer) => {
            let had_selection = state.selected().is_some();
            state.set_layer(layer);
            fx.push(Effect::MarkersChanged);
            if had_selection && state.selected().is_none() {
                fx.push(Effect::HidePanel);
            }
        }
        Err(e) => log::warn!("[layer] {}", e),
    }
}

fn on_region_changed(state: &mut GlobeState, ev: &GlobeEvent, fx: &mut Effects) {
    let GlobeEvent::RegionChanged(value) = ev else {
        return;
    };
    match value.parse::<Region>() {
        Ok(region) => {
            let had_selection = state.selected().is_some();
            state.set_region(region);
            log::info!("[region] filter set to {}", region);
            fx.push(Effect::MarkersChanged);
            if had_selection && state.selected().is_none() {
                fx.push(Effect::HidePanel);
            }
        }
        Err(e) => log::warn!("[region] {}", e),
    }
}

fn on_refresh(state: &mut GlobeState, _ev: &GlobeEvent, fx: &mut Effects) {
    state.loading = true;
    fx.push(Effect::ShowLoading);
    fx.push(Effect::ScheduleDataLoad {
        delay_ms: state.config.data_load_delay_ms,
    });
}

fn on_data_loaded(state: &mut GlobeState, ev: &GlobeEvent, fx: &mut Effects) {
    if let GlobeEvent::DataLoaded { today } = ev {
        let had_selection = state.selected().is_some();
        state.reload(*today);
        state.loading = false;
        if had_selection {
            fx.push(Effect::HidePanel);
        }
        fx.push(Effect::MarkersChanged);
        fx.push(Effect::HideLoading);
    }
}

fn on_close_info(state: &mut GlobeState, _ev: &GlobeEvent, fx: &mut Effects) {
    state.clear_selection();
    fx.push(Effect::HidePanel);
}

fn on_tick(state: &mut GlobeState, ev: &GlobeEvent, _fx: &mut Effects) {
    if let GlobeEvent::Tick { dt_sec } = ev {
        state.advance(*dt_sec);
    }
}
