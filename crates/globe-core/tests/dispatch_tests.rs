// Host-side tests for the event dispatch table and its effects.

mod common;

use common::{make_bird, make_date, make_radio};
use glam::Vec2;
use globe_core::*;

fn make_state() -> GlobeState {
    GlobeState::new(GlobeConfig::default(), Viewport::new(800.0, 600.0))
}

fn make_loaded_state() -> GlobeState {
    let mut state = make_state();
    state.replace_data(SampleSet {
        birds: vec![make_bird("bird_0", 0.0, -180.0), make_bird("bird_1", 48.9, 2.35)],
        radio: vec![make_radio("radio_0", 0.0, -90.0)],
    });
    state
}

fn east_marker_px() -> Vec2 {
    // bird_0 on an 800x600 canvas
    Vec2::new(544.0, 300.0)
}

#[test]
fn refresh_shows_loading_and_schedules_load() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_state();
    let fx = d.dispatch(&mut state, &GlobeEvent::Refresh);
    assert!(state.loading);
    assert_eq!(
        fx.as_slice(),
        &[Effect::ShowLoading, Effect::ScheduleDataLoad { delay_ms: 1000 }]
    );
}

#[test]
fn data_loaded_rebuilds_markers() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_state();
    d.dispatch(&mut state, &GlobeEvent::Refresh);
    let fx = d.dispatch(&mut state, &GlobeEvent::DataLoaded { today: make_date() });

    assert!(!state.loading);
    assert_eq!(state.markers().len(), 80);
    assert_eq!(fx.as_slice(), &[Effect::MarkersChanged, Effect::HideLoading]);

    // birds come before radio
    assert_eq!(state.markers()[0].category(), Category::Bird);
    assert_eq!(state.markers()[79].category(), Category::Radio);
}

#[test]
fn click_on_marker_shows_panel() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    let fx = d.dispatch(&mut state, &GlobeEvent::Click(east_marker_px()));

    assert_eq!(state.selected().map(|m| m.id()), Some("bird_0"));
    match fx.as_slice() {
        [Effect::ShowPanel(panel)] => {
            assert_eq!(panel.title, "Owl");
            assert_eq!(panel.footnote, "Bird sighting data from eBird community");
        }
        other => panic!("unexpected effects {:?}", other),
    }
}

#[test]
fn click_on_empty_space_hides_panel() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    d.dispatch(&mut state, &GlobeEvent::Click(east_marker_px()));
    let fx = d.dispatch(&mut state, &GlobeEvent::Click(Vec2::new(3.0, 3.0)));
    assert!(state.selected().is_none());
    assert_eq!(fx.as_slice(), &[Effect::HidePanel]);
}

#[test]
fn close_info_clears_selection() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    d.dispatch(&mut state, &GlobeEvent::Click(east_marker_px()));
    let fx = d.dispatch(&mut state, &GlobeEvent::CloseInfo);
    assert!(state.selected().is_none());
    assert_eq!(fx.as_slice(), &[Effect::HidePanel]);
}

#[test]
fn layer_filter_hides_categories() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();

    let fx = d.dispatch(&mut state, &GlobeEvent::LayerChanged("radio".into()));
    assert_eq!(state.layer, LayerFilter::Radio);
    assert_eq!(state.markers().len(), 1);
    assert_eq!(fx.as_slice(), &[Effect::MarkersChanged]);

    d.dispatch(&mut state, &GlobeEvent::LayerChanged("birds".into()));
    assert_eq!(state.markers().len(), 2);
    assert!(state.markers().iter().all(|m| m.category() == Category::Bird));
}

#[test]
fn filtering_out_selection_hides_panel() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    d.dispatch(&mut state, &GlobeEvent::Click(east_marker_px()));
    let fx = d.dispatch(&mut state, &GlobeEvent::LayerChanged("radio".into()));
    assert!(state.selected().is_none());
    assert_eq!(fx.as_slice(), &[Effect::MarkersChanged, Effect::HidePanel]);
}

#[test]
fn region_filter_keeps_markers_inside() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    d.dispatch(&mut state, &GlobeEvent::RegionChanged("europe".into()));
    assert_eq!(state.region, Region::Europe);
    let ids: Vec<&str> = state.markers().iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec!["bird_1"]);
}

#[test]
fn unknown_filter_values_are_ignored() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    let fx = d.dispatch(&mut state, &GlobeEvent::LayerChanged("planes".into()));
    assert!(fx.is_empty());
    assert_eq!(state.layer, LayerFilter::Both);

    let fx = d.dispatch(&mut state, &GlobeEvent::RegionChanged("mars".into()));
    assert!(fx.is_empty());
    assert_eq!(state.markers().len(), 3);
}

#[test]
fn resize_moves_projection() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_loaded_state();
    d.dispatch(&mut state, &GlobeEvent::Resize(Viewport::new(800.0, 480.0)));
    assert_eq!(state.viewport, Viewport::new(800.0, 480.0));

    // old position misses, new one hits
    assert!(state.select_at(east_marker_px()).is_none());
    assert!(state.select_at(Vec2::new(515.2, 240.0)).is_some());

    // degenerate sizes keep the previous viewport
    d.dispatch(&mut state, &GlobeEvent::Resize(Viewport::new(0.0, 0.0)));
    assert_eq!(state.viewport, Viewport::new(800.0, 480.0));
}

#[test]
fn drag_and_tick_drive_controls() {
    let d = Dispatcher::with_default_handlers();
    let mut state = make_state();
    d.dispatch(&mut state, &GlobeEvent::PointerDown(Vec2::new(0.0, 0.0)));
    d.dispatch(&mut state, &GlobeEvent::PointerMove(Vec2::new(10.0, 0.0)));
    d.dispatch(&mut state, &GlobeEvent::PointerUp);
    assert!(!state.controls.is_dragging());
    assert_ne!(state.controls.orientation, glam::Quat::IDENTITY);

    d.dispatch(&mut state, &GlobeEvent::Wheel { delta_y: -500.0 });
    assert!((state.controls.camera_z - 4.5).abs() < 1e-5);

    d.dispatch(&mut state, &GlobeEvent::Tick { dt_sec: 0.5 });
    assert!((state.elapsed_sec - 0.5).abs() < 1e-6);
}

#[test]
fn empty_dispatcher_reports_missing_handler() {
    let d = Dispatcher::new();
    let mut state = make_state();
    assert!(matches!(
        d.handler(EventKind::Refresh),
        Err(GlobeError::MissingHandler(EventKind::Refresh))
    ));
    let fx = d.dispatch(&mut state, &GlobeEvent::Refresh);
    assert!(fx.is_empty());
    assert!(!state.loading);
}

#[test]
fn marker_opacity_pulses_in_range() {
    let mut state = make_loaded_state();
    for step in 0..50 {
        state.advance(0.037);
        for m in state.markers() {
            let a = state.marker_opacity(m);
            assert!((0.4 - 1e-5..=0.8 + 1e-5).contains(&a), "step {} alpha {}", step, a);
        }
    }
}
