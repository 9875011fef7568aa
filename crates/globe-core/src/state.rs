//! The explicit application context shared by event handlers, picking and
//! the renderer.

use crate::config::GlobeConfig;
use crate::constants::{
    MARKER_PULSE_AMPLITUDE, MARKER_PULSE_BASE, MARKER_PULSE_PHASE_PER_X, MARKER_PULSE_RATE,
};
use crate::controls::OrbitControls;
use crate::error::{GlobeError, Result};
use crate::geo::Region;
use crate::marker::{Category, Marker};
use crate::picker::{MarkerPicker, Viewport};
use crate::sample::SampleSet;
use chrono::NaiveDate;
use glam::Vec2;
use rand::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Which marker categories are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayerFilter {
    Birds,
    Radio,
    #[default]
    Both,
}

impl LayerFilter {
    pub fn includes(self, category: Category) -> bool {
        matches!(
            (self, category),
            (LayerFilter::Both, _)
                | (LayerFilter::Birds, Category::Bird)
                | (LayerFilter::Radio, Category::Radio)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerFilter::Birds => "birds",
            LayerFilter::Radio => "radio",
            LayerFilter::Both => "both",
        }
    }
}

impl fmt::Display for LayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerFilter {
    type Err = GlobeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "birds" => Ok(LayerFilter::Birds),
            "radio" => Ok(LayerFilter::Radio),
            "both" => Ok(LayerFilter::Both),
            other => Err(GlobeError::UnknownLayer(other.to_string())),
        }
    }
}

/// Marker opacity at `time_sec` for a marker whose unit position has `x`.
#[inline]
pub fn marker_opacity(time_sec: f32, x: f32) -> f32 {
    MARKER_PULSE_BASE
        + MARKER_PULSE_AMPLITUDE
            * (time_sec * MARKER_PULSE_RATE + x * MARKER_PULSE_PHASE_PER_X).sin()
}

pub struct GlobeState {
    pub config: GlobeConfig,
    pub viewport: Viewport,
    pub controls: OrbitControls,
    pub layer: LayerFilter,
    pub region: Region,
    pub loading: bool,
    pub elapsed_sec: f32,
    picker: MarkerPicker,
    data: SampleSet,
    markers: Vec<Marker>,
    selected: Option<String>,
    rng: StdRng,
}

impl GlobeState {
    pub fn new(config: GlobeConfig, viewport: Viewport) -> Self {
        Self {
            viewport,
            controls: OrbitControls::new(&config),
            layer: LayerFilter::default(),
            region: Region::default(),
            loading: false,
            elapsed_sec: 0.0,
            picker: config.picker(),
            data: SampleSet::default(),
            markers: Vec::new(),
            selected: None,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Markers currently visible, in layer order (birds before radio).
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn data(&self) -> &SampleSet {
        &self.data
    }

    pub fn selected(&self) -> Option<&Marker> {
        let id = self.selected.as_deref()?;
        self.markers.iter().find(|m| m.id() == id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Regenerate the sample data and rebuild the visible marker list.
    pub fn reload(&mut self, today: NaiveDate) {
        self.data = SampleSet::generate(&mut self.rng, today, &self.config);
        self.selected = None;
        self.rebuild_markers();
    }

    /// Replace the data with a caller-provided set.
    pub fn replace_data(&mut self, data: SampleSet) {
        self.data = data;
        self.selected = None;
        self.rebuild_markers();
    }

    pub fn set_layer(&mut self, layer: LayerFilter) {
        self.layer = layer;
        self.rebuild_markers();
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        self.rebuild_markers();
    }

    fn rebuild_markers(&mut self) {
        let (layer, region) = (self.layer, self.region);
        let visible = |m: &&Marker| {
            layer.includes(m.category()) && region.contains(m.latitude(), m.longitude())
        };
        self.markers = self
            .data
            .birds
            .iter()
            .chain(self.data.radio.iter())
            .filter(visible)
            .cloned()
            .collect();
        if self.selected().is_none() {
            self.selected = None;
        }
        log::debug!(
            "[data] {} of {} markers visible (layer={}, region={})",
            self.markers.len(),
            self.data.len(),
            layer,
            region
        );
    }

    /// Hit-test the pointer against the visible markers and update the
    /// selection. A miss clears it.
    pub fn select_at(&mut self, pointer: Vec2) -> Option<&Marker> {
        let hit = self.picker.pick_index(
            pointer,
            &self.markers,
            self.viewport,
            self.controls.orientation,
        );
        self.selected = hit.map(|i| self.markers[i].id().to_string());
        hit.map(|i| &self.markers[i])
    }

    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.elapsed_sec += dt;
        self.controls.advance(dt);
    }

    pub fn marker_opacity(&self, marker: &Marker) -> f32 {
        marker_opacity(self.elapsed_sec, marker.unit_position().x)
    }
}
