//! Screen-space hit-testing of markers.
//!
//! Markers are projected orthographically: the unit-sphere `x`/`y` are
//! scaled into the viewport and `z` is dropped. The default mode ignores the
//! globe's current orientation, so a pick is only exact while the globe sits
//! at its initial orientation. [`PickMode::Oriented`] rotates each marker by
//! the globe orientation first and skips markers on the far hemisphere.

use crate::constants::{PICK_PROJECTION_SCALE, PICK_THRESHOLD_PX, PICK_VIEWPORT_RADIUS_FRACTION};
use crate::error::{GlobeError, Result};
use crate::marker::Marker;
use glam::{Quat, Vec2, Vec3};

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(GlobeError::InvalidViewport { width, height })
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the globe disc used for picking.
    #[inline]
    pub fn globe_radius(&self) -> f32 {
        self.width.min(self.height) * PICK_VIEWPORT_RADIUS_FRACTION
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickMode {
    /// Project the stored unit positions as-is.
    #[default]
    Unrotated,
    /// Rotate by the globe orientation and ignore back-facing markers.
    Oriented,
}

/// Project a unit-sphere point to viewport pixels, dropping depth.
#[inline]
pub fn project_point(unit: Vec3, viewport: Viewport) -> Vec2 {
    let center = viewport.center();
    let scale = viewport.globe_radius() * PICK_PROJECTION_SCALE;
    Vec2::new(center.x + unit.x * scale, center.y - unit.y * scale)
}

#[inline]
pub fn project_to_screen(marker: &Marker, viewport: Viewport) -> Vec2 {
    project_point(marker.unit_position(), viewport)
}

/// Closest marker strictly within the default threshold, ignoring rotation.
pub fn pick_nearest(pointer: Vec2, markers: &[Marker], viewport: Viewport) -> Option<&Marker> {
    MarkerPicker::default().pick(pointer, markers, viewport, Quat::IDENTITY)
}

/// Like [`pick_nearest`] but aware of the globe orientation.
pub fn pick_nearest_oriented(
    pointer: Vec2,
    markers: &[Marker],
    viewport: Viewport,
    orientation: Quat,
) -> Option<&Marker> {
    MarkerPicker {
        mode: PickMode::Oriented,
        ..MarkerPicker::default()
    }
    .pick(pointer, markers, viewport, orientation)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPicker {
    pub threshold_px: f32,
    pub mode: PickMode,
}

impl Default for MarkerPicker {
    fn default() -> Self {
        Self {
            threshold_px: PICK_THRESHOLD_PX,
            mode: PickMode::Unrotated,
        }
    }
}

impl MarkerPicker {
    pub fn new(threshold_px: f32, mode: PickMode) -> Self {
        Self { threshold_px, mode }
    }

    /// Return the marker whose projection is nearest to `pointer`.
    ///
    /// Only distances strictly below `threshold_px` qualify. On ties the
    /// first marker in slice order wins. `orientation` is ignored in
    /// [`PickMode::Unrotated`].
    pub fn pick<'m>(
        &self,
        pointer: Vec2,
        markers: &'m [Marker],
        viewport: Viewport,
        orientation: Quat,
    ) -> Option<&'m Marker> {
        self.pick_index(pointer, markers, viewport, orientation)
            .map(|i| &markers[i])
    }

    pub fn pick_index(
        &self,
        pointer: Vec2,
        markers: &[Marker],
        viewport: Viewport,
        orientation: Quat,
    ) -> Option<usize> {
        let mut best = None::<(usize, f32)>;
        for (i, m) in markers.iter().enumerate() {
            let unit = match self.mode {
                PickMode::Unrotated => m.unit_position(),
                PickMode::Oriented => {
                    let p = orientation * m.unit_position();
                    if p.z < 0.0 {
                        continue;
                    }
                    p
                }
            };
            let d = pointer.distance(project_point(unit, viewport));
            if d >= self.threshold_px {
                continue;
            }
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}
