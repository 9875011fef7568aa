//! Drag-to-rotate and wheel-to-zoom globe controls.

use crate::config::GlobeConfig;
use crate::constants::{DRAG_RADIANS_PER_PX, WHEEL_ZOOM_PER_UNIT};
use glam::{EulerRot, Quat, Vec2};

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub orientation: Quat,
    pub camera_z: f32,
    min_z: f32,
    max_z: f32,
    auto_rotate_rad_per_sec: f32,
    drag_from: Option<Vec2>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(&GlobeConfig::default())
    }
}

impl OrbitControls {
    pub fn new(config: &GlobeConfig) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            camera_z: config
                .camera_start_z
                .clamp(config.camera_min_z, config.camera_max_z),
            min_z: config.camera_min_z,
            max_z: config.camera_max_z,
            auto_rotate_rad_per_sec: config.auto_rotate_rad_per_sec,
            drag_from: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag_from = Some(pos);
    }

    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    /// Rotate by the pointer delta while a drag is active. Returns whether
    /// the orientation changed.
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        let Some(prev) = self.drag_from else {
            return false;
        };
        let delta = pos - prev;
        self.drag_from = Some(pos);
        if delta == Vec2::ZERO {
            return false;
        }
        self.orientation = (drag_rotation(delta) * self.orientation).normalize();
        true
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.camera_z = (self.camera_z + delta_y * WHEEL_ZOOM_PER_UNIT).clamp(self.min_z, self.max_z);
    }

    /// Spin the globe about its own polar axis.
    pub fn advance(&mut self, dt_sec: f32) {
        let angle = self.auto_rotate_rad_per_sec * dt_sec.max(0.0);
        if angle != 0.0 {
            self.orientation = (self.orientation * Quat::from_rotation_y(angle)).normalize();
        }
    }
}

/// Rotation applied for a pointer drag of `delta` pixels: vertical motion
/// tilts about X, horizontal motion spins about Y.
#[inline]
pub fn drag_rotation(delta: Vec2) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        delta.y * DRAG_RADIANS_PER_PX,
        delta.x * DRAG_RADIANS_PER_PX,
        0.0,
    )
}
