use crate::constants::*;
use crate::picker::{MarkerPicker, PickMode};

/// Runtime settings, built once at startup.
#[derive(Clone, Debug)]
pub struct GlobeConfig {
    pub seed: u64,
    pub bird_count: usize,
    pub radio_count: usize,
    pub pick_threshold_px: f32,
    pub pick_mode: PickMode,
    pub data_load_delay_ms: u32,
    pub camera_start_z: f32,
    pub camera_min_z: f32,
    pub camera_max_z: f32,
    pub auto_rotate_rad_per_sec: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bird_count: BIRD_SAMPLE_COUNT,
            radio_count: RADIO_SAMPLE_COUNT,
            pick_threshold_px: PICK_THRESHOLD_PX,
            pick_mode: PickMode::Unrotated,
            data_load_delay_ms: DATA_LOAD_DELAY_MS,
            camera_start_z: CAMERA_START_Z,
            camera_min_z: CAMERA_MIN_Z,
            camera_max_z: CAMERA_MAX_Z,
            auto_rotate_rad_per_sec: AUTO_ROTATE_RAD_PER_SEC,
        }
    }
}

impl GlobeConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn picker(&self) -> MarkerPicker {
        MarkerPicker::new(self.pick_threshold_px, self.pick_mode)
    }
}
