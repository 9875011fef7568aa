// Host-side sanity checks on tuning constants.

use globe_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Picking
    assert!(PICK_THRESHOLD_PX > 0.0);
    assert!(PICK_VIEWPORT_RADIUS_FRACTION > 0.0 && PICK_VIEWPORT_RADIUS_FRACTION <= 0.5);
    assert!(PICK_PROJECTION_SCALE > 0.0 && PICK_PROJECTION_SCALE <= 1.0);

    // Camera range must contain the starting distance and stay outside the atmosphere
    assert!(CAMERA_MIN_Z <= CAMERA_START_Z && CAMERA_START_Z <= CAMERA_MAX_Z);
    assert!(CAMERA_MIN_Z > ATMOSPHERE_RADIUS);
    assert!(CAMERA_ZNEAR < CAMERA_MIN_Z - ATMOSPHERE_RADIUS);

    // Atmosphere shell wraps the globe
    assert!(ATMOSPHERE_RADIUS > GLOBE_RADIUS);

    // Pulse must stay a valid alpha
    assert!(MARKER_PULSE_BASE - MARKER_PULSE_AMPLITUDE >= 0.0);
    assert!(MARKER_PULSE_BASE + MARKER_PULSE_AMPLITUDE <= 1.0);

    // Samples stay clear of the poles
    assert!(SAMPLE_LATITUDE_SPAN_DEG <= 180.0);
    assert!(BIRD_SIGHTING_WINDOW_DAYS > 0);
}

#[test]
fn auto_rotation_matches_per_frame_step() {
    // one thousandth of a radian per frame at 60 fps
    assert!((AUTO_ROTATE_RAD_PER_SEC / 60.0 - 0.001).abs() < 1e-6);
}
