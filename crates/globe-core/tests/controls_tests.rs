// Host-side tests for orbit controls and the camera.

use glam::{Quat, Vec2, Vec3};
use globe_core::*;

fn make_controls() -> OrbitControls {
    OrbitControls::new(&GlobeConfig::default())
}

#[test]
fn starts_at_identity_and_default_distance() {
    let c = make_controls();
    assert_eq!(c.orientation, Quat::IDENTITY);
    assert_eq!(c.camera_z, 5.0);
    assert!(!c.is_dragging());
}

#[test]
fn moves_without_drag_do_nothing() {
    let mut c = make_controls();
    assert!(!c.pointer_move(Vec2::new(50.0, 50.0)));
    assert_eq!(c.orientation, Quat::IDENTITY);
}

#[test]
fn drag_rotates_until_release() {
    let mut c = make_controls();
    c.pointer_down(Vec2::new(100.0, 100.0));
    assert!(c.is_dragging());
    assert!(c.pointer_move(Vec2::new(130.0, 100.0)));
    let after_drag = c.orientation;
    assert_ne!(after_drag, Quat::IDENTITY);

    // Horizontal drag of 30 px spins 0.3 rad about Y
    let expected = Quat::from_rotation_y(0.3);
    assert!(after_drag.angle_between(expected) < 1e-4);

    c.pointer_up();
    assert!(!c.pointer_move(Vec2::new(200.0, 200.0)));
    assert_eq!(c.orientation, after_drag);
}

#[test]
fn zero_delta_move_is_not_a_change() {
    let mut c = make_controls();
    c.pointer_down(Vec2::new(10.0, 10.0));
    assert!(!c.pointer_move(Vec2::new(10.0, 10.0)));
}

#[test]
fn wheel_zoom_is_clamped() {
    let mut c = make_controls();
    c.wheel(1000.0);
    assert!((c.camera_z - 6.0).abs() < 1e-5);

    c.wheel(1.0e6);
    assert_eq!(c.camera_z, 10.0);
    c.wheel(-1.0e6);
    assert_eq!(c.camera_z, 2.0);
}

#[test]
fn auto_rotation_spins_about_y() {
    let mut c = make_controls();
    c.advance(1.0);
    let expected = Quat::from_rotation_y(0.06);
    assert!(c.orientation.angle_between(expected) < 1e-5);

    // negative dt never rewinds
    let before = c.orientation;
    c.advance(-1.0);
    assert_eq!(c.orientation, before);
}

#[test]
fn camera_looks_at_origin_from_positive_z() {
    let cam = Camera::looking_at_origin(5.0, 1.5);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));

    // origin lands in the middle of clip space
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}
