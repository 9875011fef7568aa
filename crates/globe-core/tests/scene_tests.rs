// Host-side tests for sphere tessellation and the procedural earth texture.

use globe_core::constants::*;
use globe_core::mesh::uv_sphere;
use globe_core::texture::*;

#[test]
fn sphere_counts_match_segments() {
    let m = uv_sphere(1.0, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    assert_eq!(m.vertices.len(), 65 * 33);
    // pole rows contribute one triangle per segment instead of two
    assert_eq!(m.index_count(), 64 * (2 * 32 - 2) * 3);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn sphere_vertices_sit_on_radius() {
    let m = uv_sphere(ATMOSPHERE_RADIUS, 16, 8);
    for v in &m.vertices {
        let p = glam::Vec3::from(v.position);
        let n = glam::Vec3::from(v.normal);
        assert!((p.length() - ATMOSPHERE_RADIUS).abs() < 1e-5);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(v.uv[0] >= 0.0 && v.uv[0] <= 1.0);
        assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0);
    }
}

#[test]
fn tiny_segment_counts_are_raised() {
    let m = uv_sphere(1.0, 1, 1);
    assert_eq!(m.vertices.len(), 4 * 3);
}

#[test]
fn texture_is_rgba_and_opaque() {
    let px = earth_texture(64, 32);
    assert_eq!(px.len(), 64 * 32 * 4);
    assert!(px.chunks_exact(4).all(|c| c[3] == 255));
}

#[test]
fn continent_centres_are_land() {
    let (w, h) = (EARTH_TEXTURE_WIDTH, EARTH_TEXTURE_HEIGHT);
    let px = earth_texture(w, h);
    for c in CONTINENTS {
        let cx = (c.x + c.width * 0.5) as u32;
        let cy = (c.y + c.height * 0.5) as u32;
        let i = ((cy * w + cx) * 4) as usize;
        assert_eq!(&px[i..i + 3], &LAND_RGB, "{}", c.name);
    }
}

#[test]
fn ocean_corners_use_gradient_ends() {
    let px = earth_texture(256, 128);
    // top-left texel is ocean, at the start of the gradient
    assert_eq!(&px[0..3], &gradient_at(0.0));
    assert_eq!(gradient_at(0.0), [0x1e, 0x3c, 0x72]);
    assert_eq!(gradient_at(0.3), [0x2a, 0x52, 0x98]);
    assert_eq!(gradient_at(1.0), [0x1e, 0x3c, 0x72]);
    // out of range input is clamped
    assert_eq!(gradient_at(-3.0), gradient_at(0.0));
}
