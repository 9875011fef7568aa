//! Procedural equirectangular earth texture: a diagonal ocean gradient with
//! a handful of stylised continent ellipses on top.

use crate::constants::{EARTH_TEXTURE_HEIGHT, EARTH_TEXTURE_WIDTH};

pub const OCEAN_GRADIENT: [(f32, [u8; 3]); 5] = [
    (0.0, [0x1e, 0x3c, 0x72]),
    (0.3, [0x2a, 0x52, 0x98]),
    (0.5, [0x1e, 0x3c, 0x72]),
    (0.7, [0x2a, 0x52, 0x98]),
    (1.0, [0x1e, 0x3c, 0x72]),
];

pub const LAND_RGB: [u8; 3] = [0x2d, 0x50, 0x16];

/// Axis-aligned ellipse given by its bounding box in reference texture pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Continent {
    pub name: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

const fn continent(name: &'static str, x: f32, y: f32, width: f32, height: f32) -> Continent {
    Continent {
        name,
        x,
        y,
        width,
        height,
    }
}

// Bounding boxes in a 1024x512 texture.
pub const CONTINENTS: [Continent; 6] = [
    continent("North America", 200.0, 150.0, 150.0, 100.0),
    continent("South America", 250.0, 280.0, 80.0, 120.0),
    continent("Europe", 450.0, 120.0, 60.0, 80.0),
    continent("Africa", 470.0, 200.0, 100.0, 150.0),
    continent("Asia", 550.0, 100.0, 200.0, 120.0),
    continent("Australia", 700.0, 320.0, 80.0, 60.0),
];

impl Continent {
    /// Whether the texel centre `(px, py)` of a `width`x`height` texture is land.
    pub fn covers(&self, px: f32, py: f32, width: u32, height: u32) -> bool {
        let sx = width as f32 / EARTH_TEXTURE_WIDTH as f32;
        let sy = height as f32 / EARTH_TEXTURE_HEIGHT as f32;
        let rx = self.width * 0.5 * sx;
        let ry = self.height * 0.5 * sy;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (px - (self.x + self.width * 0.5) * sx) / rx;
        let dy = (py - (self.y + self.height * 0.5) * sy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Colour of the ocean gradient at `t` in [0, 1].
pub fn gradient_at(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in OCEAN_GRADIENT.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f).round() as u8;
            return [lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2])];
        }
    }
    OCEAN_GRADIENT[OCEAN_GRADIENT.len() - 1].1
}

/// Row-major RGBA8 pixels, `width * height * 4` bytes.
pub fn earth_texture(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    let (w, h) = (width as f32, height as f32);
    let diag_sq = (w * w + h * h).max(1.0);
    for y in 0..height {
        for x in 0..width {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let land = CONTINENTS.iter().any(|c| c.covers(px, py, width, height));
            let rgb = if land {
                LAND_RGB
            } else {
                // Projection onto the top-left to bottom-right diagonal.
                gradient_at((px * w + py * h) / diag_sq)
            };
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    pixels
}
