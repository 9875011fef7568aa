//! Geographic helpers: latitude/longitude to unit-sphere conversion and the
//! coarse regions offered by the region filter.

use crate::error::{GlobeError, Result};
use glam::Vec3;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Convert geographic coordinates (degrees) to a point on the unit sphere.
///
/// `phi` is the polar angle measured from +Y, `theta` the longitude shifted
/// by 180 degrees. The result always has length 1.
#[inline]
pub fn lat_lon_to_unit(latitude_deg: f64, longitude_deg: f64) -> Vec3 {
    let phi = (90.0 - latitude_deg) * (PI / 180.0);
    let theta = (longitude_deg + 180.0) * (PI / 180.0);
    Vec3::new(
        (theta.cos() * phi.sin()) as f32,
        phi.cos() as f32,
        (theta.sin() * phi.sin()) as f32,
    )
}

/// Inclusive latitude/longitude box in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    All,
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    Oceania,
}

const NORTH_AMERICA: &[GeoBounds] = &[GeoBounds::new(7.0, 84.0, -170.0, -50.0)];
const SOUTH_AMERICA: &[GeoBounds] = &[GeoBounds::new(-56.0, 13.0, -82.0, -34.0)];
const EUROPE: &[GeoBounds] = &[GeoBounds::new(35.0, 72.0, -25.0, 45.0)];
const AFRICA: &[GeoBounds] = &[GeoBounds::new(-35.0, 37.0, -18.0, 52.0)];
const ASIA: &[GeoBounds] = &[GeoBounds::new(-10.0, 78.0, 45.0, 180.0)];
// Oceania straddles the antimeridian.
const OCEANIA: &[GeoBounds] = &[
    GeoBounds::new(-50.0, 0.0, 110.0, 180.0),
    GeoBounds::new(-50.0, 0.0, -180.0, -140.0),
];

impl Region {
    pub const ALL: [Region; 7] = [
        Region::All,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Europe,
        Region::Africa,
        Region::Asia,
        Region::Oceania,
    ];

    /// Bounding boxes covering the region; empty for `All`.
    pub fn bounds(self) -> &'static [GeoBounds] {
        match self {
            Region::All => &[],
            Region::NorthAmerica => NORTH_AMERICA,
            Region::SouthAmerica => SOUTH_AMERICA,
            Region::Europe => EUROPE,
            Region::Africa => AFRICA,
            Region::Asia => ASIA,
            Region::Oceania => OCEANIA,
        }
    }

    pub fn contains(self, latitude: f64, longitude: f64) -> bool {
        match self {
            Region::All => true,
            r => r.bounds().iter().any(|b| b.contains(latitude, longitude)),
        }
    }

    /// Value used by the `region-filter` select element.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::All => "all",
            Region::NorthAmerica => "north-america",
            Region::SouthAmerica => "south-america",
            Region::Europe => "europe",
            Region::Africa => "africa",
            Region::Asia => "asia",
            Region::Oceania => "oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = GlobeError;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| GlobeError::UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oceania_wraps_the_antimeridian() {
        assert!(Region::Oceania.contains(-17.7, 178.0)); // Fiji
        assert!(Region::Oceania.contains(-17.5, -149.5)); // Tahiti
        assert!(!Region::Oceania.contains(-17.5, -120.0));
    }

    #[test]
    fn all_contains_everything() {
        assert!(Region::All.contains(89.0, -179.0));
        assert!(Region::All.bounds().is_empty());
    }
}
