// Shared builders for the host-side test suites.

#![allow(dead_code)]

use chrono::NaiveDate;
use globe_core::{Marker, MarkerDetails};

pub fn make_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn make_bird(id: &str, lat: f64, lon: f64) -> Marker {
    Marker::new(
        id,
        lat,
        lon,
        MarkerDetails::Bird {
            species: "Owl".to_string(),
            count: 3,
            observed_on: make_date(),
            location: "Location 0".to_string(),
        },
    )
}

pub fn make_radio(id: &str, lat: f64, lon: f64) -> Marker {
    Marker::new(
        id,
        lat,
        lon,
        MarkerDetails::Radio {
            name: "Eco Radio".to_string(),
            frequency_mhz: 101.3,
            power_kw: 25,
            description: "Broadcasting nature sounds and bird calls".to_string(),
        },
    )
}
