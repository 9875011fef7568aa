//! Synthetic bird sighting and radio station records.

use crate::config::GlobeConfig;
use crate::constants::{
    BIRD_MAX_COUNT, BIRD_SIGHTING_WINDOW_DAYS, RADIO_FREQ_MIN_MHZ, RADIO_FREQ_SPAN_MHZ,
    RADIO_POWER_MIN_KW, RADIO_POWER_SPAN_KW, SAMPLE_LATITUDE_SPAN_DEG, SAMPLE_LONGITUDE_SPAN_DEG,
};
use crate::marker::{Marker, MarkerDetails};
use chrono::{Days, NaiveDate};
use rand::prelude::*;

pub const BIRD_SPECIES: [&str; 15] = [
    "American Robin",
    "Blue Jay",
    "Cardinal",
    "Chickadee",
    "Sparrow",
    "Hawk",
    "Eagle",
    "Owl",
    "Woodpecker",
    "Hummingbird",
    "Penguin",
    "Albatross",
    "Flamingo",
    "Pelican",
    "Seagull",
];

pub const RADIO_STATIONS: [&str; 10] = [
    "Nature Sounds FM",
    "Bird Call Radio",
    "Wildlife Network",
    "Eco Radio",
    "Forest Frequencies",
    "Sky Radio",
    "Ocean Waves FM",
    "Mountain Echo",
    "Prairie Winds",
    "Tropical Sounds",
];

pub const RADIO_DESCRIPTION: &str = "Broadcasting nature sounds and bird calls";

/// One generation of sample data. Replaced wholesale on every load.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    pub birds: Vec<Marker>,
    pub radio: Vec<Marker>,
}

impl SampleSet {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, config: &GlobeConfig) -> Self {
        let set = Self {
            birds: generate_birds(rng, today, config.bird_count),
            radio: generate_radio(rng, config.radio_count),
        };
        log::info!(
            "[data] generated {} bird sightings and {} radio stations",
            set.birds.len(),
            set.radio.len()
        );
        set
    }

    pub fn len(&self) -> usize {
        self.birds.len() + self.radio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty() && self.radio.is_empty()
    }
}

#[inline]
fn random_lat_lon<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    let lat = (rng.gen::<f64>() - 0.5) * SAMPLE_LATITUDE_SPAN_DEG;
    let lon = (rng.gen::<f64>() - 0.5) * SAMPLE_LONGITUDE_SPAN_DEG;
    (lat, lon)
}

pub fn generate_birds<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, count: usize) -> Vec<Marker> {
    (0..count)
        .map(|i| {
            let species = BIRD_SPECIES[rng.gen_range(0..BIRD_SPECIES.len())];
            let (lat, lon) = random_lat_lon(rng);
            let days_ago = rng.gen_range(0..BIRD_SIGHTING_WINDOW_DAYS) as u64;
            let observed_on = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
            Marker::new(
                format!("bird_{}", i),
                lat,
                lon,
                MarkerDetails::Bird {
                    species: species.to_string(),
                    count: rng.gen_range(1..=BIRD_MAX_COUNT),
                    observed_on,
                    location: format!("Location {}", i),
                },
            )
        })
        .collect()
}

pub fn generate_radio<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Marker> {
    (0..count)
        .map(|i| {
            let name = RADIO_STATIONS[rng.gen_range(0..RADIO_STATIONS.len())];
            let (lat, lon) = random_lat_lon(rng);
            let freq = RADIO_FREQ_MIN_MHZ + rng.gen::<f32>() * RADIO_FREQ_SPAN_MHZ;
            Marker::new(
                format!("radio_{}", i),
                lat,
                lon,
                MarkerDetails::Radio {
                    name: name.to_string(),
                    frequency_mhz: (freq * 10.0).round() / 10.0,
                    power_kw: RADIO_POWER_MIN_KW + rng.gen_range(0..RADIO_POWER_SPAN_KW),
                    description: RADIO_DESCRIPTION.to_string(),
                },
            )
        })
        .collect()
}
