// Host-side tests for synthetic data generation.

mod common;

use common::make_date;
use globe_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_set(seed: u64) -> SampleSet {
    let mut rng = StdRng::seed_from_u64(seed);
    SampleSet::generate(&mut rng, make_date(), &GlobeConfig::default())
}

#[test]
fn default_counts() {
    let set = make_set(1);
    assert_eq!(set.birds.len(), 50);
    assert_eq!(set.radio.len(), 30);
    assert_eq!(set.len(), 80);
    assert!(!set.is_empty());
}

#[test]
fn ids_are_sequential_per_category() {
    let set = make_set(2);
    assert_eq!(set.birds[0].id(), "bird_0");
    assert_eq!(set.birds[49].id(), "bird_49");
    assert_eq!(set.radio[0].id(), "radio_0");
    assert_eq!(set.radio[29].id(), "radio_29");
}

#[test]
fn bird_fields_stay_in_range() {
    let today = make_date();
    let oldest = today - chrono::Days::new(29);
    for m in make_set(3).birds {
        assert_eq!(m.category(), Category::Bird);
        assert!(m.latitude() >= -80.0 && m.latitude() <= 80.0);
        assert!(m.longitude() >= -180.0 && m.longitude() <= 180.0);
        match m.details() {
            MarkerDetails::Bird {
                species,
                count,
                observed_on,
                ..
            } => {
                assert!(BIRD_SPECIES.contains(&species.as_str()));
                assert!((1..=20).contains(count));
                assert!(*observed_on <= today && *observed_on >= oldest);
            }
            other => panic!("expected bird, got {:?}", other),
        }
    }
}

#[test]
fn radio_fields_stay_in_range() {
    for m in make_set(4).radio {
        assert_eq!(m.category(), Category::Radio);
        match m.details() {
            MarkerDetails::Radio {
                name,
                frequency_mhz,
                power_kw,
                description,
            } => {
                assert!(RADIO_STATIONS.contains(&name.as_str()));
                assert!(*frequency_mhz >= 88.0 && *frequency_mhz <= 108.0);
                // rounded to one decimal place
                let tenths = frequency_mhz * 10.0;
                assert!((tenths - tenths.round()).abs() < 1e-3);
                assert!((10..60).contains(power_kw));
                assert_eq!(description, RADIO_DESCRIPTION);
            }
            other => panic!("expected radio, got {:?}", other),
        }
    }
}

#[test]
fn same_seed_same_data() {
    let a = make_set(42);
    let b = make_set(42);
    assert_eq!(a.birds, b.birds);
    assert_eq!(a.radio, b.radio);

    let c = make_set(43);
    assert_ne!(a.birds, c.birds);
}

#[test]
fn custom_counts_from_config() {
    let config = GlobeConfig {
        bird_count: 3,
        radio_count: 0,
        ..GlobeConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(7);
    let set = SampleSet::generate(&mut rng, make_date(), &config);
    assert_eq!(set.birds.len(), 3);
    assert!(set.radio.is_empty());
}
