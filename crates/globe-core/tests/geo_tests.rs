// Host-side tests for geographic conversion and region filters.

use globe_core::*;

const EPS: f32 = 1e-5;

#[test]
fn unit_positions_have_length_one() {
    for lat in [-90.0, -45.0, 0.0, 12.5, 80.0, 90.0] {
        for lon in [-180.0, -90.0, 0.0, 33.3, 179.9] {
            let p = lat_lon_to_unit(lat, lon);
            assert!((p.length() - 1.0).abs() < EPS, "lat={} lon={}", lat, lon);
        }
    }
}

#[test]
fn known_coordinates_map_to_axes() {
    // Poles sit on the Y axis
    assert!((lat_lon_to_unit(90.0, 0.0).y - 1.0).abs() < EPS);
    assert!((lat_lon_to_unit(-90.0, 0.0).y + 1.0).abs() < EPS);

    // Equator at lon -180 is +X, lon 0 is -X, lon -90 is +Z
    let p = lat_lon_to_unit(0.0, -180.0);
    assert!((p.x - 1.0).abs() < EPS && p.y.abs() < EPS && p.z.abs() < EPS);
    let p = lat_lon_to_unit(0.0, 0.0);
    assert!((p.x + 1.0).abs() < EPS);
    let p = lat_lon_to_unit(0.0, -90.0);
    assert!((p.z - 1.0).abs() < EPS);
}

#[test]
fn region_round_trips_through_select_values() {
    for r in Region::ALL {
        assert_eq!(r.as_str().parse::<Region>().unwrap(), r);
    }
    assert!(matches!(
        "atlantis".parse::<Region>(),
        Err(GlobeError::UnknownRegion(_))
    ));
}

#[test]
fn regions_contain_their_landmarks() {
    // Chicago, Lima, Paris, Nairobi, Tokyo, Sydney
    assert!(Region::NorthAmerica.contains(41.9, -87.6));
    assert!(Region::SouthAmerica.contains(-12.0, -77.0));
    assert!(Region::Europe.contains(48.9, 2.35));
    assert!(Region::Africa.contains(-1.3, 36.8));
    assert!(Region::Asia.contains(35.7, 139.7));
    assert!(Region::Oceania.contains(-33.9, 151.2));

    assert!(!Region::Europe.contains(-33.9, 151.2));
    assert!(!Region::Asia.contains(41.9, -87.6));
}
