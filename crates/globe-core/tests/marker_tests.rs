// Host-side tests for marker display text.

mod common;

use common::{make_bird, make_radio};
use globe_core::*;

#[test]
fn bird_panel_fields() {
    let m = make_bird("bird_7", 12.346, -45.678);
    let panel = m.panel();
    assert_eq!(panel.title, "Owl");
    let fields: Vec<(&str, &str)> = panel.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    assert_eq!(
        fields,
        vec![
            ("Location", "Location 0"),
            ("Count", "3 individuals"),
            ("Date", "3/15/2024"),
            ("Coordinates", "12.35°, -45.68°"),
        ]
    );
    assert_eq!(panel.footnote, "Bird sighting data from eBird community");
}

#[test]
fn radio_panel_fields() {
    let m = make_radio("radio_1", -1.0, 2.0);
    let panel = m.panel();
    assert_eq!(panel.title, "Eco Radio");
    assert_eq!(panel.fields[0], ("Frequency", "101.3 FM".to_string()));
    assert_eq!(panel.fields[1], ("Power", "25 kW".to_string()));
    assert_eq!(panel.fields[3], ("Coordinates", "-1.00°, 2.00°".to_string()));
    assert_eq!(panel.footnote, "Radio station broadcasting nature content");
}

#[test]
fn categories_differ_in_look() {
    assert_eq!(make_bird("b", 0.0, 0.0).category(), Category::Bird);
    assert_eq!(make_radio("r", 0.0, 0.0).category(), Category::Radio);
    assert!(Category::Radio.marker_size() > Category::Bird.marker_size());
    assert_ne!(Category::Bird.color_rgb(), Category::Radio.color_rgb());
}

#[test]
fn unit_position_is_fixed_at_construction() {
    let m = make_bird("b", 30.0, 60.0);
    assert_eq!(m.unit_position(), lat_lon_to_unit(30.0, 60.0));
}
