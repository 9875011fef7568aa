//! Point-of-interest markers placed on the globe surface.

use crate::constants::{
    BIRD_COLOR_RGB, BIRD_MARKER_SIZE, RADIO_COLOR_RGB, RADIO_MARKER_SIZE,
};
use crate::geo::lat_lon_to_unit;
use chrono::NaiveDate;
use glam::Vec3;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Bird,
    Radio,
}

impl Category {
    pub fn color_rgb(self) -> [f32; 3] {
        match self {
            Category::Bird => BIRD_COLOR_RGB,
            Category::Radio => RADIO_COLOR_RGB,
        }
    }

    /// Marker sphere radius in globe units.
    pub fn marker_size(self) -> f32 {
        match self {
            Category::Bird => BIRD_MARKER_SIZE,
            Category::Radio => RADIO_MARKER_SIZE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bird => "bird",
            Category::Radio => "radio",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific payload of a marker.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerDetails {
    Bird {
        species: String,
        count: u32,
        observed_on: NaiveDate,
        location: String,
    },
    Radio {
        name: String,
        frequency_mhz: f32,
        power_kw: u32,
        description: String,
    },
}

impl MarkerDetails {
    pub fn category(&self) -> Category {
        match self {
            MarkerDetails::Bird { .. } => Category::Bird,
            MarkerDetails::Radio { .. } => Category::Radio,
        }
    }
}

pub type DisplayFields = SmallVec<[(&'static str, String); 5]>;

/// Text shown in the info panel when a marker is selected.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoPanel {
    pub title: String,
    pub fields: DisplayFields,
    pub footnote: &'static str,
}

/// A marker is immutable once built; `unit_position` is derived exactly once
/// from latitude/longitude and is never recomputed from a rotated frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    id: String,
    latitude: f64,
    longitude: f64,
    unit_position: Vec3,
    details: MarkerDetails,
}

impl Marker {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64, details: MarkerDetails) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            unit_position: lat_lon_to_unit(latitude, longitude),
            details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn unit_position(&self) -> Vec3 {
        self.unit_position
    }

    pub fn details(&self) -> &MarkerDetails {
        &self.details
    }

    pub fn coordinates_label(&self) -> String {
        format!("{:.2}°, {:.2}°", self.latitude, self.longitude)
    }

    /// Ordered label/value pairs for the info panel body.
    pub fn display_fields(&self) -> DisplayFields {
        let mut fields = DisplayFields::new();
        match &self.details {
            MarkerDetails::Bird {
                count,
                observed_on,
                location,
                ..
            } => {
                fields.push(("Location", location.clone()));
                fields.push(("Count", format!("{} individuals", count)));
                fields.push(("Date", observed_on.format("%-m/%-d/%Y").to_string()));
            }
            MarkerDetails::Radio {
                frequency_mhz,
                power_kw,
                description,
                ..
            } => {
                fields.push(("Frequency", format!("{:.1} FM", frequency_mhz)));
                fields.push(("Power", format!("{} kW", power_kw)));
                fields.push(("Description", description.clone()));
            }
        }
        fields.push(("Coordinates", self.coordinates_label()));
        fields
    }

    pub fn title(&self) -> &str {
        match &self.details {
            MarkerDetails::Bird { species, .. } => species,
            MarkerDetails::Radio { name, .. } => name,
        }
    }

    pub fn panel(&self) -> InfoPanel {
        let footnote = match self.category() {
            Category::Bird => "Bird sighting data from eBird community",
            Category::Radio => "Radio station broadcasting nature content",
        };
        InfoPanel {
            title: self.title().to_string(),
            fields: self.display_fields(),
            footnote,
        }
    }
}
