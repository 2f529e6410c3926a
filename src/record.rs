use serde::Deserialize;
use std::fmt;

/// A single vessel as loaded from the dataset.
///
/// Text fields are `None` when the source has no usable value for them, so a
/// query can tell "missing" apart from a real key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShipRecord {
    #[serde(rename = "SHIPNAME", default, deserialize_with = "crate::loader::text")]
    pub name: Option<String>,
    #[serde(rename = "COUNTRY", default, deserialize_with = "crate::loader::text")]
    pub country: Option<String>,
    #[serde(rename = "TYPE_SUMMARY", default, deserialize_with = "crate::loader::text")]
    pub type_summary: Option<String>,
    #[serde(rename = "SPEED", default, deserialize_with = "crate::loader::number")]
    pub speed: Option<f64>,
    #[serde(rename = "LON", default, deserialize_with = "crate::loader::number")]
    pub longitude: Option<f64>,
    #[serde(rename = "LAT", default, deserialize_with = "crate::loader::number")]
    pub latitude: Option<f64>,
}

impl ShipRecord {
    /// Shorthand for building records in code.
    pub fn new(name: &str, country: &str, type_summary: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            country: Some(country.to_string()),
            type_summary: Some(type_summary.to_string()),
            ..Self::default()
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_position(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self
    }
}

/// Text field a query groups or searches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Country,
    TypeSummary,
}

impl Field {
    /// Value of this field on `record`, if present.
    pub fn get(self, record: &ShipRecord) -> Option<&str> {
        match self {
            Field::Name => record.name.as_deref(),
            Field::Country => record.country.as_deref(),
            Field::TypeSummary => record.type_summary.as_deref(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Country => "country",
            Field::TypeSummary => "type_summary",
        })
    }
}

/// Longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Immutable, ordered collection of ship records.
///
/// Built once at startup and only ever handed out by shared reference.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ShipRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ShipRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ShipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ShipRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = ShipRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
