//! `geo:<lat>,<lon>[,<alt>][?q=<label>]` payloads.
//!
//! A payload with the wrong number of coordinates, or a coordinate that is
//! not a finite number, still produces a [`GeoLocation`], just one marked
//! invalid: it renders as the unsupported-data label and its action is
//! [`ActionDescriptor::NoOp`].
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::action::ActionDescriptor;
use crate::classify::GEO_PREFIX;
use crate::labels::{LabelProvider, TextLabel};

const QUERY_SEPARATOR: &str = "?q=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_label: Option<String>,
    pub valid: bool,
    pub uri: String,
}

impl GeoLocation {
    pub fn parse(raw: &str) -> Self {
        let rest = raw.get(GEO_PREFIX.len()..).unwrap_or_default();
        let (coords, label) = match rest.split_once(QUERY_SEPARATOR) {
            Some((coords, label)) => (coords, Some(label).filter(|label| !label.is_empty())),
            None => (rest, None),
        };

        let mut location = Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: None,
            query_label: label.map(str::to_string),
            valid: false,
            uri: raw.to_string(),
        };

        match parse_coordinates(coords) {
            Some((latitude, longitude, altitude)) => {
                location.latitude = latitude;
                location.longitude = longitude;
                location.altitude = altitude;
                location.valid = true;
            }
            None => warn!(coords, "geo_unsupported_coordinates"),
        }
        location
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn render(&self, labels: &dyn LabelProvider) -> String {
        if !self.valid {
            return labels.label(TextLabel::UnsupportedData.into()).into_owned();
        }

        let label = |text: TextLabel| labels.label(text.into());
        let mut lines = Vec::with_capacity(4);
        if let Some(query) = &self.query_label {
            lines.push(format!("{} {query}", label(TextLabel::GeoQuery)));
        }
        let north_south = if self.latitude < 0.0 {
            TextLabel::GeoSouth
        } else {
            TextLabel::GeoNorth
        };
        lines.push(format!(
            "{} {}\u{b0} {}",
            label(TextLabel::GeoLatitude),
            format_number(self.latitude.abs()),
            label(north_south)
        ));
        let east_west = if self.longitude < 0.0 {
            TextLabel::GeoWest
        } else {
            TextLabel::GeoEast
        };
        lines.push(format!(
            "{} {}\u{b0} {}",
            label(TextLabel::GeoLongitude),
            format_number(self.longitude.abs()),
            label(east_west)
        ));
        if let Some(altitude) = self.altitude {
            lines.push(format!(
                "{} {} {}",
                label(TextLabel::GeoAltitude),
                format_number(altitude),
                label(TextLabel::GeoAltitudeSuffix)
            ));
        }
        lines.join("\n")
    }

    pub fn action(&self) -> ActionDescriptor {
        if self.valid {
            ActionDescriptor::ViewUri {
                uri: self.uri.clone(),
            }
        } else {
            ActionDescriptor::NoOp
        }
    }
}

/// Two or three comma-separated finite numbers. Trailing empty segments
/// (`geo:1,2,`) are ignored.
fn parse_coordinates(coords: &str) -> Option<(f64, f64, Option<f64>)> {
    let mut parts: Vec<&str> = coords.split(',').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut numbers = Vec::with_capacity(parts.len());
    for part in parts {
        let value: f64 = part.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        numbers.push(value);
    }
    Some((numbers[0], numbers[1], numbers.get(2).copied()))
}

/// Whole numbers keep one decimal place (`0.0`, `12.0`); others print as-is.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
