//! Geographic value types.
//!
//! Coordinates follow GeoJSON ordering: longitude first, then latitude.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A longitude/latitude pair.
///
/// Serialized as a two-element array `[lng, lat]`, matching GeoJSON and the
/// routing service.
///
/// # Examples
///
/// ```
/// use directions_widget::domain::Coordinates;
///
/// let c = Coordinates::parse("-0.1276,51.5072").unwrap();
/// assert_eq!(c.lng, -0.1276);
/// assert_eq!(c.lat, 51.5072);
/// assert_eq!(c.to_string(), "-0.1276,51.5072");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Parse a `"lng,lat"` pair.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidCoordinates(s.to_string());

        let (lng, lat) = s.split_once(',').ok_or_else(invalid)?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;

        if !lng.is_finite() || !lat.is_finite() {
            return Err(invalid());
        }
        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            return Err(invalid());
        }

        Ok(Self { lng, lat })
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lng, c.lat]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

/// A GeoJSON point geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct Point {
    pub coordinates: Coordinates,
}

/// A GeoJSON feature wrapping a point, used for origin and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Point,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Feature {
    /// Create a point feature tagged with an `id` property.
    pub fn point(coordinates: Coordinates, id: &str) -> Self {
        let mut properties = serde_json::Map::new();
        properties.insert("id".to_string(), serde_json::Value::from(id));
        Self {
            geometry: Point { coordinates },
            properties,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.geometry.coordinates
    }
}

/// An axis-aligned bounding envelope.
///
/// Serialized as `[[west, south], [east, north]]`, the shape map cameras
/// accept for "fit bounds".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct BoundingBox {
    pub southwest: Coordinates,
    pub northeast: Coordinates,
}

impl BoundingBox {
    /// The envelope of a set of point features.
    ///
    /// Returns `None` for an empty collection.
    pub fn extent<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Option<Self> {
        let mut points = features.into_iter().map(Feature::coordinates);
        let first = points.next()?;

        let mut bbox = BoundingBox {
            southwest: first,
            northeast: first,
        };
        for c in points {
            bbox.southwest.lng = bbox.southwest.lng.min(c.lng);
            bbox.southwest.lat = bbox.southwest.lat.min(c.lat);
            bbox.northeast.lng = bbox.northeast.lng.max(c.lng);
            bbox.northeast.lat = bbox.northeast.lat.max(c.lat);
        }
        Some(bbox)
    }

    pub fn contains(&self, c: Coordinates) -> bool {
        (self.southwest.lng..=self.northeast.lng).contains(&c.lng)
            && (self.southwest.lat..=self.northeast.lat).contains(&c.lat)
    }
}

impl From<[[f64; 2]; 2]> for BoundingBox {
    fn from([sw, ne]: [[f64; 2]; 2]) -> Self {
        Self {
            southwest: sw.into(),
            northeast: ne.into(),
        }
    }
}

impl From<BoundingBox> for [[f64; 2]; 2] {
    fn from(b: BoundingBox) -> Self {
        [b.southwest.into(), b.northeast.into()]
    }
}
