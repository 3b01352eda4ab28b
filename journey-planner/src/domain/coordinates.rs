//! Geographic position and bounding box types.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Distance in metres used when a caller does not give one.
pub const DEFAULT_DISTANCE_M: f64 = 500.0;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A search distance that is negative or not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid search distance: {0} m")]
pub struct InvalidDistance(pub f64);

/// A latitude/longitude rectangle.
///
/// Serializes to the argument names of the `stopPlacesByBbox` field, so it
/// can be spliced directly into query variables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub minimum_latitude: f64,
    pub minimum_longitude: f64,
    pub maximum_latitude: f64,
    pub maximum_longitude: f64,
}

impl BoundingBox {
    /// The box reaching `distance` metres north, south, east and west of
    /// `center`.
    ///
    /// Uses a local equirectangular approximation, which is accurate to well
    /// under a percent at the few-kilometre scale stop searches use. Latitude
    /// is clamped to the poles and longitude to the antimeridian; where the
    /// east-west reach covers the whole parallel (at or near a pole) the box
    /// spans every longitude.
    pub fn around(center: Coordinates, distance: f64) -> Result<Self, InvalidDistance> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(InvalidDistance(distance));
        }

        let lat_delta = (distance / EARTH_RADIUS_M).to_degrees();
        let lon_delta = (distance / (EARTH_RADIUS_M * center.latitude.to_radians().cos()))
            .to_degrees()
            .abs();

        let (minimum_longitude, maximum_longitude) = if lon_delta.is_finite() && lon_delta < 180.0 {
            (
                (center.longitude - lon_delta).max(-180.0),
                (center.longitude + lon_delta).min(180.0),
            )
        } else {
            (-180.0, 180.0)
        };

        Ok(Self {
            minimum_latitude: (center.latitude - lat_delta).max(-90.0),
            minimum_longitude,
            maximum_latitude: (center.latitude + lat_delta).min(90.0),
            maximum_longitude,
        })
    }
}
