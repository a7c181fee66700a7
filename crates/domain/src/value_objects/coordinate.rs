//! Geographic coordinate value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// IUGG mean Earth radius
const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

/// A WGS84 position in decimal degrees
///
/// Produced by geocoding or taken from route geometry. Latitude is always in
/// [-90, 90] and longitude in [-180, 180], including after deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unchecked wire shape
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Sultanahmet, Istanbul
    pub const ISTANBUL: Self = Self::trusted(41.0082, 28.9784);

    /// Kızılay, Ankara
    pub const ANKARA: Self = Self::trusted(39.9334, 32.8597);

    /// Build a coordinate, rejecting out-of-range or NaN degrees
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` when either axis is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let in_range =
            (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if in_range {
            Ok(Self::trusted(latitude, longitude))
        } else {
            Err(DomainError::InvalidCoordinates)
        }
    }

    /// For values already known to be in range, e.g. corners of a region
    /// built from valid coordinates
    pub(crate) const fn trusted(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in kilometres (haversine, spherical Earth)
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let (phi1, phi2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let half_d_phi = (phi2 - phi1) / 2.0;
        let half_d_lambda = (other.longitude - self.longitude).to_radians() / 2.0;

        let h = (phi1.cos() * phi2.cos())
            .mul_add(half_d_lambda.sin().powi(2), half_d_phi.sin().powi(2));

        2.0 * MEAN_EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
