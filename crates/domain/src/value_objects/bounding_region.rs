//! Bounding region value object

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Axis-aligned latitude/longitude box enclosing a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    min_latitude: f64,
    min_longitude: f64,
    max_latitude: f64,
    max_longitude: f64,
}

impl BoundingRegion {
    /// Compute the smallest region containing every coordinate
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_coordinates<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        let seed = Self {
            min_latitude: first.latitude(),
            min_longitude: first.longitude(),
            max_latitude: first.latitude(),
            max_longitude: first.longitude(),
        };

        Some(iter.fold(seed, |region, c| Self {
            min_latitude: region.min_latitude.min(c.latitude()),
            min_longitude: region.min_longitude.min(c.longitude()),
            max_latitude: region.max_latitude.max(c.latitude()),
            max_longitude: region.max_longitude.max(c.longitude()),
        }))
    }

    /// South-west corner
    #[must_use]
    pub const fn south_west(&self) -> Coordinate {
        Coordinate::trusted(self.min_latitude, self.min_longitude)
    }

    /// North-east corner
    #[must_use]
    pub const fn north_east(&self) -> Coordinate {
        Coordinate::trusted(self.max_latitude, self.max_longitude)
    }

    /// Midpoint of the region
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::trusted(
            f64::midpoint(self.min_latitude, self.max_latitude),
            f64::midpoint(self.min_longitude, self.max_longitude),
        )
    }

    /// Latitude extent in degrees
    #[must_use]
    pub fn latitude_span(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    /// Longitude extent in degrees
    #[must_use]
    pub fn longitude_span(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    /// Whether the coordinate lies inside the region (edges included)
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&coordinate.latitude())
            && (self.min_longitude..=self.max_longitude).contains(&coordinate.longitude())
    }

    /// Grow the region by `fraction` of its span on every side
    ///
    /// The result is clamped to valid latitude/longitude ranges.
    #[must_use]
    pub fn padded(&self, fraction: f64) -> Self {
        let lat_pad = self.latitude_span() * fraction;
        let lon_pad = self.longitude_span() * fraction;
        Self {
            min_latitude: (self.min_latitude - lat_pad).max(-90.0),
            min_longitude: (self.min_longitude - lon_pad).max(-180.0),
            max_latitude: (self.max_latitude + lat_pad).min(90.0),
            max_longitude: (self.max_longitude + lon_pad).min(180.0),
        }
    }
}
