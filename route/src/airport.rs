use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an airport with its code, name, location and geographical position.
///
/// Coordinates are stored as signed degrees: `latitude` grows to the north and
/// `longitude` grows to the west, the same convention used by the airport files.
/// Once built the record cannot be modified; a `Route` keeps its own copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    code: String,
    name: String,
    city: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl Airport {
    /// Creates a new `Airport`.
    ///
    /// # Parameters
    /// - `code`: Three letter identifier of the airport (not validated).
    /// - `name`: Name of the airport.
    /// - `city`: City where the airport is located.
    /// - `country`: Country where the airport is located.
    /// - `latitude`: Degrees north.
    /// - `longitude`: Degrees west.
    pub fn new(
        code: &str,
        name: &str,
        city: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Airport {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            latitude,
            longitude,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Degrees north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Degrees west.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Formats the airport as `BWI, Baltimore Washington International, Baltimore, USA (N:39.2 W:76.5)`.
impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {} (N:{} W:{})",
            self.code, self.name, self.city, self.country, self.latitude, self.longitude
        )
    }
}
