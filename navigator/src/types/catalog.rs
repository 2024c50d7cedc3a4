use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use route::Airport;

use super::nav_error::NavError;

/// The airports a user can pick from when building routes.
///
/// Airports keep the order of the file they were loaded from and are
/// addressed by ordinal (1 for the first one), the way they are shown.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    airports: Vec<Airport>,
}

impl Catalog {
    pub fn new(airports: Vec<Airport>) -> Self {
        Catalog { airports }
    }

    /// Reads the airport file at `path`.
    ///
    /// Each line holds `code,name,city,country,north,west`, with no header line.
    ///
    /// # Errors
    /// - `NavError::CatalogIo` if the file cannot be opened.
    /// - `NavError::CatalogParse` on the first malformed line.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let file = File::open(path).map_err(NavError::CatalogIo)?;
        Self::from_reader(file)
    }

    /// Same as `load`, for airports that do not come from a file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NavError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut airports = Vec::new();
        for result in reader.deserialize::<Airport>() {
            let airport = result.map_err(|e| NavError::CatalogParse {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            airports.push(airport);
        }

        Ok(Catalog { airports })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns the airport shown with number `ordinal` (starting at 1).
    pub fn get(&self, ordinal: usize) -> Option<&Airport> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.airports.get(index))
    }

    /// One numbered line per airport, the way they are offered to the user.
    pub fn display(&self) -> impl Iterator<Item = String> + '_ {
        self.airports
            .iter()
            .enumerate()
            .map(|(i, airport)| format!("{}. {}", i + 1, airport))
    }
}
