use std::slice;

use crate::airport::Airport;
use crate::errors::RouteError;

/// Fewest airports a route needs to be flown (and displayed, and measured).
pub const MIN_ROUTE_SIZE: usize = 2;

/// An ordered, mutable sequence of airports representing a flight itinerary.
///
/// The route owns every `Airport` stored in it. Its `name` is a plain label:
/// the route never recomputes it by itself, whoever mutates the route is in
/// charge of keeping it in sync with the endpoints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    name: String,
    stops: Vec<Airport>,
}

impl Route {
    /// Creates a new, empty `Route` with no name.
    pub fn new() -> Self {
        Route {
            name: String::new(),
            stops: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Appends a copy of `airport` as the new last stop of the route.
    pub fn insert_end(&mut self, airport: &Airport) {
        self.stops.push(airport.clone());
    }

    /// Removes the stop at the zero-based position `index`.
    ///
    /// The removal happens whenever the index is valid, even when it leaves the
    /// route with fewer than `MIN_ROUTE_SIZE` stops. Keeping routes flyable is
    /// a decision for the caller.
    ///
    /// # Parameters
    /// - `index`: Position of the airport to remove.
    ///
    /// # Returns
    /// * `Result<Airport, RouteError>` - The removed airport, or
    ///   `RouteError::IndexOutOfRange` if `index >= size`. On error the route is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Airport, RouteError> {
        if index >= self.stops.len() {
            return Err(RouteError::IndexOutOfRange {
                index,
                size: self.stops.len(),
            });
        }
        Ok(self.stops.remove(index))
    }

    /// Returns the stop at `index`, or `None` if the route has no such position.
    pub fn get(&self, index: usize) -> Option<&Airport> {
        self.stops.get(index)
    }

    pub fn first(&self) -> Option<&Airport> {
        self.stops.first()
    }

    pub fn last(&self) -> Option<&Airport> {
        self.stops.last()
    }

    pub fn size(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether the route has enough stops to have at least one leg.
    pub fn is_complete(&self) -> bool {
        self.stops.len() >= MIN_ROUTE_SIZE
    }

    /// Reverses the order of the stops in place.
    ///
    /// Storage is physically reordered, so `get(0)` afterwards returns what used
    /// to be the last stop.
    pub fn reverse(&mut self) {
        let size = self.stops.len();
        for i in 0..size / 2 {
            self.stops.swap(i, size - 1 - i);
        }
    }

    /// Iterates over the stops in traversal order.
    pub fn iter(&self) -> slice::Iter<'_, Airport> {
        self.stops.iter()
    }

    pub fn as_slice(&self) -> &[Airport] {
        &self.stops
    }

    /// Lists the stops as numbered lines, starting at 1:
    ///
    /// `1. BWI, Baltimore Washington International, Baltimore, USA (N:39.2 W:76.5)`
    ///
    /// The iterator borrows the route and can be requested as many times as needed.
    pub fn display(&self) -> impl Iterator<Item = String> + '_ {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, airport)| format!("{}. {}", i + 1, airport))
    }
}
