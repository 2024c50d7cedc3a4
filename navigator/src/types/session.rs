use logger::{Color, LogLevel, Logger};
use route::distance::total_distance;
use route::{Airport, Route, MIN_ROUTE_SIZE};

use super::catalog::Catalog;
use super::config::NavigatorConfig;
use super::geo::haversine_miles;
use super::nav_error::NavError;

/// Manages the airport catalog and the routes built from it.
///
/// Every position received here is an ordinal, as typed by the user (1 for the
/// first element). It is translated to a zero-based index before reaching a
/// `Route`. This is also where the route policies live: routes are created
/// with at least two airports and never shrink below two, and their names are
/// recomputed from the endpoints after every change.
pub struct Navigator {
    catalog: Catalog,
    routes: Vec<Route>,
    logger: Option<Logger>,
    echo: bool,
}

impl Navigator {
    /// Create a navigator without logging.
    pub fn new(catalog: Catalog) -> Self {
        Navigator {
            catalog,
            routes: Vec::new(),
            logger: None,
            echo: false,
        }
    }

    /// Attach a logger. With `echo`, log lines are also printed to the console.
    pub fn with_logger(mut self, logger: Logger, echo: bool) -> Self {
        self.logger = Some(logger);
        self.echo = echo;
        self
    }

    /// Loads the airport file and opens the session log described by `config`.
    pub fn from_config(config: &NavigatorConfig) -> Result<Self, NavError> {
        let mut logger = Logger::new(&config.log_dir, "session")?;
        if config.verbose {
            logger = logger.with_level(LogLevel::Debug);
        }

        let catalog = match Catalog::load(&config.airports_file) {
            Ok(catalog) => catalog,
            Err(e) => {
                let _ = logger.error(
                    &format!(
                        "Unable to load {}: {}",
                        config.airports_file.display(),
                        e
                    ),
                    config.verbose,
                );
                return Err(e);
            }
        };

        let navigator = Navigator::new(catalog).with_logger(logger, config.verbose);
        navigator.log_info(
            &format!("Airports loaded: {}", navigator.catalog.len()),
            Color::Cyan,
        );
        Ok(navigator)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|route| route.name()).collect()
    }

    /// Returns the route shown with number `ordinal`.
    pub fn route(&self, ordinal: usize) -> Result<&Route, NavError> {
        let index = self.route_index(ordinal)?;
        Ok(&self.routes[index])
    }

    /// Builds a new route from catalog ordinals, in the given order.
    ///
    /// # Errors
    /// - `NavError::InvalidSelection` if an ordinal is not in the catalog.
    /// - `NavError::NotEnoughAirports` if fewer than two airports are given.
    pub fn create_route(&mut self, ordinals: &[usize]) -> Result<&Route, NavError> {
        let mut route = Route::new();
        for &ordinal in ordinals {
            let airport = self
                .catalog
                .get(ordinal)
                .ok_or(NavError::InvalidSelection {
                    choice: ordinal as i64,
                    max: self.catalog.len(),
                })?;
            route.insert_end(airport);
        }

        if !route.is_complete() {
            self.log_warn(&format!(
                "Route creation cancelled, {} airports given",
                route.size()
            ));
            return Err(NavError::NotEnoughAirports(route.size()));
        }
        rename(&mut route);

        self.log_info(
            &format!("Done Building a New Route named: {}", route.name()),
            Color::Green,
        );
        self.routes.push(route);
        Ok(&self.routes[self.routes.len() - 1])
    }

    /// Total miles of a route, following its airports in order.
    pub fn route_distance(&self, ordinal: usize) -> Result<f64, NavError> {
        let route = self.route(ordinal)?;
        Ok(total_distance(route, haversine_miles))
    }

    /// Lines describing a route: its name, every airport and the total miles.
    pub fn describe_route(&self, ordinal: usize) -> Result<Vec<String>, NavError> {
        let route = self.route(ordinal)?;
        let mut lines = vec![format!("Displaying Route: {}", route.name())];
        lines.extend(route.display());
        lines.push(format!(
            "The total miles of this route is {:.2} miles",
            total_distance(route, haversine_miles)
        ));
        Ok(lines)
    }

    /// Removes the airport number `airport_ordinal` from route number `route_ordinal`.
    ///
    /// Routes with two or fewer airports are left alone. The route name is
    /// recomputed from the remaining endpoints.
    ///
    /// # Errors
    /// - `NavError::InvalidSelection` for an unknown route.
    /// - `NavError::RouteTooShort` if the route has two or fewer airports.
    /// - `NavError::Route` if the route has no such airport.
    pub fn remove_airport(
        &mut self,
        route_ordinal: usize,
        airport_ordinal: usize,
    ) -> Result<Airport, NavError> {
        let index = self.route_index(route_ordinal)?;
        let route = &mut self.routes[index];

        if route.size() <= MIN_ROUTE_SIZE {
            let error = NavError::RouteTooShort(route.name().to_string());
            self.log_warn(&error.to_string());
            return Err(error);
        }

        // Ordinal 0 wraps to usize::MAX, which the route rejects as out of range
        let removed = route.remove_at(airport_ordinal.wrapping_sub(1))?;
        rename(route);

        let message = format!(
            "Removed {} from route, now named {}",
            removed.code(),
            route.name()
        );
        self.log_info(&message, Color::Yellow);
        Ok(removed)
    }

    /// Reverses route number `ordinal` in place and renames it.
    pub fn reverse_route(&mut self, ordinal: usize) -> Result<&Route, NavError> {
        let index = self.route_index(ordinal)?;
        let route = &mut self.routes[index];
        route.reverse();
        rename(route);

        let message = format!("Done reversing route: {}", route.name());
        self.log_info(&message, Color::Magenta);
        Ok(&self.routes[index])
    }

    fn route_index(&self, ordinal: usize) -> Result<usize, NavError> {
        if self.routes.is_empty() {
            return Err(NavError::NoRoutes);
        }
        if ordinal == 0 || ordinal > self.routes.len() {
            return Err(NavError::InvalidSelection {
                choice: ordinal as i64,
                max: self.routes.len(),
            });
        }
        Ok(ordinal - 1)
    }

    fn log_info(&self, message: &str, color: Color) {
        if let Some(logger) = &self.logger {
            let _ = logger.info(message, color, self.echo);
        }
    }

    fn log_warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.warn(message, self.echo);
        }
    }

    pub(crate) fn log_debug(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.debug(message, self.echo);
        }
    }
}

/// Name of a route from the city of its first airport to the city of its last one,
/// e.g. `Baltimore to Boston`. Empty routes have no name.
pub fn endpoint_name(route: &Route) -> Option<String> {
    match (route.first(), route.last()) {
        (Some(first), Some(last)) => Some(format!("{} to {}", first.city(), last.city())),
        _ => None,
    }
}

fn rename(route: &mut Route) {
    if let Some(name) = endpoint_name(route) {
        route.set_name(&name);
    }
}
