use std::fmt;
use std::io;

use logger::LoggerError;
use route::RouteError;

/// Represents errors that can occur while running the navigator.
#[derive(Debug)]
pub enum NavError {
    /// The airport file could not be opened or read.
    CatalogIo(io::Error),
    /// A line of the airport file is malformed.
    CatalogParse { line: u64, message: String },
    /// Input that could not be understood (e.g. not a number).
    InvalidInput(String),
    /// A number outside the list the user was choosing from.
    InvalidSelection { choice: i64, max: usize },
    /// There are no routes to work with.
    NoRoutes,
    /// Removing would leave the route with fewer than two airports.
    RouteTooShort(String),
    /// A route needs at least two airports.
    NotEnoughAirports(usize),
    Route(RouteError),
    Logger(LoggerError),
    Io(io::Error),
    /// Bad command line arguments.
    Config(String),
    /// The console input was closed.
    EndOfInput,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::CatalogIo(e) => write!(f, "Unable to read airport file: {}", e),
            NavError::CatalogParse { line, message } => {
                write!(f, "Malformed airport on line {}: {}", line, message)
            }
            NavError::InvalidInput(input) => {
                write!(f, "Invalid input: '{}' is not a number.", input)
            }
            NavError::InvalidSelection { choice, max } => write!(
                f,
                "Invalid choice, {} is out of range. Please enter a number between 1 and {}.",
                choice, max
            ),
            NavError::NoRoutes => write!(f, "There are no routes available."),
            NavError::RouteTooShort(name) => write!(
                f,
                "Cannot remove an airport from {}: it has two or fewer airports.",
                name
            ),
            NavError::NotEnoughAirports(count) => write!(
                f,
                "A route needs at least two airports ({} given).",
                count
            ),
            NavError::Route(e) => write!(f, "Route Error: {}", e),
            NavError::Logger(e) => write!(f, "Logger Error: {}", e),
            NavError::Io(e) => write!(f, "I/O Error: {}", e),
            NavError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            NavError::EndOfInput => write!(f, "End of input"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::CatalogIo(e) | NavError::Io(e) => Some(e),
            NavError::Route(e) => Some(e),
            NavError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RouteError> for NavError {
    fn from(error: RouteError) -> Self {
        NavError::Route(error)
    }
}

impl From<LoggerError> for NavError {
    fn from(error: LoggerError) -> Self {
        NavError::Logger(error)
    }
}

impl From<io::Error> for NavError {
    fn from(error: io::Error) -> Self {
        NavError::Io(error)
    }
}
