use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur within the `Route` struct.
///
/// The possible errors are:
///
/// - `IndexOutOfRange`: a removal was requested at a position the route does not have.
///
/// Lookups never fail: `Route::get` answers `None` for the same positions.
#[derive(Debug, PartialEq)]
pub enum RouteError {
    IndexOutOfRange { index: usize, size: usize },
}

impl Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::IndexOutOfRange { index, size } => write!(
                f,
                "[IndexOutOfRange]: Index {} is out of range for a route of {} airports",
                index, size
            ),
        }
    }
}

impl std::error::Error for RouteError {}
