//! Flight routes built from airport records.
//!
//! A [`Route`] is an ordered list of [`Airport`] stops that can be extended at the
//! end, shortened at any position and reversed in place. [`distance::total_distance`]
//! walks a route leg by leg with a caller supplied distance function.

pub mod airport;
pub mod distance;
pub mod errors;
pub mod route;

pub use airport::Airport;
pub use errors::RouteError;
pub use route::{Route, MIN_ROUTE_SIZE};
