pub mod console;
pub mod types;

pub use console::Console;
pub use types::catalog::Catalog;
pub use types::config::NavigatorConfig;
pub use types::geo::haversine_miles;
pub use types::nav_error::NavError;
pub use types::session::{endpoint_name, Navigator};
