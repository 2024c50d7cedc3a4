use std::io;

use navigator::{Console, NavError, Navigator, NavigatorConfig};

/// Loads the airport file given on the command line and runs the route menu.
///
/// # Usage
///
/// ```sh
/// cargo run --bin navigator -- <airports_file> [log_dir]
/// ```
///
/// Set `NAVIGATOR_VERBOSE` to also print the session log on the console.
fn main() -> Result<(), NavError> {
    let config = NavigatorConfig::from_env()?;
    let mut navigator = Navigator::from_config(&config)?;

    println!("Airports loaded: {}", navigator.catalog().len());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&mut navigator)
}
