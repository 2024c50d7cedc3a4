use navigator::{Catalog, Console, NavError, Navigator, NavigatorConfig};
use route::distance::total_distance;
use route::{Airport, Route, RouteError};
use std::fs;
use std::path::{Path, PathBuf};

// Catálogo de ejemplo incluido en el crate navigator
fn sample_airports() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("navigator/data/airports.txt")
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rustic_routes_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn config(log_dir: &Path) -> NavigatorConfig {
    NavigatorConfig {
        airports_file: sample_airports(),
        log_dir: log_dir.to_path_buf(),
        verbose: false,
    }
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = Catalog::load(&sample_airports()).expect("Failed to load sample airports");

    assert_eq!(catalog.len(), 15);
    assert_eq!(catalog.get(1).map(|a| a.code()), Some("BWI"));
    assert_eq!(catalog.get(15).map(|a| a.city()), Some("Buenos Aires"));
}

#[test]
fn test_build_edit_and_reverse_route() {
    let a = Airport::new("BWI", "Baltimore", "Baltimore", "USA", 39.2, 76.5);
    let b = Airport::new("BOS", "Logan", "Boston", "USA", 42.3, 71.0);
    let c = Airport::new("JFK", "Kennedy", "New York", "USA", 40.7, 74.0);

    let mut route = Route::new();
    route.insert_end(&a);
    route.insert_end(&b);
    route.insert_end(&c);
    assert_eq!(route.size(), 3);
    assert_eq!(route.get(0), Some(&a));
    assert_eq!(route.get(2), Some(&c));

    assert_eq!(route.remove_at(1), Ok(b));
    assert_eq!(route.as_slice(), &[a.clone(), c.clone()]);

    route.reverse();
    assert_eq!(route.as_slice(), &[c, a]);
    assert_eq!(total_distance(&route, |_, _, _, _| 1.0), 1.0);

    assert_eq!(
        route.remove_at(5),
        Err(RouteError::IndexOutOfRange { index: 5, size: 2 })
    );
}

#[test]
fn test_full_session_from_config() {
    let log_dir = temp_dir("session");
    let mut navigator = Navigator::from_config(&config(&log_dir)).expect("Failed to start");

    // Crear BWI -> JFK -> BOS, mostrarla, quitar JFK, invertirla y salir
    let script = "1\n1\n3\n2\n-1\n2\n1\n3\n1\n2\n4\n1\n2\n1\n5\n";
    let mut console = Console::new(script.as_bytes(), Vec::new());
    console.run(&mut navigator).expect("Session failed");
    let output = String::from_utf8(console.into_output()).expect("Output is not UTF-8");

    assert!(output.contains("Done Building a New Route named: Baltimore to Boston"));
    assert!(output.contains("Displaying Route: Baltimore to Boston"));
    assert!(output.contains("Route named Baltimore to Boston updated"));
    assert!(output.contains("Done reversing route: Boston to Baltimore"));
    assert!(output.contains("The total miles of this route is 369.00 miles"));

    let route = navigator.route(1).expect("Route missing");
    let codes: Vec<&str> = route.iter().map(|a| a.code()).collect();
    assert_eq!(codes, vec!["BOS", "BWI"]);

    let log = fs::read_to_string(log_dir.join("navigator_session.log")).expect("Missing log");
    assert!(log.contains("[INFO]"));
    assert!(log.contains("Airports loaded: 15"));
    assert!(log.contains("Removed JFK from route, now named Baltimore to Boston"));
    assert!(log.contains("Done reversing route: Boston to Baltimore"));

    fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
}

#[test]
fn test_policy_rejections_are_logged() {
    let log_dir = temp_dir("policy");
    let mut navigator = Navigator::from_config(&config(&log_dir)).expect("Failed to start");

    assert!(matches!(
        navigator.create_route(&[1]),
        Err(NavError::NotEnoughAirports(1))
    ));
    navigator.create_route(&[1, 2]).expect("Failed to create route");
    assert!(matches!(
        navigator.remove_airport(1, 1),
        Err(NavError::RouteTooShort(_))
    ));

    let log = fs::read_to_string(log_dir.join("navigator_session.log")).expect("Missing log");
    assert!(log.contains("[WARN]"));
    assert!(log.contains("Cannot remove an airport from Baltimore to Boston"));

    fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
}

#[test]
fn test_missing_airport_file() {
    let log_dir = temp_dir("missing");
    let config = NavigatorConfig {
        airports_file: log_dir.join("nope.txt"),
        log_dir: log_dir.clone(),
        verbose: false,
    };

    assert!(matches!(
        Navigator::from_config(&config),
        Err(NavError::CatalogIo(_))
    ));
    let log = fs::read_to_string(log_dir.join("navigator_session.log")).expect("Missing log");
    assert!(log.contains("[ERROR]"));

    fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
}
