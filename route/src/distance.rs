use crate::airport::Airport;
use crate::route::Route;

/// Iterates over the legs of a route: every pair of consecutive stops, in traversal order.
///
/// A route with fewer than two stops has no legs.
pub fn legs(route: &Route) -> impl Iterator<Item = (&Airport, &Airport)> + '_ {
    route
        .as_slice()
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
}

/// Calculates the total distance of a route.
///
/// Goes from the first airport to the second, then from the second to the third,
/// and so on until the last one, adding up what `distance_fn` returns for each leg.
/// The result is expressed in whatever unit `distance_fn` uses.
///
/// # Parameters
/// - `route`: The route to measure.
/// - `distance_fn`: Called as `(lat1, lon1, lat2, lon2)` for each leg.
///
/// # Returns
/// * `f64` - The sum over all legs, or exactly `0.0` for routes with fewer than two stops.
pub fn total_distance<F>(route: &Route, mut distance_fn: F) -> f64
where
    F: FnMut(f64, f64, f64, f64) -> f64,
{
    let mut total = 0.0;
    for (from, to) in legs(route) {
        total += distance_fn(
            from.latitude(),
            from.longitude(),
            to.latitude(),
            to.longitude(),
        );
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_of(points: &[(&str, f64, f64)]) -> Route {
        let mut route = Route::new();
        for (code, lat, lon) in points {
            route.insert_end(&Airport::new(code, code, code, "USA", *lat, *lon));
        }
        route
    }

    fn manhattan(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        (lat2 - lat1).abs() + (lon2 - lon1).abs()
    }

    #[test]
    fn test_degenerate_routes_measure_zero() {
        let empty = Route::new();
        let single = route_of(&[("BWI", 39.2, 76.5)]);

        assert_eq!(total_distance(&empty, |_, _, _, _| 100.0), 0.0);
        assert_eq!(total_distance(&single, |_, _, _, _| 100.0), 0.0);
        assert_eq!(legs(&single).count(), 0);
    }

    #[test]
    fn test_distance_fn_called_once_per_leg_in_order() {
        let route = route_of(&[("A", 1.0, 2.0), ("B", 3.0, 4.0), ("C", 5.0, 6.0)]);
        let mut calls = Vec::new();

        let total = total_distance(&route, |lat1, lon1, lat2, lon2| {
            calls.push((lat1, lon1, lat2, lon2));
            1.0
        });

        assert_eq!(total, 2.0);
        assert_eq!(calls, vec![(1.0, 2.0, 3.0, 4.0), (3.0, 4.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_sum_of_legs() {
        let route = route_of(&[("A", 0.0, 0.0), ("B", 1.0, 2.0), ("C", 1.0, 5.0)]);
        assert_eq!(total_distance(&route, manhattan), 6.0);
    }

    #[test]
    fn test_reversed_route_same_total_with_symmetric_fn() {
        let mut route = route_of(&[("A", 0.5, 0.0), ("B", 1.0, 2.25), ("C", 4.0, 5.0)]);
        let forward = total_distance(&route, manhattan);
        route.reverse();
        assert_eq!(total_distance(&route, manhattan), forward);
    }

    #[test]
    fn test_order_sensitive_with_asymmetric_fn() {
        let mut route = route_of(&[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 3.0, 0.0)]);
        // Solo cuenta los tramos hacia el norte
        let northbound = |lat1: f64, _: f64, lat2: f64, _: f64| (lat2 - lat1).max(0.0);

        assert_eq!(total_distance(&route, northbound), 3.0);
        route.reverse();
        assert_eq!(total_distance(&route, northbound), 0.0);
    }

    #[test]
    fn test_legs_pairs() {
        let route = route_of(&[("A", 0.0, 0.0), ("B", 1.0, 2.0), ("C", 1.0, 5.0)]);
        let pairs: Vec<(&str, &str)> = legs(&route).map(|(a, b)| (a.code(), b.code())).collect();
        assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
    }
}
