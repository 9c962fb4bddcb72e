//! Common test fixtures shared by the integration tests.
//!
//! Route distances are derived from the great-circle distance times a detour
//! factor, so every edge weight is guaranteed to be at least the straight-line
//! distance and the A* heuristic stays admissible by construction.
#![allow(dead_code)]

use airpath_lib::{haversine_km, AirportMap, Coordinate};

/// Airports across southern Brazil, the domain the production data covers.
const AIRPORTS: &[(&str, f64, f64)] = &[
    ("POA", -29.994, -51.171),
    ("CXJ", -29.197, -51.187),
    ("FLN", -27.670, -48.552),
    ("NVT", -26.880, -48.651),
    ("CWB", -25.528, -49.176),
    ("IGU", -25.600, -54.487),
    ("GRU", -23.435, -46.473),
    ("GIG", -22.810, -43.250),
];

/// Routes as (from, to, detour factor over the great-circle distance).
///
/// The direct POA-GRU leg takes a deliberately long detour so the shortest
/// path between those two runs through CWB.
const ROUTES: &[(&str, &str, f64)] = &[
    ("POA", "CXJ", 1.05),
    ("POA", "FLN", 1.05),
    ("POA", "CWB", 1.05),
    ("POA", "GRU", 1.60),
    ("CXJ", "FLN", 1.10),
    ("FLN", "NVT", 1.05),
    ("FLN", "CWB", 1.05),
    ("NVT", "CWB", 1.05),
    ("CWB", "IGU", 1.05),
    ("CWB", "GRU", 1.05),
    ("GRU", "GIG", 1.05),
];

/// Connected route network over southern Brazil.
pub fn southern_brazil_map() -> AirportMap {
    let mut map = AirportMap::new();
    for &(code, latitude, longitude) in AIRPORTS {
        map.add_airport(code, Coordinate::new(latitude, longitude));
    }
    for &(from, to, factor) in ROUTES {
        let distance = factor * haversine_km(&coordinate_for(from), &coordinate_for(to));
        map.add_route(from, to, distance).expect("fixture endpoints exist");
    }
    map
}

/// Two disjoint components: a mainland pair and an island pair.
pub fn disconnected_map() -> AirportMap {
    let mut map = AirportMap::new();
    map.add_airport("AAA", Coordinate::new(0.0, 0.0));
    map.add_airport("BBB", Coordinate::new(0.0, 1.0));
    map.add_airport("XXX", Coordinate::new(40.0, 40.0));
    map.add_airport("YYY", Coordinate::new(40.0, 41.0));
    map.add_route("AAA", "BBB", 120.0).expect("fixture endpoints exist");
    map.add_route("XXX", "YYY", 95.0).expect("fixture endpoints exist");
    map
}

/// Three airports on a line where the direct A-C edge costs more than the
/// two-hop detour through B.
pub fn triangle_map() -> AirportMap {
    let mut map = AirportMap::new();
    map.add_airport("A", Coordinate::new(0.0, 0.0));
    map.add_airport("B", Coordinate::new(0.0, 1.0));
    map.add_airport("C", Coordinate::new(0.0, 2.0));
    map.add_route("A", "B", 100.0).expect("fixture endpoints exist");
    map.add_route("B", "C", 100.0).expect("fixture endpoints exist");
    map.add_route("A", "C", 500.0).expect("fixture endpoints exist");
    map
}

fn coordinate_for(code: &str) -> Coordinate {
    let &(_, latitude, longitude) = AIRPORTS
        .iter()
        .find(|(candidate, _, _)| *candidate == code)
        .expect("route references a listed airport");
    Coordinate::new(latitude, longitude)
}
