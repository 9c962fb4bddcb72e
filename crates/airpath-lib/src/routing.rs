//! High-level route planning over an [`AirportMap`].
//!
//! This module wraps the search functions in [`crate::path`] behind a small
//! request/plan surface:
//! - [`RouteAlgorithm`] - supported algorithms (A*, Dijkstra)
//! - [`RouteRequest`] - start/goal pair plus algorithm choice
//! - [`RoutePlan`] - planned route result, serializable for rendering layers
//! - [`plan_route`] - main entry point for computing routes

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{AirportCode, AirportMap};
use crate::path::{find_route_a_star, find_route_dijkstra, SearchResult};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// A* search guided by the great-circle distance heuristic.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Dijkstra's algorithm, independent of coordinates.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: AirportCode,
    pub goal: AirportCode,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for the default A* algorithm.
    pub fn a_star(start: impl Into<AirportCode>, goal: impl Into<AirportCode>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }

    /// Convenience constructor for Dijkstra-based planning.
    pub fn dijkstra(start: impl Into<AirportCode>, goal: impl Into<AirportCode>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub path: Vec<AirportCode>,
    pub total_distance_km: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, code) in self.path.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{code}")?;
        }
        write!(f, " ({:.1} km)", self.total_distance_km)
    }
}

/// Compute a route using the requested algorithm.
///
/// Returns `Ok(None)` when the goal is unreachable from the start; that is a
/// normal outcome of a disconnected network, not an error. Unknown start or
/// goal codes fail with [`crate::Error::UnknownAirport`].
pub fn plan_route(map: &AirportMap, request: &RouteRequest) -> Result<Option<RoutePlan>> {
    debug!(
        start = %request.start,
        goal = %request.goal,
        algorithm = %request.algorithm,
        "planning route"
    );

    let result = match request.algorithm {
        RouteAlgorithm::AStar => find_route_a_star(map, &request.start, &request.goal)?,
        RouteAlgorithm::Dijkstra => find_route_dijkstra(map, &request.start, &request.goal)?,
    };

    match result {
        SearchResult::Found {
            path,
            total_distance_km,
        } => {
            debug!(
                hops = path.len().saturating_sub(1),
                total_distance_km, "route found"
            );
            Ok(Some(RoutePlan {
                algorithm: request.algorithm,
                path,
                total_distance_km,
            }))
        }
        SearchResult::NotFound => {
            debug!("no route between the requested airports");
            Ok(None)
        }
    }
}
