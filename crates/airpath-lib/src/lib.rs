//! Airpath library entry points.
//!
//! This crate models an undirected airport route network, computes
//! great-circle distances between geographic coordinates, and runs
//! heuristic-guided shortest-path search over the network. An external data
//! loader populates an [`AirportMap`] with airports and routes; callers then
//! invoke [`plan_route`] (or the lower-level search functions in [`path`])
//! with start and goal codes. Higher-level consumers should only depend on
//! the functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use graph::{AirportCode, AirportMap, RouteEdge};
pub use path::{find_route_a_star, find_route_dijkstra, SearchResult};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
