use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Minimum Jaro-Winkler similarity for an airport code to count as a
/// plausible suggestion for a typo.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.6;

/// Opaque airport identifier.
///
/// The production data uses IATA-style three-letter codes, but the map
/// treats the code as an opaque unique key and makes no assumption about its
/// shape or length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AirportCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for AirportCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Outgoing edge within the route network.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    pub target: AirportCode,
    pub distance_km: f64,
}

/// In-memory undirected weighted graph of airports and routes.
///
/// The map exclusively owns its airport and route collections. It is built
/// once by an external data loader and stays immutable during search, so a
/// shared reference can safely serve concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct AirportMap {
    airports: HashMap<AirportCode, Coordinate>,
    adjacency: HashMap<AirportCode, Vec<RouteEdge>>,
}

impl AirportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an airport, overwriting the coordinate if the code is already
    /// present. Last write wins.
    pub fn add_airport(&mut self, code: impl Into<AirportCode>, coordinate: Coordinate) {
        let code = code.into();
        self.adjacency.entry(code.clone()).or_default();
        self.airports.insert(code, coordinate);
    }

    /// Insert an undirected route between two known airports.
    ///
    /// Duplicate routes for the same unordered pair keep the first-seen
    /// weight; later inserts are ignored. Both endpoints must already have
    /// been added via [`AirportMap::add_airport`].
    pub fn add_route(
        &mut self,
        a: impl Into<AirportCode>,
        b: impl Into<AirportCode>,
        distance_km: f64,
    ) -> Result<()> {
        let a = a.into();
        let b = b.into();

        if !self.airports.contains_key(&a) {
            return Err(self.unknown_airport(a.as_str()));
        }
        if !self.airports.contains_key(&b) {
            return Err(self.unknown_airport(b.as_str()));
        }

        debug_assert!(distance_km >= 0.0, "route weights must be non-negative");

        if a == b {
            debug!(code = %a, "ignoring self-loop route");
            return Ok(());
        }

        if self.has_route(&a, &b) {
            debug!(from = %a, to = %b, "ignoring duplicate route, keeping first-seen weight");
            return Ok(());
        }

        self.adjacency.entry(a.clone()).or_default().push(RouteEdge {
            target: b.clone(),
            distance_km,
        });
        self.adjacency.entry(b).or_default().push(RouteEdge {
            target: a,
            distance_km,
        });

        Ok(())
    }

    /// Return the outgoing edges for an airport. Isolated and unknown codes
    /// both yield an empty slice; absence of neighbours is a valid state.
    pub fn neighbours(&self, code: &AirportCode) -> &[RouteEdge] {
        self.adjacency
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the airport code is present in the map.
    pub fn contains(&self, code: &AirportCode) -> bool {
        self.airports.contains_key(code)
    }

    /// Coordinate for an airport, if present.
    pub fn coordinate(&self, code: &AirportCode) -> Option<Coordinate> {
        self.airports.get(code).copied()
    }

    /// Coordinate for an airport, failing for codes never added to the map.
    pub fn coordinate_of(&self, code: &AirportCode) -> Result<Coordinate> {
        self.coordinate(code)
            .ok_or_else(|| self.unknown_airport(code.as_str()))
    }

    /// Iterate over all airport codes in the map.
    pub fn codes(&self) -> impl Iterator<Item = &AirportCode> {
        self.airports.keys()
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of undirected routes in the map.
    pub fn route_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Return up to `limit` known codes ranked by Jaro-Winkler similarity to
    /// the given input, for "did you mean" style error messages.
    pub fn fuzzy_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &AirportCode)> = self
            .airports
            .keys()
            .map(|known| (strsim::jaro_winkler(code, known.as_str()), known))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    pub(crate) fn unknown_airport(&self, code: &str) -> Error {
        Error::UnknownAirport {
            code: code.to_string(),
            suggestions: self.fuzzy_matches(code, 3),
        }
    }

    fn has_route(&self, a: &AirportCode, b: &AirportCode) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|edges| edges.iter().any(|edge| edge.target == *b))
    }
}
