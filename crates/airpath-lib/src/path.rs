use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::geo::haversine_km;
use crate::graph::{AirportCode, AirportMap};

/// Outcome of a shortest-path search.
///
/// An unreachable goal is a normal outcome, not an error; only references to
/// codes absent from the map fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// Ordered path from start to goal inclusive, with its total cost.
    Found {
        path: Vec<AirportCode>,
        total_distance_km: f64,
    },
    /// The goal cannot be reached from the start under current connectivity.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }
}

/// Run A* search guided by the great-circle distance heuristic.
///
/// The heuristic is admissible because route distances are real-world
/// distances along routes, which are never shorter than the straight line,
/// and consistent by the triangle inequality on great-circle distance. The
/// first time the goal is popped its cost is therefore optimal.
pub fn find_route_a_star(
    map: &AirportMap,
    start: &AirportCode,
    goal: &AirportCode,
) -> Result<SearchResult> {
    shortest_path(map, start, goal, |node| heuristic_km(map, node, goal))
}

/// Run Dijkstra's algorithm, i.e. the same search with a zero heuristic.
///
/// Slower than A* on large networks but independent of coordinates, which
/// makes it a useful cross-check for the heuristic-guided search.
pub fn find_route_dijkstra(
    map: &AirportMap,
    start: &AirportCode,
    goal: &AirportCode,
) -> Result<SearchResult> {
    shortest_path(map, start, goal, |_| 0.0)
}

/// Core best-first search shared by A* and Dijkstra.
///
/// Decrease-key is emulated by re-pushing improved entries and discarding
/// stale ones on pop. Ties on the frontier break on the airport code so
/// results are reproducible across runs.
fn shortest_path<H>(
    map: &AirportMap,
    start: &AirportCode,
    goal: &AirportCode,
    heuristic: H,
) -> Result<SearchResult>
where
    H: Fn(&AirportCode) -> f64,
{
    if !map.contains(start) {
        return Err(map.unknown_airport(start.as_str()));
    }
    if !map.contains(goal) {
        return Err(map.unknown_airport(goal.as_str()));
    }

    if start == goal {
        return Ok(SearchResult::Found {
            path: vec![start.clone()],
            total_distance_km: 0.0,
        });
    }

    let mut g_score: HashMap<AirportCode, f64> = HashMap::new();
    let mut parents: HashMap<AirportCode, Option<AirportCode>> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    g_score.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    frontier.push(FrontierEntry::new(start.clone(), 0.0, heuristic(start)));

    while let Some(entry) = frontier.pop() {
        let best = *g_score.get(&entry.node).unwrap_or(&f64::INFINITY);
        if entry.cost.0 > best {
            // Stale entry superseded by a cheaper re-push.
            continue;
        }

        if entry.node == *goal {
            let path = reconstruct_path(&parents, start, goal);
            return Ok(SearchResult::Found {
                path,
                total_distance_km: best,
            });
        }

        for edge in map.neighbours(&entry.node) {
            let tentative_g = best + edge.distance_km;
            if tentative_g < *g_score.get(&edge.target).unwrap_or(&f64::INFINITY) {
                g_score.insert(edge.target.clone(), tentative_g);
                parents.insert(edge.target.clone(), Some(entry.node.clone()));
                frontier.push(FrontierEntry::new(
                    edge.target.clone(),
                    tentative_g,
                    heuristic(&edge.target),
                ));
            }
        }
    }

    Ok(SearchResult::NotFound)
}

/// Straight-line lower bound on the remaining cost to the goal.
///
/// Falls back to zero when a coordinate is missing, which degrades the search
/// to Dijkstra without breaking admissibility.
fn heuristic_km(map: &AirportMap, from: &AirportCode, goal: &AirportCode) -> f64 {
    match (map.coordinate(from), map.coordinate(goal)) {
        (Some(a), Some(b)) => haversine_km(&a, &b),
        _ => 0.0,
    }
}

fn reconstruct_path(
    parents: &HashMap<AirportCode, Option<AirportCode>>,
    start: &AirportCode,
    goal: &AirportCode,
) -> Vec<AirportCode> {
    let mut path = Vec::new();
    let mut current = Some(goal.clone());
    while let Some(node) = current {
        if node == *start {
            path.push(node);
            break;
        }
        current = parents.get(&node).cloned().flatten();
        path.push(node);
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    node: AirportCode,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl FrontierEntry {
    fn new(node: AirportCode, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate; ties
        // pop the lexicographically smallest code.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn line_map() -> AirportMap {
        let mut map = AirportMap::new();
        map.add_airport("AAA", Coordinate::new(0.0, 0.0));
        map.add_airport("BBB", Coordinate::new(0.0, 1.0));
        map.add_airport("CCC", Coordinate::new(0.0, 2.0));
        map.add_route("AAA", "BBB", 120.0).expect("known codes");
        map.add_route("BBB", "CCC", 120.0).expect("known codes");
        map
    }

    #[test]
    fn start_equals_goal_yields_trivial_path() {
        let map = line_map();
        let result = find_route_a_star(&map, &"BBB".into(), &"BBB".into()).expect("known codes");
        assert_eq!(
            result,
            SearchResult::Found {
                path: vec!["BBB".into()],
                total_distance_km: 0.0,
            }
        );
    }

    #[test]
    fn unknown_start_fails_before_searching() {
        let map = line_map();
        let err = find_route_a_star(&map, &"ZZZ".into(), &"AAA".into()).expect_err("ZZZ unknown");
        assert!(format!("{err}").contains("unknown airport code: ZZZ"));
    }

    #[test]
    fn unreachable_goal_is_not_found() {
        let mut map = line_map();
        map.add_airport("XXX", Coordinate::new(50.0, 50.0));
        let result = find_route_a_star(&map, &"AAA".into(), &"XXX".into()).expect("known codes");
        assert_eq!(result, SearchResult::NotFound);
    }

    #[test]
    fn equal_cost_paths_break_ties_deterministically() {
        // BBB and CCC sit on the same coordinate, so both middle hops have
        // identical cost and identical heuristic. The frontier must always
        // prefer the smaller code.
        let mut map = AirportMap::new();
        map.add_airport("AAA", Coordinate::new(0.0, 0.0));
        map.add_airport("BBB", Coordinate::new(0.0, 1.0));
        map.add_airport("CCC", Coordinate::new(0.0, 1.0));
        map.add_airport("DDD", Coordinate::new(0.0, 2.0));
        map.add_route("AAA", "BBB", 150.0).expect("known codes");
        map.add_route("AAA", "CCC", 150.0).expect("known codes");
        map.add_route("BBB", "DDD", 150.0).expect("known codes");
        map.add_route("CCC", "DDD", 150.0).expect("known codes");

        for _ in 0..10 {
            let result =
                find_route_a_star(&map, &"AAA".into(), &"DDD".into()).expect("known codes");
            let SearchResult::Found { path, .. } = result else {
                panic!("route exists");
            };
            let expected: Vec<AirportCode> = vec!["AAA".into(), "BBB".into(), "DDD".into()];
            assert_eq!(path, expected);
        }
    }

    #[test]
    fn dijkstra_matches_a_star_on_a_line() {
        let map = line_map();
        let a_star = find_route_a_star(&map, &"AAA".into(), &"CCC".into()).expect("known codes");
        let dijkstra =
            find_route_dijkstra(&map, &"AAA".into(), &"CCC".into()).expect("known codes");
        assert_eq!(a_star, dijkstra);
    }
}
