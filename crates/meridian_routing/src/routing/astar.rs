use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::constants::DEFAULT_HEAP_CAPACITY;
use crate::distance::{Distance, Kilometers};
use crate::error::RoutingError;
use crate::graph::{Graph, LocationId};
use crate::priority_queue::{FrontierEntry, PriorityQueue};
use crate::stopwatch::Stopwatch;

use super::astar_heuristic::{AStarHeuristic, HaversineHeuristic};
use super::routing_path::{RoutingPath, RoutingPathLeg};
use super::shortest_path_algorithm::ShortestPathAlgorithm;

/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The search keeps no closed set: a location is expanded again whenever a
/// cheaper path to it is found, which keeps the result optimal for any
/// admissible heuristic.
pub struct AStar<H: AStarHeuristic> {
    heuristic: H,
}

struct NodeData {
    weight: Distance<Kilometers>,

    /// Previous location and the index of the edge taken in its adjacency list
    parent: Option<(LocationId, usize)>,
}

#[derive(Default)]
struct SearchStatistics {
    popped: usize,
    stale: usize,
    expanded: usize,
}

/// State of a single search. Allocated per call so that concurrent searches
/// over the same graph share nothing mutable.
struct SearchState<'a, H: AStarHeuristic> {
    graph: &'a Graph,
    heuristic: &'a H,
    goal: LocationId,
    heap: PriorityQueue,
    // HashMap rather than a vector sized to the graph, only touched locations are stored
    data: FxHashMap<LocationId, NodeData>,
    statistics: SearchStatistics,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar { heuristic }
    }
}

impl AStar<HaversineHeuristic> {
    pub fn new() -> AStar<HaversineHeuristic> {
        Self::with_heuristic(HaversineHeuristic)
    }
}

impl Default for AStar<HaversineHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, H: AStarHeuristic> SearchState<'a, H> {
    fn new(graph: &'a Graph, heuristic: &'a H, goal: LocationId) -> Self {
        SearchState {
            graph,
            heuristic,
            goal,
            heap: PriorityQueue::with_capacity(DEFAULT_HEAP_CAPACITY),
            data: FxHashMap::default(),
            statistics: SearchStatistics::default(),
        }
    }

    fn init(&mut self, start: LocationId) {
        let h_score = self.heuristic.estimate(self.graph, start, self.goal);
        self.update_node_data(start, Distance::zero(), None);
        self.heap
            .push(FrontierEntry::new(start, Distance::zero(), h_score));
    }

    fn update_node_data(
        &mut self,
        node: LocationId,
        weight: Distance<Kilometers>,
        parent: Option<(LocationId, usize)>,
    ) {
        self.data.insert(node, NodeData { weight, parent });
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: LocationId) -> Option<Distance<Kilometers>> {
        self.data.get(&node).map(|data| data.weight)
    }

    /// Runs the search until the goal is popped. Returns whether it was reached.
    fn run(&mut self) -> Result<bool, RoutingError> {
        while let Some(FrontierEntry {
            location, cost, ..
        }) = self.heap.pop()
        {
            self.statistics.popped += 1;

            // A cheaper path to this location was found after this entry was pushed
            if self
                .current_shortest_weight(location)
                .is_some_and(|weight| cost > weight)
            {
                self.statistics.stale += 1;
                continue;
            }

            if location == self.goal {
                return Ok(true);
            }

            self.statistics.expanded += 1;

            let graph = self.graph;
            for (edge_index, edge) in graph.node_edges(location).iter().enumerate() {
                let adj_node = edge.target();

                let next_weight = cost
                    .checked_add(edge.weight())
                    .ok_or(RoutingError::CostOverflow)?;

                if self
                    .current_shortest_weight(adj_node)
                    .is_none_or(|weight| next_weight < weight)
                {
                    trace!("Relaxing {} -> {} ({})", location, adj_node, next_weight);
                    self.update_node_data(adj_node, next_weight, Some((location, edge_index)));

                    let h_score = self.heuristic.estimate(graph, adj_node, self.goal);
                    self.heap
                        .push(FrontierEntry::new(adj_node, next_weight, h_score));
                }
            }
        }

        Ok(false)
    }

    fn location_name(&self, node: LocationId) -> String {
        self.graph.location_by_id(node).name().to_string()
    }

    fn build_path(&self) -> RoutingPath {
        let mut locations = Vec::with_capacity(16);
        let mut legs = Vec::with_capacity(16);

        let mut node = self.goal;
        locations.push(self.location_name(node));

        while let Some((parent, edge_index)) = self.data.get(&node).and_then(|data| data.parent) {
            let edge = &self.graph.node_edges(parent)[edge_index];

            legs.push(RoutingPathLeg::new(
                self.location_name(parent),
                self.location_name(node),
                edge.weight(),
            ));
            locations.push(self.location_name(parent));

            node = parent;
        }

        locations.reverse();
        legs.reverse();

        RoutingPath::new(locations, legs)
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &self,
        graph: &Graph,
        start: &str,
        goal: &str,
    ) -> Result<RoutingPath, RoutingError> {
        let stopwatch = Stopwatch::new("astar/calc_path");

        let start = graph.resolve(start)?;
        let goal = graph.resolve(goal)?;

        let mut search = SearchState::new(graph, &self.heuristic, goal);
        search.init(start);

        let found = search.run()?;

        debug!(
            "AStar popped {} entries, expanded {}, skipped {} stale",
            search.statistics.popped, search.statistics.expanded, search.statistics.stale
        );
        stopwatch.report();

        if !found {
            debug!(
                "No path from {} to {}",
                graph.location_by_id(start).name(),
                graph.location_by_id(goal).name()
            );
            return Ok(RoutingPath::unreachable());
        }

        Ok(search.build_path())
    }
}
