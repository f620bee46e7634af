use crate::{
    distance::{Distance, Kilometers},
    graph::{Graph, LocationId},
};

pub trait AStarHeuristic {
    /// Lower bound of the cost from `start` to `end`. Must never overestimate
    /// for the search to stay optimal.
    fn estimate(&self, graph: &Graph, start: LocationId, end: LocationId) -> Distance<Kilometers>;
}

/// Straight-line distance over the earth's surface. Admissible as long as edge
/// weights are travel distances in kilometers.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineHeuristic;

impl AStarHeuristic for HaversineHeuristic {
    fn estimate(&self, graph: &Graph, start: LocationId, end: LocationId) -> Distance<Kilometers> {
        let start_coordinates = graph.location_by_id(start).point();
        let end_coordinates = graph.location_by_id(end).point();

        Distance::from_value_floor(start_coordinates.haversine_distance(end_coordinates))
    }
}

/// Turns A* into Dijkstra, for weights that are not geographic distances.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    fn estimate(&self, _: &Graph, _: LocationId, _: LocationId) -> Distance<Kilometers> {
        Distance::zero()
    }
}
