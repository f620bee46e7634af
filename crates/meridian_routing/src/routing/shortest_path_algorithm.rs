use crate::{error::RoutingError, graph::Graph};

use super::routing_path::RoutingPath;

pub trait ShortestPathAlgorithm {
    /// Finds the cheapest path from `start` to `goal`. An unreachable goal is
    /// not an error, it yields [`RoutingPath::unreachable`].
    fn calc_path(&self, graph: &Graph, start: &str, goal: &str)
    -> Result<RoutingPath, RoutingError>;
}
