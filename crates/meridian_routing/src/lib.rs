pub mod constants;
pub mod distance;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod priority_queue;
pub mod routing;
pub mod stopwatch;

#[cfg(test)]
pub(crate) mod test_graph_utils;
