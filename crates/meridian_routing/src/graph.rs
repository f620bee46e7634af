use std::fmt;

use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    distance::{Distance, Kilometers},
    error::RoutingError,
    geopoint::GeoPoint,
    routing::{
        astar::AStar, routing_path::RoutingPath, shortest_path_algorithm::ShortestPathAlgorithm,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    point: GeoPoint,
}

impl Location {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GraphEdge {
    target: LocationId,
    weight: Distance<Kilometers>,
}

impl GraphEdge {
    pub fn target(&self) -> LocationId {
        self.target
    }

    pub fn weight(&self) -> Distance<Kilometers> {
        self.weight
    }
}

/// Directed graph of named locations.
///
/// Locations get a dense [`LocationId`] when registered; outgoing edges are
/// kept per location in insertion order, parallel edges included.
#[derive(Debug, Default)]
pub struct Graph {
    locations: Vec<Location>,
    location_ids: FxHashMap<String, LocationId>,
    adjacency_list: Vec<Vec<GraphEdge>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Registers a location. Registering an existing name replaces its
    /// coordinates and drops its outgoing edges, but keeps its id so edges
    /// pointing at it stay valid.
    pub fn add_location(&mut self, name: impl Into<String>, lat: f64, lng: f64) -> LocationId {
        let name = name.into();
        let point = GeoPoint::new(lat, lng);

        if let Some(&id) = self.location_ids.get(&name) {
            debug!("Replacing location {} ({})", name, id);
            self.locations[id.get()].point = point;
            self.adjacency_list[id.get()].clear();
            return id;
        }

        let id = LocationId::new(self.locations.len());
        self.location_ids.insert(name.clone(), id);
        self.locations.push(Location { name, point });
        self.adjacency_list.push(vec![]);

        id
    }

    /// Appends a directed edge. Both endpoints must already be registered and
    /// the weight must be finite and non-negative.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), RoutingError> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(RoutingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        trace!("Adding edge {} -> {} ({})", from, to, weight);

        self.adjacency_list[from_id.get()].push(GraphEdge {
            target: to_id,
            weight: Distance::from(weight),
        });

        Ok(())
    }

    /// Shortest path between two named locations using A* with the
    /// haversine heuristic.
    pub fn search(&self, start: &str, goal: &str) -> Result<RoutingPath, RoutingError> {
        AStar::new().calc_path(self, start, goal)
    }

    pub fn resolve(&self, name: &str) -> Result<LocationId, RoutingError> {
        self.location_id(name)
            .ok_or_else(|| RoutingError::UnknownLocation(name.to_string()))
    }

    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.location_ids.get(name).copied()
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.location_id(name).map(|id| self.location_by_id(id))
    }

    pub fn location_by_id(&self, id: LocationId) -> &Location {
        &self.locations[id.get()]
    }

    pub fn node_edges(&self, id: LocationId) -> &[GraphEdge] {
        &self.adjacency_list[id.get()]
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency_list.iter().map(Vec::len).sum()
    }
}
