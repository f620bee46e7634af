use serde::Serialize;

use crate::distance::{Distance, Kilometers};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPathLeg {
    from: String,
    to: String,
    distance: Distance<Kilometers>,
}

impl RoutingPathLeg {
    pub fn new(from: String, to: String, distance: Distance<Kilometers>) -> RoutingPathLeg {
        RoutingPathLeg { from, to, distance }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn distance(&self) -> Distance<Kilometers> {
        self.distance
    }
}

/// Result of a shortest path search.
///
/// An unreachable goal is represented by an empty path with an infinite
/// [`cost`](RoutingPath::cost).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPath {
    locations: Vec<String>,
    legs: Vec<RoutingPathLeg>,
    #[serde(rename = "cost")]
    weight: Option<Distance<Kilometers>>,
}

impl RoutingPath {
    pub fn new(locations: Vec<String>, legs: Vec<RoutingPathLeg>) -> RoutingPath {
        let weight = legs.iter().map(RoutingPathLeg::distance).sum();

        RoutingPath {
            locations,
            legs,
            weight: Some(weight),
        }
    }

    pub fn unreachable() -> RoutingPath {
        RoutingPath {
            locations: vec![],
            legs: vec![],
            weight: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.weight.is_some()
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    pub fn weight(&self) -> Option<Distance<Kilometers>> {
        self.weight
    }

    pub fn cost(&self) -> f64 {
        self.weight
            .map(|weight| weight.value())
            .unwrap_or(f64::INFINITY)
    }
}
