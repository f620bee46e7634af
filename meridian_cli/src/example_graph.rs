use meridian_routing::{error::RoutingError, graph::Graph};

const LOCATIONS: [(&str, f64, f64); 4] = [
    ("A", 52.2297, 21.0122),
    ("B", 51.5074, -0.1278),
    ("C", 48.8566, 2.3522),
    ("D", 40.7128, -74.0060),
];

const EDGES: [(&str, &str, f64); 5] = [
    ("A", "B", 1448.79),
    ("A", "C", 1053.81),
    ("B", "C", 344.35),
    ("B", "D", 5573.07),
    ("C", "D", 5844.25),
];

/// Warsaw (A), London (B), Paris (C) and New York (D).
pub fn create() -> Result<Graph, RoutingError> {
    let mut graph = Graph::new();

    for (name, lat, lng) in LOCATIONS {
        graph.add_location(name, lat, lng);
    }

    for (from, to, weight) in EDGES {
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}
