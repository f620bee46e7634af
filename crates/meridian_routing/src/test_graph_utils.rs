#[cfg(test)]
pub mod test_graph {

    use crate::graph::Graph;

    /// Warsaw, London, Paris and New York with road/flight weights in km.
    pub fn create_four_city_graph() -> Graph {
        let mut graph = Graph::new();

        graph.add_location("A", 52.2297, 21.0122);
        graph.add_location("B", 51.5074, -0.1278);
        graph.add_location("C", 48.8566, 2.3522);
        graph.add_location("D", 40.7128, -74.0060);

        for (from, to, weight) in [
            ("A", "B", 1448.79),
            ("A", "C", 1053.81),
            ("B", "C", 344.35),
            ("B", "D", 5573.07),
            ("C", "D", 5844.25),
        ] {
            graph.add_edge(from, to, weight).unwrap();
        }

        graph
    }

    pub const ROMANIA_CITIES: [&str; 20] = [
        "Arad",
        "Bucharest",
        "Craiova",
        "Dobreta",
        "Eforie",
        "Fagaras",
        "Giurgiu",
        "Hirsova",
        "Iasi",
        "Lugoj",
        "Mehadia",
        "Neamt",
        "Oradea",
        "Pitesti",
        "RimnicuVilcea",
        "Sibiu",
        "Timisoara",
        "Urziceni",
        "Vaslui",
        "Zerind",
    ];

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
        ("Oradea", "Zerind", 71.0),
        ("Oradea", "Sibiu", 151.0),
        ("Zerind", "Arad", 75.0),
        ("Arad", "Sibiu", 140.0),
        ("Arad", "Timisoara", 118.0),
        ("Timisoara", "Lugoj", 111.0),
        ("Lugoj", "Mehadia", 70.0),
        ("Mehadia", "Dobreta", 75.0),
        ("Dobreta", "Craiova", 120.0),
        ("Craiova", "RimnicuVilcea", 146.0),
        ("Craiova", "Pitesti", 138.0),
        ("RimnicuVilcea", "Pitesti", 97.0),
        ("RimnicuVilcea", "Sibiu", 80.0),
        ("Sibiu", "Fagaras", 99.0),
        ("Fagaras", "Bucharest", 211.0),
        ("Pitesti", "Bucharest", 101.0),
        ("Bucharest", "Giurgiu", 90.0),
        ("Bucharest", "Urziceni", 85.0),
        ("Urziceni", "Hirsova", 98.0),
        ("Hirsova", "Eforie", 86.0),
        ("Urziceni", "Vaslui", 142.0),
        ("Vaslui", "Iasi", 92.0),
        ("Iasi", "Neamt", 87.0),
    ];

    /// Romania road map with every road usable in both directions. All cities
    /// share the same coordinates, so the haversine estimate is always zero.
    pub fn create_romania_graph() -> Graph {
        let mut graph = Graph::new();

        for city in ROMANIA_CITIES {
            graph.add_location(city, 0.0, 0.0);
        }

        for (from, to, distance) in ROMANIA_ROADS {
            graph.add_edge(from, to, distance).unwrap();
            graph.add_edge(to, from, distance).unwrap();
        }

        graph
    }
}
