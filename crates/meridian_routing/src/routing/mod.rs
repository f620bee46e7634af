pub mod astar;
pub mod astar_heuristic;
pub mod routing_path;
pub mod shortest_path_algorithm;
