use criterion::{Criterion, black_box, criterion_group, criterion_main};

use meridian_routing::{
    geopoint::{GeoPoint, haversine_distance},
    graph::Graph,
    routing::{
        astar::AStar, astar_heuristic::ZeroHeuristic,
        shortest_path_algorithm::ShortestPathAlgorithm,
    },
};

const GRID_SIZE: usize = 60;
const GRID_SPACING_DEGREES: f64 = 0.01;

fn grid_name(row: usize, col: usize) -> String {
    format!("{row}:{col}")
}

/// Square grid of roads around Brussels with both directions for every road,
/// each a bit longer than the straight line between its ends.
fn create_grid_graph() -> Graph {
    let mut graph = Graph::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            graph.add_location(
                grid_name(row, col),
                50.85 + row as f64 * GRID_SPACING_DEGREES,
                4.35 + col as f64 * GRID_SPACING_DEGREES,
            );
        }
    }

    let mut connect = |from: (usize, usize), to: (usize, usize)| {
        let from_name = grid_name(from.0, from.1);
        let to_name = grid_name(to.0, to.1);
        let from_point: GeoPoint = *graph.location(&from_name).unwrap().point();
        let to_point: GeoPoint = *graph.location(&to_name).unwrap().point();
        let weight = haversine_distance(&from_point, &to_point) * 1.2;

        graph.add_edge(&from_name, &to_name, weight).unwrap();
        graph.add_edge(&to_name, &from_name, weight).unwrap();
    };

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if col + 1 < GRID_SIZE {
                connect((row, col), (row, col + 1));
            }
            if row + 1 < GRID_SIZE {
                connect((row, col), (row + 1, col));
            }
        }
    }

    graph
}

fn astar_benchmark(c: &mut Criterion) {
    let graph = create_grid_graph();
    let start = grid_name(0, 0);
    let goal = grid_name(GRID_SIZE - 1, GRID_SIZE - 1);

    let astar = AStar::new();
    c.bench_function("AStar haversine grid", |b| {
        b.iter(|| black_box(astar.calc_path(&graph, &start, &goal)))
    });

    let dijkstra = AStar::with_heuristic(ZeroHeuristic);
    c.bench_function("AStar zero heuristic grid", |b| {
        b.iter(|| black_box(dijkstra.calc_path(&graph, &start, &goal)))
    });
}

criterion_group!(benches, astar_benchmark);
criterion_main!(benches);
