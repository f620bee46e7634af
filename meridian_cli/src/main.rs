use clap::Parser;
use meridian_routing::routing::routing_path::RoutingPath;
use mimalloc::MiMalloc;
use tracing::info;

mod example_graph;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Name of the start location
    #[arg(long, default_value = "A")]
    from: String,

    /// Name of the goal location
    #[arg(long, default_value = "D")]
    to: String,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    debug: bool,
}

fn format_route(path: &RoutingPath) -> String {
    let cost = if path.is_found() {
        format!("{:.2}", path.cost())
    } else {
        String::from("+Inf")
    };

    format!("Path: [{}], Cost: {}", path.locations().join(" "), cost)
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let graph = example_graph::create()?;
    info!(
        "Loaded {} locations and {} edges",
        graph.location_count(),
        graph.edge_count()
    );

    let path = graph.search(&cli.from, &cli.to)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        println!("{}", format_route(&path));
    }

    Ok(())
}
