mod components;
mod error;
mod input;
mod islands;
mod kruskal;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "forest")]
#[command(about = "Connectivity queries backed by a disjoint-set forest", long_about = None)]
struct Cli {
    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count islands of `.` cells in a chart
    Islands {
        /// Chart file (defaults to the built-in sample chart)
        #[arg(long)]
        chart: Option<PathBuf>,
    },
    /// Minimum spanning forest of a weighted edge list (Kruskal)
    Mst {
        /// Edge list with one `from to weight` per line (defaults to the built-in sample graph)
        #[arg(long)]
        edges: Option<PathBuf>,
    },
    /// Group elements joined by `a b` pairs
    Components {
        /// Pair list (defaults to stdin)
        #[arg(long)]
        pairs: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Islands { chart } => {
            let chart = match chart {
                Some(path) => input::read_file(&path)?,
                None => islands::SAMPLE_CHART.to_string(),
            };
            let report = islands::survey(&chart);
            info!(islands = report.islands, "chart surveyed");
            report::emit(&report, cli.json)
        }
        Commands::Mst { edges } => {
            let edges = match edges {
                Some(path) => kruskal::parse_edges(&input::read_file(&path)?)
                    .with_context(|| format!("Invalid edge list {}", path.display()))?,
                None => kruskal::sample_graph(),
            };
            info!(edges = edges.len(), "running Kruskal");
            let report = kruskal::minimum_spanning_forest(&edges);
            info!(
                accepted = report.edges.len(),
                components = report.components,
                "spanning forest built"
            );
            report::emit(&report, cli.json)
        }
        Commands::Components { pairs } => {
            let text = match pairs {
                Some(path) => input::read_file(&path)?,
                None => input::read_stdin()?,
            };
            let sets = components::parse_pairs(&text).context("Invalid pair list")?;
            info!(elements = sets.len(), groups = sets.count(), "pairs merged");
            report::emit(&components::summarize(&sets), cli.json)
        }
    }
}
