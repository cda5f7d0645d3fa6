//! Command-line front end: load a JSON adjacency file and query shortest paths.
//!
//! Usage:
//!   sssp <graph.json> --source A [--target D ...]

use clap::Parser;
use log::info;
use ordered_float::OrderedFloat;
use serde::Serialize;
use sssp_engine::{Cost, DirectedGraph, Error, Graph, ShortestPathEngine};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "sssp",
    version,
    about = "Single-source shortest paths over a JSON adjacency file"
)]
struct Cli {
    /// JSON file of the form {"A": {"B": 1.0}, "B": {}}
    graph: PathBuf,

    /// Node to search from
    #[arg(short, long)]
    source: String,

    /// Nodes to report; every node when omitted
    #[arg(short, long)]
    target: Vec<String>,

    /// Print one JSON object per target instead of tab-separated lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    target: &'a str,
    distance: Cost<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
}

fn run(cli: Cli) -> sssp_engine::Result<()> {
    let graph = DirectedGraph::<String, f64>::from_json_reader(BufReader::new(File::open(&cli.graph)?))?;
    info!(
        "loaded {} nodes / {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        cli.graph.display()
    );

    let mut engine = ShortestPathEngine::new(&graph);
    engine.compute_from(&cli.source)?;

    let mut targets: Vec<String> = if cli.target.is_empty() {
        graph.nodes().cloned().collect()
    } else {
        cli.target
    };
    // Closest first, unreachable last
    targets.sort_by_key(|node| {
        let distance = engine
            .distance_to(node)
            .ok()
            .and_then(|cost| cost.finite())
            .unwrap_or(f64::INFINITY);
        (OrderedFloat(distance), node.clone())
    });

    for target in &targets {
        let distance = engine.distance_to(target)?;
        let path = match distance {
            Cost::Finite(_) => Some(engine.path_to(target)?),
            Cost::Infinite => None,
        };

        if cli.json {
            let report = Report {
                target,
                distance,
                path,
            };
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        match (distance, path) {
            (Cost::Finite(distance), Some(path)) => {
                println!("{}\t{}\t{}", target, distance, path.join(" -> "));
            }
            _ => println!("{}\tunreachable", target),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::UnknownNode(_)) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
