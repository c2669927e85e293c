use pathfinder::{
    demo,
    input::{self, InputFormat},
    GraphSpec,
    Report, TextOptions,
};
use graph::{dijkstra, NodeIndex};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, clap::ArgEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the graph description; the built-in sample graph is used if omitted
    input: Option<PathBuf>,

    /// Source vertex (overrides the one given in the input)
    #[clap(short, long)]
    source: Option<NodeIndex>,

    /// Input format (inferred from the file extension by default)
    #[clap(arg_enum, short, long)]
    format: Option<InputFormat>,

    /// Output format
    #[clap(arg_enum, short, long, default_value = "text")]
    output: OutputFormat,

    /// Token printed for unreachable vertices
    #[clap(long, default_value = "INF")]
    unreachable: String,

    /// Print a shortest path next to each distance
    #[clap(long)]
    paths: bool,
}

fn load(args: &Args) -> Result<GraphSpec> {
    match &args.input {
        Some(path) => input::load(path, args.format),
        None => {
            log::info!("no input given, using the sample graph");
            Ok(demo::sample())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut spec = load(&args)?;
    if let Some(s) = args.source {
        spec = spec.with_source(s);
    }
    let g = spec.build().context("invalid graph")?;
    log::info!("querying shortest paths from vertex {}", spec.source());
    let dist = dijkstra(&g, spec.source()).context("invalid source vertex")?;

    let report = Report::new(&dist);
    match args.output {
        OutputFormat::Text => {
            let opts = TextOptions {
                unreachable: args.unreachable.clone(),
                show_paths: args.paths,
            };
            print!("{}", report.to_text(&opts));
        },
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
