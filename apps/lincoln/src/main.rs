//! `lincoln` — road network GML → topological navigation map.
//!
//! Loads OS Open Roads `RoadNode` / `RoadLink` features, keeps those inside
//! the configured region, re-projects them into a map-centred UTM frame and
//! writes the resulting `.tmap`.
//!
//! Run with:
//!   cargo run -p lincoln --release -- --input roads.gml --output lincoln.tmap
//!
//! Set `RUST_LOG=debug` to see every dropped edge.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tm_core::MapConfig;
use tm_graph::Extraction;
use tm_graph::gml::load_from_gml;
use tm_output::{MapFormat, export_graph_csv, write_map};
use tm_proj::CoordinateTransformer;

#[derive(Parser, Debug)]
#[command(name = "lincoln")]
#[command(about = "Convert an OS Open Roads GML extract into a topological navigation map")]
struct Cli {
    /// OS Open Roads GML file.
    #[arg(long)]
    input: PathBuf,

    /// Destination map file.
    #[arg(long, default_value = "generated_topomap.tmap")]
    output: PathBuf,

    /// Output encoding; guessed from the output extension when omitted.
    #[arg(long)]
    format: Option<MapFormat>,

    /// JSON file overriding any `MapConfig` field.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the filtered graph as `nodes.csv` / `edges.csv` here.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    #[arg(long)]
    map_name: Option<String>,

    #[arg(long)]
    pointset: Option<String>,
}

fn load_config(cli: &Cli) -> Result<MapConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => MapConfig::default(),
    };
    if let Some(name) = &cli.map_name {
        config.map_name = name.clone();
    }
    if let Some(name) = &cli.pointset {
        config.pointset_name = name.clone();
    }
    config.validate().context("invalid map configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<MapConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let format = cli
        .format
        .or_else(|| MapFormat::from_path(&cli.output))
        .unwrap_or_default();

    let t0 = Instant::now();

    // ── 1. Load ───────────────────────────────────────────────────────────────
    let records = load_from_gml(&cli.input)
        .with_context(|| format!("loading road network from {}", cli.input.display()))?;

    // ── 2. Extract ────────────────────────────────────────────────────────────
    let transformer = CoordinateTransformer::from_config(&config)
        .context("building coordinate transformer")?;
    let extraction = Extraction::from_records(&records, &transformer, &config.region);

    if let Some(dir) = &cli.export_dir {
        export_graph_csv(dir, &extraction.graph)
            .with_context(|| format!("exporting graph CSV to {}", dir.display()))?;
    }

    // ── 3. Build & write ──────────────────────────────────────────────────────
    let map = tm_topo::build(&extraction.graph, &config.map_name, &config.pointset_name);
    write_map(&cli.output, &map, format)
        .with_context(|| format!("writing map to {}", cli.output.display()))?;

    info!("done in {:.2}s", t0.elapsed().as_secs_f64());
    Ok(())
}
