//! CSV export of the filtered road graph.
//!
//! Creates two files in the given directory:
//! - `nodes.csv` — `id,x,y`
//! - `edges.csv` — `id,start,end,x1,y1,x2,y2` (endpoint positions)
//!
//! Coordinates are map-local metres.

use std::fs;
use std::path::Path;

use log::info;

use tm_graph::FilteredGraph;

use crate::{OutputResult, write_atomic};

pub const NODES_FILE: &str = "nodes.csv";
pub const EDGES_FILE: &str = "edges.csv";

/// Write `graph` as `nodes.csv` and `edges.csv` under `dir`, creating `dir`
/// if needed.
pub fn export_graph_csv(dir: &Path, graph: &FilteredGraph) -> OutputResult<()> {
    fs::create_dir_all(dir)?;

    write_atomic(&dir.join(NODES_FILE), |out| {
        let mut w = csv::Writer::from_writer(out);
        w.write_record(["id", "x", "y"])?;
        for (id, p) in graph.nodes() {
            w.write_record([id.to_owned(), p.x.to_string(), p.y.to_string()])?;
        }
        w.flush()?;
        Ok(())
    })?;

    write_atomic(&dir.join(EDGES_FILE), |out| {
        let mut w = csv::Writer::from_writer(out);
        w.write_record(["id", "start", "end", "x1", "y1", "x2", "y2"])?;
        for (id, edge) in graph.edges() {
            let (Some(a), Some(b)) = (graph.node(&edge.start), graph.node(&edge.end)) else {
                continue;
            };
            w.write_record([
                id.to_owned(),
                edge.start.clone(),
                edge.end.clone(),
                a.x.to_string(),
                a.y.to_string(),
                b.x.to_string(),
                b.y.to_string(),
            ])?;
        }
        w.flush()?;
        Ok(())
    })?;

    info!(
        "exported {} nodes and {} edges as CSV to {}",
        graph.node_count(),
        graph.edge_count(),
        dir.display()
    );
    Ok(())
}
