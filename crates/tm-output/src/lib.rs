//! `tm-output` — writers for built topological maps.
//!
//! | Format | Writer       | Typical extension | Encoder      |
//! |--------|--------------|-------------------|--------------|
//! | YAML   | [`YamlWriter`] | `.tmap`, `.yaml`  | `serde_yaml` |
//! | JSON   | [`JsonWriter`] | `.json`           | `serde_json` |
//!
//! Every file is written through [`write_atomic`]: the content is rendered
//! into a temporary file beside the destination and renamed over it only
//! once fully flushed, so a failed run never leaves a truncated map behind.
//!
//! [`export_graph_csv`] additionally dumps the filtered road graph as
//! `nodes.csv` / `edges.csv` for plotting.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tm_output::{MapFormat, write_map};
//!
//! let map = tm_topo::build(&extraction.graph, "lincoln", "lincoln_centre");
//! write_map(Path::new("lincoln.tmap"), &map, MapFormat::Yaml)?;
//! ```

pub mod atomic;
pub mod error;
pub mod export;
pub mod writer;

#[cfg(test)]
mod tests;

pub use atomic::write_atomic;
pub use error::{OutputError, OutputResult};
pub use export::{EDGES_FILE, NODES_FILE, export_graph_csv};
pub use writer::{JsonWriter, MapFormat, MapWriter, YamlWriter, write_map};
