//! The `MapWriter` trait and its YAML / JSON implementations.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use log::info;

use tm_topo::TopoMap;

use crate::{OutputResult, write_atomic};

/// Serialises a [`TopoMap`] to a byte stream.
pub trait MapWriter {
    /// Encode `map` into `out`.  Must not flush or close `out`.
    fn write_to(&self, map: &TopoMap, out: &mut dyn Write) -> OutputResult<()>;
}

/// `.tmap` YAML, the format read by the navigation stack.
#[derive(Copy, Clone, Debug, Default)]
pub struct YamlWriter;

impl MapWriter for YamlWriter {
    fn write_to(&self, map: &TopoMap, out: &mut dyn Write) -> OutputResult<()> {
        serde_yaml::to_writer(out, map)?;
        Ok(())
    }
}

/// Pretty-printed JSON.
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonWriter;

impl MapWriter for JsonWriter {
    fn write_to(&self, map: &TopoMap, out: &mut dyn Write) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut *out, map)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

// ── Format selection ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MapFormat {
    #[default]
    Yaml,
    Json,
}

impl MapFormat {
    /// Guess the format from a file extension; `None` if unrecognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tmap" | "yaml" | "yml" => Some(MapFormat::Yaml),
            "json" => Some(MapFormat::Json),
            _ => None,
        }
    }

    pub fn writer(self) -> &'static dyn MapWriter {
        match self {
            MapFormat::Yaml => &YamlWriter,
            MapFormat::Json => &JsonWriter,
        }
    }
}

impl FromStr for MapFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" | "tmap" => Ok(MapFormat::Yaml),
            "json" => Ok(MapFormat::Json),
            other => Err(format!("unknown map format {other:?} (expected yaml or json)")),
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MapFormat::Yaml => "yaml",
            MapFormat::Json => "json",
        })
    }
}

/// Atomically write `map` to `path` in `format`.
pub fn write_map(path: &Path, map: &TopoMap, format: MapFormat) -> OutputResult<()> {
    let writer = format.writer();
    write_atomic(path, |out| writer.write_to(map, out))?;
    info!(
        "wrote {} map {:?} ({} nodes, {} directed edges) to {}",
        format,
        map.name,
        map.node_count(),
        map.edge_count(),
        path.display()
    );
    Ok(())
}
