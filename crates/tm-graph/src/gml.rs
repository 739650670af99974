//! OS Open Roads GML loader — enabled with the `gml` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use tm_graph::gml::load_from_gml;
//!
//! let records = load_from_gml(Path::new("data/OSOpenRoads_SK.gml"))?;
//! ```
//!
//! # What is loaded
//!
//! | Element          | Fields read                                              |
//! |------------------|----------------------------------------------------------|
//! | `road:RoadNode`  | `gml:id`, text of the first `gml:pos`                    |
//! | `road:RoadLink`  | `gml:id`, `net:startNode`/`net:endNode` `xlink:href`, text of the first `gml:posList` |
//!
//! Elements are matched on local name, so any namespace prefix binding is
//! accepted.  All other features (road attributes, form of way, names) are
//! ignored.  The document is streamed; only the records themselves are held
//! in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{GraphError, GraphResult, RawEdge, RawNode, RawRecords};

// ── Public entry points ───────────────────────────────────────────────────────

/// Load every road node and link from a GML file.
///
/// # Errors
///
/// [`GraphError::Io`] if the file cannot be opened, [`GraphError::Xml`] on
/// malformed XML, [`GraphError::InputFormat`] on malformed coordinate text
/// or a feature without a `gml:id`.
pub fn load_from_gml(path: &Path) -> GraphResult<RawRecords> {
    let file = File::open(path)?;
    let records = load_from_reader(BufReader::new(file))?;
    info!(
        "loaded {} road nodes and {} road links from {}",
        records.nodes.len(),
        records.edges.len(),
        path.display()
    );
    Ok(records)
}

/// Like [`load_from_gml`] but accepts any buffered source.
pub fn load_from_reader<R: BufRead>(source: R) -> GraphResult<RawRecords> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut records = RawRecords::new();
    let mut feature: Option<Feature> = None;
    let mut capturing = false;
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                match e.local_name().as_ref() {
                    b"RoadNode" => feature = Some(Feature::node(feature_id(&e)?)),
                    b"RoadLink" => feature = Some(Feature::link(feature_id(&e)?)),
                    b"pos" | b"posList" => {
                        // Only the first geometry of a feature is read.
                        if feature.as_ref().is_some_and(Feature::wants_geometry) {
                            capturing = true;
                            text.clear();
                        }
                    }
                    name => {
                        if let Some(f) = feature.as_mut() {
                            f.set_endpoint(name, &e)?;
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(f) = feature.as_mut() {
                    f.set_endpoint(e.local_name().as_ref(), &e)?;
                }
            }
            Ok(Event::Text(e)) => {
                if capturing {
                    let chunk = e.unescape().map_err(|err| GraphError::Xml(err.to_string()))?;
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&chunk);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"pos" | b"posList" if capturing => {
                    capturing = false;
                    if let Some(f) = feature.as_mut() {
                        f.set_geometry(std::mem::take(&mut text));
                    }
                }
                b"RoadNode" | b"RoadLink" => {
                    if let Some(f) = feature.take() {
                        f.finish(&mut records)?;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(GraphError::Xml(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}

// ── Internal types ────────────────────────────────────────────────────────────

/// The feature currently being read.
enum Feature {
    Node {
        id:  String,
        pos: Option<String>,
    },
    Link {
        id:       String,
        start:    String,
        end:      String,
        pos_list: Option<String>,
    },
}

impl Feature {
    fn node(id: String) -> Self {
        Feature::Node { id, pos: None }
    }

    fn link(id: String) -> Self {
        Feature::Link { id, start: String::new(), end: String::new(), pos_list: None }
    }

    fn wants_geometry(&self) -> bool {
        match self {
            Feature::Node { pos, .. } => pos.is_none(),
            Feature::Link { pos_list, .. } => pos_list.is_none(),
        }
    }

    fn set_geometry(&mut self, text: String) {
        match self {
            Feature::Node { pos, .. } => *pos = Some(text),
            Feature::Link { pos_list, .. } => *pos_list = Some(text),
        }
    }

    /// Record `net:startNode` / `net:endNode` references on a link.
    fn set_endpoint(&mut self, name: &[u8], e: &BytesStart<'_>) -> GraphResult<()> {
        let Feature::Link { start, end, .. } = self else {
            return Ok(());
        };
        let slot = match name {
            b"startNode" => start,
            b"endNode" => end,
            _ => return Ok(()),
        };
        if slot.is_empty() {
            if let Some(href) = attribute(e, b"href")? {
                *slot = href.trim_start_matches('#').to_owned();
            }
        }
        Ok(())
    }

    fn finish(self, records: &mut RawRecords) -> GraphResult<()> {
        match self {
            Feature::Node { id, pos: Some(pos) } => records.nodes.push(RawNode::from_text(id, &pos)?),
            Feature::Node { id, pos: None } => warn!("road node {id:?} has no gml:pos; skipped"),
            Feature::Link { id, start, end, pos_list } => records.edges.push(RawEdge::from_text(
                id,
                start,
                end,
                pos_list.as_deref().unwrap_or(""),
            )?),
        }
        Ok(())
    }
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

/// Value of the first attribute whose local name is `local`.
fn attribute(e: &BytesStart<'_>, local: &[u8]) -> GraphResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| GraphError::Xml(err.to_string()))?;
        if attr.key.local_name().as_ref() == local {
            let value = attr.unescape_value().map_err(|err| GraphError::Xml(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn feature_id(e: &BytesStart<'_>) -> GraphResult<String> {
    let element = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    attribute(e, b"id")?.ok_or_else(|| GraphError::input_format(element, "feature has no gml:id"))
}
