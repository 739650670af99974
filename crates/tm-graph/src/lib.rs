//! `tm-graph` — raw road records and region-filtered graph extraction.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`raw`]     | `RawNode`, `RawEdge`, `RawRecords`, token parsing           |
//! | [`graph`]   | `FilteredGraph`, `FilteredEdge`                             |
//! | [`extract`] | `extract`, `Extraction`, `ExtractStats`                     |
//! | [`gml`]     | `load_from_gml`, `load_from_reader` (feature = `"gml"` only) |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag  | Effect                                                         |
//! |-------|----------------------------------------------------------------|
//! | `gml` | Enables OS Open Roads GML loading via the `quick-xml` crate.   |

pub mod error;
pub mod extract;
pub mod graph;
pub mod raw;

#[cfg(feature = "gml")]
pub mod gml;


pub use error::{GraphError, GraphResult};
pub use extract::{ExtractStats, Extraction, extract};
pub use graph::{FilteredEdge, FilteredGraph};
pub use raw::{RawEdge, RawNode, RawRecords, parse_pos_list, parse_position};
