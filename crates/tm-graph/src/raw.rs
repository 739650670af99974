//! Raw road records as they come out of the source dataset.
//!
//! Positions arrive as whitespace-separated numeric text: two tokens for a
//! node (`"497426.71 371300.01"`), an even-length flat list for an edge
//! polyline (`"x1 y1 x2 y2 …"`).  Parsing is strict — a wrong token count,
//! an unparsable token or a non-finite value is an input-format error that
//! aborts the load.

use tm_core::GridPoint;

use crate::{GraphError, GraphResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// A road junction or end point in survey-grid coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    pub id:       String,
    pub position: GridPoint,
}

impl RawNode {
    pub fn new(id: impl Into<String>, position: GridPoint) -> Self {
        Self { id: id.into(), position }
    }

    /// Parse a node from its id and position text.
    pub fn from_text(id: impl Into<String>, position: &str) -> GraphResult<Self> {
        let id = id.into();
        let position = parse_position(&format!("road node {id}"), position)?;
        Ok(Self { id, position })
    }
}

/// A road link between two nodes, referenced by id, with its polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEdge {
    pub id:     String,
    pub start:  String,
    pub end:    String,
    pub points: Vec<GridPoint>,
}

impl RawEdge {
    pub fn new(
        id:     impl Into<String>,
        start:  impl Into<String>,
        end:    impl Into<String>,
        points: Vec<GridPoint>,
    ) -> Self {
        Self { id: id.into(), start: start.into(), end: end.into(), points }
    }

    /// Parse an edge from its ids and flat polyline text.
    pub fn from_text(
        id:       impl Into<String>,
        start:    impl Into<String>,
        end:      impl Into<String>,
        pos_list: &str,
    ) -> GraphResult<Self> {
        let id = id.into();
        let points = parse_pos_list(&format!("road link {id}"), pos_list)?;
        Ok(Self { id, start: start.into(), end: end.into(), points })
    }
}

/// Everything read from one source dataset, in document order.
#[derive(Clone, Debug, Default)]
pub struct RawRecords {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

impl RawRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

// ── Token parsing ─────────────────────────────────────────────────────────────

/// Parse exactly two numeric tokens into a [`GridPoint`].
///
/// `context` names the record for the error message.
pub fn parse_position(context: &str, text: &str) -> GraphResult<GridPoint> {
    let values = parse_numbers(context, text)?;
    match values[..] {
        [x, y] => Ok(GridPoint::new(x, y)),
        _ => Err(GraphError::input_format(
            context,
            format!("position {text:?} has {} tokens, expected 2", values.len()),
        )),
    }
}

/// Parse an even number of numeric tokens into consecutive points.
///
/// Empty text yields an empty polyline.
pub fn parse_pos_list(context: &str, text: &str) -> GraphResult<Vec<GridPoint>> {
    let values = parse_numbers(context, text)?;
    if values.len() % 2 != 0 {
        return Err(GraphError::input_format(
            context,
            format!("position list has {} tokens, expected an even count", values.len()),
        ));
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| GridPoint::new(xy[0], xy[1]))
        .collect())
}

fn parse_numbers(context: &str, text: &str) -> GraphResult<Vec<f64>> {
    text.split_whitespace()
        .map(|tok| match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(GraphError::input_format(context, format!("non-finite coordinate {tok:?}"))),
            Err(e) => Err(GraphError::input_format(context, format!("invalid coordinate {tok:?}: {e}"))),
        })
        .collect()
}
