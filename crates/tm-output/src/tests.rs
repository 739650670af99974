//! Integration tests for tm-output.

#[cfg(test)]
mod helpers {
    use tempfile::TempDir;

    use tm_core::PlanarPoint;
    use tm_graph::{FilteredEdge, FilteredGraph};
    use tm_topo::TopoMap;

    pub fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    pub fn graph() -> FilteredGraph {
        let mut g = FilteredGraph::new();
        g.insert_node("n1", PlanarPoint::new(0.0, 0.0));
        g.insert_node("n2", PlanarPoint::new(12.5, -3.25));
        g.insert_edge(
            "L1",
            FilteredEdge {
                start:  "n1".into(),
                end:    "n2".into(),
                points: vec![PlanarPoint::new(0.0, 0.0), PlanarPoint::new(12.5, -3.25)],
            },
        );
        g
    }

    pub fn map() -> TopoMap {
        tm_topo::build(&graph(), "lincoln", "lincoln_centre")
    }

    /// Names of every entry in `dir`, sorted.
    pub fn listing(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

// ── Atomic replacement ────────────────────────────────────────────────────────

#[cfg(test)]
mod atomic {
    use std::fs;

    use super::helpers::{listing, tmp};
    use crate::{OutputError, write_atomic};

    #[test]
    fn writes_new_file() {
        let dir = tmp();
        let path = dir.path().join("out.txt");
        write_atomic(&path, |w| Ok(w.write_all(b"hello")?)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(listing(dir.path()), ["out.txt"]);
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tmp();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer").unwrap();
        write_atomic(&path, |w| Ok(w.write_all(b"new")?)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn failed_render_leaves_destination_untouched() {
        let dir = tmp();
        let path = dir.path().join("out.txt");
        fs::write(&path, "keep me").unwrap();

        let err = write_atomic(&path, |w| {
            w.write_all(b"partial")?;
            Err(OutputError::Io(std::io::Error::other("render failed")))
        });
        assert!(err.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
        assert_eq!(listing(dir.path()), ["out.txt"], "temp file must be cleaned up");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tmp();
        let path = dir.path().join("no_such_dir").join("out.txt");
        let err = write_atomic(&path, |w| Ok(w.write_all(b"x")?)).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
        assert!(!path.exists());
    }
}

// ── Map writers ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod writers {
    use std::fs;
    use std::path::Path;

    use tm_topo::TopoMap;

    use super::helpers::{map, tmp};
    use crate::{MapFormat, write_map};

    #[test]
    fn yaml_round_trip() {
        let dir = tmp();
        let path = dir.path().join("lincoln.tmap");
        let original = map();
        write_map(&path, &original, MapFormat::Yaml).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let back: TopoMap = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn json_round_trip() {
        let dir = tmp();
        let path = dir.path().join("lincoln.json");
        let original = map();
        write_map(&path, &original, MapFormat::Json).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let back: TopoMap = serde_json::from_str(&text).unwrap();
        assert_eq!(back.name, original.name);
        assert_eq!(back.node_count(), 2);
        assert_eq!(back.edge_count(), 2);
        for (b, o) in back.nodes.iter().zip(&original.nodes) {
            assert_eq!(b.meta, o.meta);
            assert_eq!(b.name(), o.name());
            assert_eq!(b.node.pose.position, o.node.pose.position);
            assert_eq!(b.edges()[0].edge_id, o.edges()[0].edge_id);
            assert_eq!(b.node.verts.len(), 8);
        }
    }

    #[test]
    fn yaml_carries_navigation_fields() {
        let dir = tmp();
        let path = dir.path().join("lincoln.tmap");
        write_map(&path, &map(), MapFormat::Yaml).unwrap();

        let doc: serde_yaml::Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["name"].as_str(), Some("lincoln_centre"));
        assert_eq!(doc["metric_map"].as_str(), Some("lincoln"));

        let node = &doc["nodes"][0]["node"];
        assert_eq!(node["pose"]["orientation"]["w"].as_f64(), Some(1.0));
        assert_eq!(node["verts"].as_sequence().map(Vec::len), Some(8));
        assert_eq!(node["localise_by_topic"].as_str(), Some(""));

        let edge = &node["edges"][0];
        assert_eq!(edge["edge_id"].as_str(), Some("WayPoint0_WayPoint1"));
        assert_eq!(edge["node"].as_str(), Some("WayPoint1"));
        assert_eq!(edge["action"].as_str(), Some("move_base"));
        assert_eq!(edge["top_vel"].as_f64(), Some(0.55));
        assert_eq!(edge["map_2d"].as_str(), Some("lincoln"));
    }

    #[test]
    fn yaml_node_records_are_nested() {
        let dir = tmp();
        let path = dir.path().join("lincoln.tmap");
        write_map(&path, &map(), MapFormat::Yaml).unwrap();

        let doc: serde_yaml::Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let record = doc["nodes"][0].as_mapping().unwrap();
        let keys: Vec<_> = record.keys().filter_map(|k| k.as_str()).collect();
        assert_eq!(keys, ["meta", "node"]);

        let meta = &doc["nodes"][0]["meta"];
        assert_eq!(meta["node"].as_str(), Some("WayPoint0"));
        assert_eq!(meta["map"].as_str(), Some("lincoln"));
        assert_eq!(meta["pointset"].as_str(), Some("lincoln_centre"));
        assert_eq!(meta["published_at"].as_str(), Some(""));
        assert_eq!(meta["timestamp"].as_str(), Some(""));

        let node = doc["nodes"][0]["node"].as_mapping().unwrap();
        let fields: Vec<_> = node.keys().filter_map(|k| k.as_str()).collect();
        assert_eq!(
            fields,
            [
                "map",
                "name",
                "pointset",
                "pose",
                "yaw_goal_tolerance",
                "xy_goal_tolerance",
                "verts",
                "edges",
                "localise_by_topic",
            ]
        );
        assert_eq!(doc["nodes"][0]["node"]["name"].as_str(), Some("WayPoint0"));
        assert_eq!(doc["nodes"][0]["node"]["verts"].as_sequence().map(Vec::len), Some(8));
    }

    #[test]
    fn empty_map_is_written() {
        let dir = tmp();
        let path = dir.path().join("empty.tmap");
        let empty = TopoMap::new("lincoln", "lincoln_centre");
        write_map(&path, &empty, MapFormat::Yaml).unwrap();
        let back: TopoMap = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn format_from_path_and_str() {
        assert_eq!(MapFormat::from_path(Path::new("a.tmap")), Some(MapFormat::Yaml));
        assert_eq!(MapFormat::from_path(Path::new("a.YML")), Some(MapFormat::Yaml));
        assert_eq!(MapFormat::from_path(Path::new("a.json")), Some(MapFormat::Json));
        assert_eq!(MapFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(MapFormat::from_path(Path::new("noext")), None);

        assert_eq!("JSON".parse::<MapFormat>(), Ok(MapFormat::Json));
        assert_eq!("yaml".parse::<MapFormat>(), Ok(MapFormat::Yaml));
        assert!("xml".parse::<MapFormat>().is_err());
        assert_eq!(MapFormat::default(), MapFormat::Yaml);
    }
}

// ── Graph CSV export ──────────────────────────────────────────────────────────

#[cfg(test)]
mod export {
    use super::helpers::{graph, tmp};
    use crate::{EDGES_FILE, NODES_FILE, export_graph_csv};

    fn read(path: std::path::PathBuf) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn nodes_csv() {
        let dir = tmp();
        export_graph_csv(dir.path(), &graph()).unwrap();

        let (headers, rows) = read(dir.path().join(NODES_FILE));
        assert_eq!(headers, ["id", "x", "y"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["n1", "0", "0"]);
        assert_eq!(rows[1], ["n2", "12.5", "-3.25"]);
    }

    #[test]
    fn edges_csv() {
        let dir = tmp();
        export_graph_csv(dir.path(), &graph()).unwrap();

        let (headers, rows) = read(dir.path().join(EDGES_FILE));
        assert_eq!(headers, ["id", "start", "end", "x1", "y1", "x2", "y2"]);
        assert_eq!(rows, [["L1", "n1", "n2", "0", "0", "12.5", "-3.25"]]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let out = dir.path().join("plots").join("lincoln");
        export_graph_csv(&out, &tm_graph::FilteredGraph::new()).unwrap();

        let (headers, rows) = read(out.join(NODES_FILE));
        assert_eq!(headers, ["id", "x", "y"]);
        assert!(rows.is_empty());
        assert!(out.join(EDGES_FILE).exists());
    }
}
