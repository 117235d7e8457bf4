use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path as FsPath;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::link_source::LinkSource;

#[derive(Debug, Deserialize)]
struct EdgeRow {
    from: String,
    to: String,
}

/// In-memory link graph loaded from a `from,to` edge list.
#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl AdjacencyGraph {
    pub fn load(path: &FsPath, symmetric: bool) -> Result<Self> {
        let file = File::open(path)?;
        let graph = Self::from_reader(file, symmetric)?;
        info!(path = %path.display(), nodes = graph.node_count(), "loaded link graph");
        Ok(graph)
    }

    pub fn from_reader<R: Read>(reader: R, symmetric: bool) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader); // first row is the header
        let headers = csv_reader.headers()?;
        if !["from", "to"].iter().all(|name| headers.iter().any(|h| h == *name)) {
            return Err(Error::Config(format!(
                "edge list needs `from` and `to` columns, found {:?}",
                headers
            )));
        }
        let mut graph = AdjacencyGraph::default();

        for (line, row) in csv_reader.deserialize::<EdgeRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!(row = line + 1, error = %err, "skipping unreadable edge");
                    continue;
                }
            };
            if row.from.is_empty() || row.to.is_empty() {
                continue;
            }
            if symmetric {
                graph.add_edge(&row.to, &row.from);
            }
            graph.add_edge(&row.from, &row.to);
        }

        for neighbors in graph.adjacency.values_mut() {
            neighbors.sort();
            neighbors.dedup();
        } // drops repeated links between the same two pages
        Ok(graph)
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl LinkSource for AdjacencyGraph {
    fn fetch_neighbors(&mut self, node: &str) -> Vec<String> {
        self.neighbors(node).to_vec()
    }
}
