//! Graph output bundle — the terminal artifact of one build.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// Finished graph in matrix form.
///
/// Node space: word nodes occupy indices `[0, word_nodes)`, document nodes
/// occupy `[word_nodes, num_nodes)`. Every matrix respects this partition.
/// Read-only once built; handed to a presentation layer for any conversion.
#[derive(Debug, Clone)]
pub struct GraphMatrix {
    /// Dense `N × N` adjacency, symmetric with zero diagonal.
    pub adjacency_matrix: Array2<f64>,
    /// Dense `N × N` node features (identity: each node is a one-hot of itself).
    pub nodes_features_matrix: Array2<f64>,
    /// Node-space index → label, for labeled document nodes only.
    pub labels: HashMap<usize, String>,
    /// Number of word nodes; the boundary of the node-space partition.
    pub word_nodes: usize,
}

impl GraphMatrix {
    pub fn num_nodes(&self) -> usize {
        self.adjacency_matrix.nrows()
    }

    pub fn num_documents(&self) -> usize {
        self.num_nodes() - self.word_nodes
    }

    /// Node-space index range of word nodes.
    pub fn word_node_range(&self) -> Range<usize> {
        0..self.word_nodes
    }

    /// Node-space index range of document nodes.
    pub fn doc_node_range(&self) -> Range<usize> {
        self.word_nodes..self.num_nodes()
    }

    /// Label of the `i`-th document (document ordinal, not node index).
    pub fn doc_label(&self, i: usize) -> Option<&str> {
        self.labels.get(&(self.word_nodes + i)).map(String::as_str)
    }

    pub fn stats(&self) -> GraphStats {
        let edge_count = self
            .adjacency_matrix
            .indexed_iter()
            .filter(|&((r, c), &w)| r < c && w != 0.0)
            .count();
        GraphStats {
            node_count: self.num_nodes(),
            word_node_count: self.word_nodes,
            document_node_count: self.num_documents(),
            edge_count,
        }
    }
}

/// Summary counts for a built graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub word_node_count: usize,
    pub document_node_count: usize,
    pub edge_count: usize,
}
