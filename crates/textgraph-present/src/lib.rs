//! Textgraph Present — converts a finished `GraphMatrix` to a petgraph
//! object for downstream consumers.

use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use textgraph_core::GraphMatrix;

/// Typed payload of one graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphNode {
    /// Vocabulary word node; `index` is the node-space index in `[0, V)`.
    Word { index: usize },
    /// Document node; `index` is the node-space index in `[V, V+D)`.
    Document { index: usize, label: Option<String> },
}

/// Build an undirected weighted petgraph graph from a graph matrix.
///
/// Nodes are added in node-space order, so petgraph node indices equal
/// matrix indices. One edge per nonzero upper-triangle entry; the matrix
/// is symmetric, so nothing is lost.
pub fn to_petgraph(gm: &GraphMatrix) -> UnGraph<GraphNode, f64> {
    let n = gm.num_nodes();
    let mut graph = UnGraph::with_capacity(n, 0);

    for i in gm.word_node_range() {
        graph.add_node(GraphNode::Word { index: i });
    }
    for i in gm.doc_node_range() {
        graph.add_node(GraphNode::Document {
            index: i,
            label: gm.labels.get(&i).cloned(),
        });
    }

    for ((r, c), &w) in gm.adjacency_matrix.indexed_iter() {
        if r < c && w != 0.0 {
            graph.add_edge((r as u32).into(), (c as u32).into(), w);
        }
    }

    graph
}
