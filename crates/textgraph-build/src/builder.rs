//! Graph builders — strategy trait and the TextGCN variant.

use crate::pmi::word_association_matrix;
use crate::tfidf::document_relevance_matrix;
use crate::vocab::Vocabulary;
use ndarray::{s, Array2};
use std::collections::HashMap;
use textgraph_core::{BuildConfig, Document, Error, GraphMatrix, Result};
use tracing::{debug, warn};

/// A graph construction strategy.
///
/// Implementations return one graph per corpus-level representation; a
/// strategy that builds per-document graphs may return several.
pub trait GraphBuilder {
    fn build_graph(&self, documents: &[Document]) -> Result<Vec<GraphMatrix>>;
}

/// TextGCN construction: one heterogeneous graph over the whole corpus.
///
/// Word nodes occupy indices `[0, V)`, document nodes `[V, V+D)`. The
/// adjacency matrix is composed from four blocks:
///
/// ```text
///             word–word | word–doc
/// Adjacency = ---------------------
///             doc–word  | doc–doc
/// ```
///
/// word–word is PMI, doc–word is TF-IDF with its transpose as word–doc,
/// and doc–doc is identically zero: document-to-document paths must
/// traverse a shared word node. Always returns a one-element vector.
#[derive(Debug, Default)]
pub struct TextGcnBuilder {
    config: BuildConfig,
}

impl TextGcnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Tokenize and validate the corpus. An empty document set or a
    /// document with no tokens is an invalid corpus, surfaced to the
    /// caller rather than silently skipped.
    fn tokenize(documents: &[Document]) -> Result<Vec<Vec<String>>> {
        if documents.is_empty() {
            return Err(Error::InvalidCorpus("empty document set".into()));
        }
        documents
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let tokens: Vec<String> =
                    doc.tokens().into_iter().map(str::to_string).collect();
                if tokens.is_empty() {
                    let name = doc.name.as_deref().unwrap_or("unnamed");
                    return Err(Error::InvalidCorpus(format!(
                        "document {i} ({name}) has no tokens"
                    )));
                }
                Ok(tokens)
            })
            .collect()
    }
}

impl GraphBuilder for TextGcnBuilder {
    fn build_graph(&self, documents: &[Document]) -> Result<Vec<GraphMatrix>> {
        let corpus = Self::tokenize(documents)?;
        let vocab = Vocabulary::from_corpus(&corpus);

        let num_docs = corpus.len();
        let num_nodes = vocab.len() + num_docs;
        if num_nodes > self.config.max_nodes {
            warn!(
                nodes = num_nodes,
                limit = self.config.max_nodes,
                "corpus exceeds dense-matrix node ceiling"
            );
            return Err(Error::GraphTooLarge {
                nodes: num_nodes,
                limit: self.config.max_nodes,
            });
        }
        debug!(
            words = vocab.len(),
            documents = num_docs,
            tokens = vocab.total_tokens(),
            "building TextGCN graph"
        );

        let word_word = word_association_matrix(&vocab, &corpus, self.config.window_size)?;
        let doc_word = document_relevance_matrix(&vocab, &corpus);
        let adjacency = assemble_adjacency(vocab.len(), num_docs, &word_word, &doc_word)?;

        // One-hot features: each node is the identity of itself.
        let features = Array2::eye(num_nodes);

        // Labels keyed by node-space index: document i sits at node V + i.
        let labels: HashMap<usize, String> = documents
            .iter()
            .enumerate()
            .filter_map(|(i, doc)| doc.label.clone().map(|l| (vocab.len() + i, l)))
            .collect();

        Ok(vec![GraphMatrix {
            adjacency_matrix: adjacency,
            nodes_features_matrix: features,
            labels,
            word_nodes: vocab.len(),
        }])
    }
}

/// Stack the four blocks into the `N × N` adjacency matrix.
///
/// Rejects with `VocabularyMismatch` if either block was computed against
/// a different word or document ordering than the one being stacked —
/// truncating here would silently corrupt the matrix.
fn assemble_adjacency(
    num_words: usize,
    num_docs: usize,
    word_word: &Array2<f64>,
    doc_word: &Array2<f64>,
) -> Result<Array2<f64>> {
    if word_word.shape() != [num_words, num_words] {
        return Err(Error::VocabularyMismatch(format!(
            "word-word block is {:?}, expected [{num_words}, {num_words}]",
            word_word.shape()
        )));
    }
    if doc_word.shape() != [num_docs, num_words] {
        return Err(Error::VocabularyMismatch(format!(
            "doc-word block is {:?}, expected [{num_docs}, {num_words}]",
            doc_word.shape()
        )));
    }

    let n = num_words + num_docs;
    let mut adjacency = Array2::zeros((n, n));
    adjacency
        .slice_mut(s![..num_words, ..num_words])
        .assign(word_word);
    adjacency
        .slice_mut(s![num_words.., ..num_words])
        .assign(doc_word);
    adjacency
        .slice_mut(s![..num_words, num_words..])
        .assign(&doc_word.t());
    // doc-doc block stays zero.
    Ok(adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_corpus() -> Vec<Document> {
        vec![
            Document::with_label("the cat sat", "A"),
            Document::with_label("the dog sat", "B"),
        ]
    }

    fn build(documents: &[Document]) -> GraphMatrix {
        TextGcnBuilder::new()
            .build_graph(documents)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_scenario_two_documents() {
        let graphs = TextGcnBuilder::new().build_graph(&labeled_corpus()).unwrap();
        assert_eq!(graphs.len(), 1);
        let gm = &graphs[0];

        // 4 words + 2 docs.
        assert_eq!(gm.num_nodes(), 6);
        assert_eq!(gm.word_nodes, 4);
        assert_eq!(gm.adjacency_matrix.shape(), &[6, 6]);

        // Labels keyed by node-space index with the word-node offset.
        assert_eq!(gm.labels.get(&4).map(String::as_str), Some("A"));
        assert_eq!(gm.labels.get(&5).map(String::as_str), Some("B"));
        assert_eq!(gm.labels.len(), 2);

        // "cat" (index 1) and "dog" (index 3) never co-occur.
        assert_eq!(gm.adjacency_matrix[[1, 3]], 0.0);
    }

    #[test]
    fn test_adjacency_is_symmetric_with_zero_diagonal() {
        let gm = build(&labeled_corpus());
        let n = gm.num_nodes();
        for i in 0..n {
            assert_eq!(gm.adjacency_matrix[[i, i]], 0.0);
            for j in 0..n {
                assert_eq!(gm.adjacency_matrix[[i, j]], gm.adjacency_matrix[[j, i]]);
            }
        }
    }

    #[test]
    fn test_doc_doc_block_is_zero() {
        let gm = build(&labeled_corpus());
        for i in gm.doc_node_range() {
            for j in gm.doc_node_range() {
                assert_eq!(gm.adjacency_matrix[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn test_all_weights_nonnegative() {
        let gm = build(&labeled_corpus());
        assert!(gm.adjacency_matrix.iter().all(|&w| w >= 0.0 && w.is_finite()));
    }

    #[test]
    fn test_feature_matrix_is_identity_not_all_ones() {
        let gm = build(&labeled_corpus());
        let n = gm.num_nodes();
        assert_eq!(gm.nodes_features_matrix, Array2::<f64>::eye(n));
        // Guard against the all-ones regression: off-diagonal must be 0.
        assert_ne!(gm.nodes_features_matrix, Array2::<f64>::ones((n, n)));
        assert_eq!(gm.nodes_features_matrix[[0, 1]], 0.0);
    }

    #[test]
    fn test_empty_corpus_is_invalid() {
        let err = TextGcnBuilder::new().build_graph(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidCorpus(_)));
    }

    #[test]
    fn test_untokenizable_document_is_invalid() {
        let documents = vec![Document::new("fine text"), Document::new("   ")];
        let err = TextGcnBuilder::new().build_graph(&documents).unwrap_err();
        assert!(matches!(err, Error::InvalidCorpus(_)));
    }

    #[test]
    fn test_single_repeated_word_document() {
        let gm = build(&[Document::new("a a a")]);
        // Vocabulary size 1: the word-word block is 1x1 and zero.
        assert_eq!(gm.word_nodes, 1);
        assert_eq!(gm.num_nodes(), 2);
        assert_eq!(gm.adjacency_matrix[[0, 0]], 0.0);
    }

    #[test]
    fn test_determinism_bit_identical() {
        let documents = labeled_corpus();
        let a = build(&documents);
        let b = build(&documents);
        assert_eq!(a.adjacency_matrix, b.adjacency_matrix);
        assert_eq!(a.nodes_features_matrix, b.nodes_features_matrix);
        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn test_node_ceiling_rejected() {
        let builder = TextGcnBuilder::with_config(BuildConfig::with_max_nodes(3));
        let err = builder.build_graph(&labeled_corpus()).unwrap_err();
        assert!(matches!(
            err,
            Error::GraphTooLarge { nodes: 6, limit: 3 }
        ));
    }

    #[test]
    fn test_unlabeled_documents_carry_no_label() {
        let gm = build(&[Document::new("some words here"), Document::new("more words")]);
        assert!(gm.labels.is_empty());
    }

    #[test]
    fn test_assemble_rejects_mismatched_blocks() {
        let word_word = Array2::zeros((3, 3));
        let doc_word = Array2::zeros((2, 4)); // wrong vocabulary width
        let err = assemble_adjacency(3, 2, &word_word, &doc_word).unwrap_err();
        assert!(matches!(err, Error::VocabularyMismatch(_)));

        let word_word = Array2::zeros((4, 4)); // wrong vocabulary size
        let doc_word = Array2::zeros((2, 3));
        let err = assemble_adjacency(3, 2, &word_word, &doc_word).unwrap_err();
        assert!(matches!(err, Error::VocabularyMismatch(_)));
    }

    #[test]
    fn test_word_doc_block_is_transpose_of_doc_word() {
        let gm = build(&[
            Document::new("alpha beta"),
            Document::new("beta gamma gamma"),
        ]);
        let v = gm.word_nodes;
        for w in 0..v {
            for d in gm.doc_node_range() {
                assert_eq!(gm.adjacency_matrix[[w, d]], gm.adjacency_matrix[[d, w]]);
            }
        }
    }
}
