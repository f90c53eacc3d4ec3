//! Document relevance estimator — the TF-IDF doc–word block.

use crate::vocab::Vocabulary;
use ndarray::Array2;
use std::collections::HashMap;

/// Compute the `D × V` TF-IDF score matrix, restricted to the fixed
/// vocabulary order.
///
/// `tf = count(w, d) / len(d)`, `idf = ln(D / df(w))`. Tokens outside the
/// vocabulary are ignored; vocabulary words absent from a document score
/// 0. Scores depend only on corpus content, not on document order; row
/// indices track the order documents are passed in. The transpose of this
/// block is the word→document block — relevance is not directional.
pub fn document_relevance_matrix<S: AsRef<str>>(
    vocab: &Vocabulary,
    corpus: &[Vec<S>],
) -> Array2<f64> {
    let (d, v) = (corpus.len(), vocab.len());
    let mut scores = Array2::zeros((d, v));
    if d == 0 || v == 0 {
        return scores;
    }

    // Document frequency per vocabulary word.
    let mut df = vec![0u64; v];
    for tokens in corpus {
        let mut seen = vec![false; v];
        for token in tokens {
            if let Some(i) = vocab.index_of(token.as_ref()) {
                if !seen[i] {
                    seen[i] = true;
                    df[i] += 1;
                }
            }
        }
    }

    let num_docs = d as f64;
    for (row, tokens) in corpus.iter().enumerate() {
        if tokens.is_empty() {
            continue;
        }
        let mut counts: HashMap<usize, u64> = HashMap::new();
        for token in tokens {
            if let Some(i) = vocab.index_of(token.as_ref()) {
                *counts.entry(i).or_insert(0) += 1;
            }
        }
        let doc_len = tokens.len() as f64;
        for (i, n) in counts {
            // df[i] >= 1: the word was counted in this very document.
            let idf = (num_docs / df[i] as f64).ln();
            scores[[row, i]] = (n as f64 / doc_len) * idf;
        }
    }

    scores
}
