//! Word association estimator — the PMI word–word block.

use crate::vocab::Vocabulary;
use ndarray::Array2;
use std::collections::HashMap;
use textgraph_core::{Error, Result};

/// Compute the symmetric `V × V` word–word edge-weight matrix.
///
/// A window of `window_size` tokens slides over each document's token
/// sequence; every distinct unordered pair inside a window position
/// accumulates one co-occurrence, so the matrix is symmetric by
/// construction (both orderings feed the same count). Edge weight is
/// `max(ln(p(w1,w2) / (p(w1)·p(w2))), 0)` with `p(w1,w2)` normalized by
/// the total number of window positions. Pairs never observed in any
/// window keep weight 0 — `ln(0)` is never evaluated — and the diagonal
/// stays zero: self-pairs are excluded from pair accumulation.
///
/// Errors with `InvalidCorpus` if the corpus has words but zero total
/// tokens, which would otherwise divide by zero in the unigram
/// probabilities.
pub fn word_association_matrix<S: AsRef<str>>(
    vocab: &Vocabulary,
    corpus: &[Vec<S>],
    window_size: usize,
) -> Result<Array2<f64>> {
    let v = vocab.len();
    let mut weights = Array2::zeros((v, v));
    if v == 0 {
        return Ok(weights);
    }
    if vocab.total_tokens() == 0 {
        return Err(Error::InvalidCorpus(
            "zero total token count; unigram probabilities undefined".into(),
        ));
    }
    let window_size = window_size.max(2);

    // Unordered-pair co-occurrence counts over window positions.
    let mut pair_counts: HashMap<(usize, usize), u64> = HashMap::new();
    let mut total_windows: u64 = 0;
    let mut in_window: Vec<usize> = Vec::with_capacity(window_size);
    for tokens in corpus {
        for window in tokens.windows(window_size) {
            total_windows += 1;
            in_window.clear();
            in_window.extend(window.iter().filter_map(|t| vocab.index_of(t.as_ref())));
            for (k, &a) in in_window.iter().enumerate() {
                for &b in &in_window[k + 1..] {
                    if a == b {
                        continue; // no self-association edge
                    }
                    let key = if a < b { (a, b) } else { (b, a) };
                    *pair_counts.entry(key).or_insert(0) += 1;
                }
            }
        }
    }

    // No window ever formed (e.g. every document is shorter than the
    // window): every pair is unseen and the block is all-zero.
    if total_windows == 0 {
        return Ok(weights);
    }

    let total_tokens = vocab.total_tokens() as f64;
    let total_windows = total_windows as f64;
    for (&(a, b), &n) in &pair_counts {
        let p_joint = n as f64 / total_windows;
        let p_a = vocab.count(a) as f64 / total_tokens;
        let p_b = vocab.count(b) as f64 / total_tokens;
        let pmi = (p_joint / (p_a * p_b)).ln();
        if pmi > 0.0 {
            weights[[a, b]] = pmi;
            weights[[b, a]] = pmi;
        }
    }

    Ok(weights)
}
