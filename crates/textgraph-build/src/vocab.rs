//! Vocabulary index — the ordered word-node space.

use std::collections::HashMap;

/// Ordered, deduplicated vocabulary with raw occurrence counts.
///
/// Words are indexed in first-occurrence order over the corpus, so the
/// same corpus always yields the same index assignment. Indices are
/// contiguous in `[0, V)` and stable for the lifetime of one build; every
/// downstream matrix addresses word nodes through this order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    counts: Vec<u64>,
    index: HashMap<String, usize>,
    total_tokens: u64,
}

impl Vocabulary {
    /// Build the vocabulary from a tokenized corpus.
    pub fn from_corpus<S: AsRef<str>>(corpus: &[Vec<S>]) -> Self {
        let mut words: Vec<String> = Vec::new();
        let mut counts: Vec<u64> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut total_tokens: u64 = 0;

        for tokens in corpus {
            for token in tokens {
                let token = token.as_ref();
                total_tokens += 1;
                match index.get(token) {
                    Some(&i) => counts[i] += 1,
                    None => {
                        index.insert(token.to_string(), words.len());
                        words.push(token.to_string());
                        counts.push(1);
                    }
                }
            }
        }

        Self {
            words,
            counts,
            index,
            total_tokens,
        }
    }

    /// Number of unique words, `V`.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of a word, if it is in the vocabulary.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Word at a vocabulary index.
    pub fn word(&self, i: usize) -> &str {
        &self.words[i]
    }

    /// Raw corpus-wide occurrence count of the word at index `i`.
    pub fn count(&self, i: usize) -> u64 {
        self.counts[i]
    }

    /// Total token count across the corpus (with repetitions).
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<Vec<String>> {
        texts
            .iter()
            .map(|t| t.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_first_occurrence_order() {
        let vocab = Vocabulary::from_corpus(&corpus(&["the cat sat", "the dog sat"]));
        assert_eq!(vocab.words(), &["the", "cat", "sat", "dog"]);
        assert_eq!(vocab.index_of("dog"), Some(3));
        assert_eq!(vocab.index_of("missing"), None);
    }

    #[test]
    fn test_counts_and_totals() {
        let vocab = Vocabulary::from_corpus(&corpus(&["the cat sat", "the dog sat"]));
        assert_eq!(vocab.count(0), 2); // the
        assert_eq!(vocab.count(1), 1); // cat
        assert_eq!(vocab.count(2), 2); // sat
        assert_eq!(vocab.total_tokens(), 6);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let a = Vocabulary::from_corpus(&corpus(&["b a c", "c d"]));
        let b = Vocabulary::from_corpus(&corpus(&["b a c", "c d"]));
        assert_eq!(a.words(), b.words());
        for i in 0..a.len() {
            assert_eq!(a.count(i), b.count(i));
        }
    }

    #[test]
    fn test_singleton_word_gets_valid_index() {
        let vocab = Vocabulary::from_corpus(&corpus(&["common rare", "common"]));
        assert_eq!(vocab.index_of("rare"), Some(1));
        assert_eq!(vocab.count(1), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocabulary::from_corpus(&corpus(&[]));
        assert!(vocab.is_empty());
        assert_eq!(vocab.total_tokens(), 0);
    }
}
