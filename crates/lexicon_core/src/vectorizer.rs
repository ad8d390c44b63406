use std::collections::{BTreeMap, HashMap};

use crate::options::VectorizerOptions;
use crate::tokenize::{char_tokens, segment};
use crate::vocab::{TrimReport, Vocabulary, UNKNOWN_TERM};

/// One bag-of-words entry: `(term index, count within the document)`.
pub type BowPair = (usize, u64);

/// Result of encoding a document, depending on the tokenization mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    /// Word mode: `(index, count)` pairs sorted by index ascending.
    BagOfWords(Vec<BowPair>),
    /// Char mode: one index per character, in document order.
    CharIndices(Vec<usize>),
}

/// Bag-of-words vectorizer over an incrementally built vocabulary.
///
/// Owns its vocabulary; callers wanting to share one across threads must
/// serialize access externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vectorizer {
    options: VectorizerOptions,
    vocab: Vocabulary,
}

impl Vectorizer {
    /// Creates an empty vectorizer (vocabulary holds only the sentinel).
    pub fn new(options: VectorizerOptions) -> Self {
        Vectorizer {
            options,
            vocab: Vocabulary::new(),
        }
    }

    /// Rebuilds a vectorizer from persisted parts: its options and the
    /// vocabulary's `(term, count)` entries in index order.
    pub fn from_parts(
        options: VectorizerOptions,
        entries: impl IntoIterator<Item = (String, u64)>,
    ) -> Self {
        Vectorizer {
            options,
            vocab: Vocabulary::from_entries(entries),
        }
    }

    /// Tokenizes per mode and folds the tokens into the vocabulary.
    ///
    /// Counts accumulate across calls; an empty document adds nothing.
    pub fn ingest(&mut self, document: &str) {
        let tokens = if self.options.char_level {
            char_tokens(document)
        } else {
            segment(document, &self.options)
        };
        self.vocab.observe(tokens);
    }

    /// Prunes vocabulary terms by inclusive count bounds. See
    /// [`Vocabulary::trim`].
    pub fn trim(&mut self, min_count: Option<u64>, max_count: Option<u64>) -> TrimReport {
        self.vocab.trim(min_count, max_count)
    }

    /// Maps each word token of `document` to its index, unknown tokens to
    /// the sentinel index, preserving token order.
    pub fn to_indices(&self, document: &str) -> Vec<usize> {
        segment(document, &self.options)
            .iter()
            .map(|term| self.vocab.index_of(term))
            .collect()
    }

    /// Within-document term frequencies as `(index, count)` pairs, sorted
    /// by index ascending. Out-of-vocabulary tokens collapse into the
    /// sentinel index.
    pub fn to_bag_of_words(&self, document: &str) -> Vec<BowPair> {
        let mut by_index: BTreeMap<usize, u64> = BTreeMap::new();
        for term in segment(document, &self.options) {
            *by_index.entry(self.vocab.index_of(&term)).or_insert(0) += 1;
        }
        by_index.into_iter().collect()
    }

    /// Expands bag-of-words pairs into a dense vector of length
    /// `vocab_size + 1`, zero elsewhere.
    pub fn to_dense_vector(&self, bag: &[BowPair]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocab.len() + 1];
        for &(index, count) in bag {
            if let Some(slot) = vector.get_mut(index) {
                *slot = count as f64;
            }
        }
        vector
    }

    /// Per-document count for every vocabulary term in current index order,
    /// 0 where the document does not contain the term.
    pub fn to_count_vector(&self, document: &str) -> Vec<u64> {
        let mut within_doc: HashMap<String, u64> = HashMap::new();
        for term in segment(document, &self.options) {
            *within_doc.entry(term).or_insert(0) += 1;
        }
        self.vocab
            .terms()
            .map(|term| within_doc.get(term).copied().unwrap_or(0))
            .collect()
    }

    /// Encodes a document per mode: character indices in char mode,
    /// bag-of-words pairs in word mode.
    pub fn encode(&self, document: &str) -> Encoded {
        if self.options.char_level {
            let mut buf = [0u8; 4];
            let indices = document
                .chars()
                .map(|c| self.vocab.index_of(c.encode_utf8(&mut buf)))
                .collect();
            Encoded::CharIndices(indices)
        } else {
            Encoded::BagOfWords(self.to_bag_of_words(document))
        }
    }

    /// Maps indices back to their terms, out-of-range indices to the
    /// sentinel term, joined without separators in char mode and with
    /// single spaces in word mode.
    pub fn decode(&self, indices: &[usize]) -> String {
        let terms: Vec<&str> = indices
            .iter()
            .map(|&index| self.vocab.term_at(index).unwrap_or(UNKNOWN_TERM))
            .collect();
        let separator = if self.options.char_level { "" } else { " " };
        terms.join(separator)
    }

    /// The live vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The options this vectorizer was constructed with.
    pub fn options(&self) -> &VectorizerOptions {
        &self.options
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(VectorizerOptions::default())
    }
}
