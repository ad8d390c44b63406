/// Tokenization and counting options, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VectorizerOptions {
    /// Terms excluded from word-level counting.
    pub stop_words: Vec<String>,
    /// Lowercase the document before tokenizing.
    pub ignore_case: bool,
    /// Tokenize by individual character instead of by word.
    pub char_level: bool,
}
