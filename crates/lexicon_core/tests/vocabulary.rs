use lexicon_core::{Vectorizer, VectorizerOptions, UNKNOWN_INDEX, UNKNOWN_TERM};
use pretty_assertions::assert_eq;

fn lowercase_vectorizer() -> Vectorizer {
    Vectorizer::new(VectorizerOptions {
        ignore_case: true,
        ..Default::default()
    })
}

#[test]
fn new_vocabulary_holds_only_the_sentinel() {
    let vectorizer = Vectorizer::default();
    let vocab = vectorizer.vocab();
    assert_eq!(vocab.len(), 1);
    assert_eq!(vocab.term_at(UNKNOWN_INDEX), Some(UNKNOWN_TERM));
    assert_eq!(vocab.count_of(UNKNOWN_TERM), 1);
}

#[test]
fn indices_follow_first_occurrence_order() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("the cat sat. The CAT ran!");

    let vocab = vectorizer.vocab();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec![UNKNOWN_TERM, "the", "cat", "sat", "ran"]);
    assert_eq!(vocab.index_of("the"), 1);
    assert_eq!(vocab.index_of("ran"), 4);
}

#[test]
fn mixed_case_document_normalizes_into_counts() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("the cat sat. The CAT ran!");

    let vocab = vectorizer.vocab();
    assert_eq!(vocab.count_of("the"), 2);
    assert_eq!(vocab.count_of("cat"), 2);
    assert_eq!(vocab.count_of("sat"), 1);
    assert_eq!(vocab.count_of("ran"), 1);
}

#[test]
fn reingesting_doubles_counts_without_adding_terms() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("green tea, black tea");
    let size_after_first = vectorizer.vocab().len();

    vectorizer.ingest("green tea, black tea");
    let vocab = vectorizer.vocab();
    assert_eq!(vocab.len(), size_after_first);
    assert_eq!(vocab.count_of("tea"), 4);
    assert_eq!(vocab.count_of("green"), 2);
}

#[test]
fn ingest_does_not_move_existing_indices() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("alpha beta");
    let alpha = vectorizer.vocab().index_of("alpha");
    let beta = vectorizer.vocab().index_of("beta");

    vectorizer.ingest("gamma alpha");
    assert_eq!(vectorizer.vocab().index_of("alpha"), alpha);
    assert_eq!(vectorizer.vocab().index_of("beta"), beta);
    assert_eq!(vectorizer.vocab().index_of("gamma"), 3);
}

#[test]
fn trim_removes_rare_terms_and_reindexes_survivors() {
    lexicon_logging::initialize_for_tests();
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("the cat sat. The CAT ran!");

    let report = vectorizer.trim(Some(2), None);
    assert_eq!(report.before, 5);
    assert_eq!(report.after, 3);

    let vocab = vectorizer.vocab();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec![UNKNOWN_TERM, "the", "cat"]);
    assert_eq!(vocab.index_of("the"), 1);
    assert_eq!(vocab.index_of("cat"), 2);
    // Trimmed terms now degrade to the sentinel.
    assert_eq!(vocab.index_of("sat"), UNKNOWN_INDEX);
}

#[test]
fn trim_max_bound_removes_frequent_terms() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("spam spam spam ham eggs");

    vectorizer.trim(None, Some(2));
    let terms: Vec<&str> = vectorizer.vocab().terms().collect();
    assert_eq!(terms, vec![UNKNOWN_TERM, "ham", "eggs"]);
}

#[test]
fn trim_bounds_are_inclusive() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("a a b b b c");

    vectorizer.trim(Some(2), Some(3));
    let terms: Vec<&str> = vectorizer.vocab().terms().collect();
    assert_eq!(terms, vec![UNKNOWN_TERM, "a", "b"]);
}

#[test]
fn trim_without_bounds_only_reports() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("one two three");
    let before: Vec<String> = vectorizer.vocab().terms().map(String::from).collect();

    let report = vectorizer.trim(None, None);
    assert_eq!(report.before, report.after);
    let after: Vec<String> = vectorizer.vocab().terms().map(String::from).collect();
    assert_eq!(before, after);
}

#[test]
fn trim_never_removes_the_sentinel() {
    let mut vectorizer = lowercase_vectorizer();
    vectorizer.ingest("word");

    // The sentinel's count is 1; a min bound above it must still keep it.
    vectorizer.trim(Some(10), None);
    let vocab = vectorizer.vocab();
    assert_eq!(vocab.len(), 1);
    assert_eq!(vocab.term_at(UNKNOWN_INDEX), Some(UNKNOWN_TERM));
}

#[test]
fn char_level_ingest_counts_raw_characters() {
    let mut vectorizer = Vectorizer::new(VectorizerOptions {
        char_level: true,
        ..Default::default()
    });
    vectorizer.ingest("Ab!a");

    let vocab = vectorizer.vocab();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec![UNKNOWN_TERM, "A", "b", "!", "a"]);
    assert_eq!(vocab.count_of("A"), 1);
    assert_eq!(vocab.count_of("a"), 1);
}
