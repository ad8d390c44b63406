/// Split lowercased text into paragraphs on blank lines.
///
/// Runs of three or more newlines collapse to a single blank line first, and
/// newlines inside a paragraph are flattened to spaces.
pub fn split_by_paragraphs(data: &str) -> Vec<String> {
    let mut processed = data.to_lowercase();
    while processed.contains("\n\n\n") {
        processed = processed.replace("\n\n\n", "\n\n");
    }
    processed
        .split("\n\n")
        .map(|paragraph| paragraph.replace('\n', " "))
        .collect()
}
