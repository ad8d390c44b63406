use crate::options::VectorizerOptions;

/// Replace every occurrence of the fixed punctuation set with a space.
///
/// The set is exactly `! _ . \n ' : ; , ?`; everything else passes through
/// unchanged.
pub fn strip_punctuation(document: &str) -> String {
    document
        .chars()
        .map(|c| if is_stripped(c) { ' ' } else { c })
        .collect()
}

fn is_stripped(c: char) -> bool {
    matches!(c, '!' | '_' | '.' | '\n' | '\'' | ':' | ';' | ',' | '?')
}

/// Word-level segmentation: optional lowercasing, punctuation stripping,
/// whitespace-run splitting with empty tokens discarded, stop-word removal.
pub fn segment(document: &str, options: &VectorizerOptions) -> Vec<String> {
    let lowered;
    let text = if options.ignore_case {
        lowered = document.to_lowercase();
        lowered.as_str()
    } else {
        document
    };

    strip_punctuation(text)
        .split_whitespace()
        .filter(|token| !options.stop_words.iter().any(|stop| stop == token))
        .map(ToOwned::to_owned)
        .collect()
}

/// Character-level tokens: the document's characters verbatim.
///
/// No lowercasing, punctuation stripping, or stop words apply here.
pub fn char_tokens(document: &str) -> Vec<String> {
    document.chars().map(String::from).collect()
}
