use crate::error::MatchError;

/// Keep at most `max_words` leading tokens of `query`.
///
/// Returns the shortened query and whether anything was dropped.
pub fn truncate_query(query: &str, max_words: usize) -> (String, bool) {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.len() <= max_words {
        return (tokens.join(" "), false);
    }
    (tokens[..max_words].join(" "), true)
}

/// Split a passage into a start anchor and an end anchor.
///
/// Long passages anchor on their first and last `max_words` tokens. Short
/// ones are halved so the two anchors never overlap.
pub fn anchor_texts(full_text: &str, max_words: usize) -> Result<(String, String), MatchError> {
    if max_words == 0 {
        return Err(MatchError::invalid_input("max_words must be >= 1"));
    }
    let tokens: Vec<&str> = full_text.split_whitespace().collect();
    let n = tokens.len();
    if n < 2 {
        return Err(MatchError::invalid_input(format!(
            "need at least two words to anchor a segment, got {n}"
        )));
    }

    let (start_len, end_len) = if n <= 2 * max_words {
        let mid = n / 2;
        (max_words.min(mid), max_words.min(n - mid))
    } else {
        (max_words, max_words)
    };

    Ok((
        tokens[..start_len].join(" "),
        tokens[n - end_len..].join(" "),
    ))
}
