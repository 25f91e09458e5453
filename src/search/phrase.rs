use crate::config::validate_threshold;
use crate::error::MatchError;
use crate::search::similarity::best_ratio;
use crate::types::{join_words, Occurrence, Word};

/// Occurrences starting closer than this are treated as the same hit.
pub const DEFAULT_DEDUP_RADIUS_S: f64 = 0.5;

/// Find approximate occurrences of `query` in a word timeline.
///
/// Every run of `k` consecutive words (where `k` is the number of query tokens)
/// is scored with [`best_ratio`] against the lower-cased query. Hits at or
/// above `threshold` are returned best-first, with near-duplicate start times
/// collapsed onto their highest-scoring representative.
pub fn find_phrase_occurrences(
    words: &[Word],
    query: &str,
    threshold: f64,
) -> Result<Vec<Occurrence>, MatchError> {
    find_phrase_occurrences_scored(words, query, threshold, DEFAULT_DEDUP_RADIUS_S, best_ratio)
}

/// [`find_phrase_occurrences`] with a caller-supplied similarity measure and dedup radius.
///
/// `score` receives the lower-cased query and the lower-cased candidate text
/// and must return a value on the 0–100 scale.
pub fn find_phrase_occurrences_scored(
    words: &[Word],
    query: &str,
    threshold: f64,
    dedup_radius_s: f64,
    score: impl Fn(&str, &str) -> f64,
) -> Result<Vec<Occurrence>, MatchError> {
    if words.is_empty() {
        return Err(MatchError::invalid_input("word timeline is empty"));
    }
    let query = query.to_lowercase();
    let k = query.split_whitespace().count();
    if k == 0 {
        return Err(MatchError::invalid_input("query has no words"));
    }
    validate_threshold(threshold)?;

    if words.len() < k {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for (i, window) in words.windows(k).enumerate() {
        let text = join_words(window);
        let candidate = text.to_lowercase();
        let similarity = score(query.as_str(), candidate.as_str());
        if similarity >= threshold {
            candidates.push(Occurrence {
                start_s: window[0].start_ms as f64 / 1000.0,
                end_s: window[k - 1].end_ms as f64 / 1000.0,
                text,
                score: similarity,
                first_word: i,
                last_word: i + k - 1,
            });
        }
    }

    // Stable: equal scores keep timeline order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(suppress_near_duplicates(candidates, dedup_radius_s))
}

/// Greedy suppression over a score-descending list: drop a candidate when an
/// already kept one starts within `radius_s` and scores at least as high.
pub(crate) fn suppress_near_duplicates(
    sorted: Vec<Occurrence>,
    radius_s: f64,
) -> Vec<Occurrence> {
    let mut kept: Vec<Occurrence> = Vec::with_capacity(sorted.len());
    for candidate in sorted {
        let dominated = kept.iter().any(|existing| {
            (existing.start_s - candidate.start_s).abs() < radius_s
                && existing.score >= candidate.score
        });
        if !dominated {
            kept.push(candidate);
        }
    }
    kept
}
