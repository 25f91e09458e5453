use crate::error::MatchError;
use crate::search::phrase::{find_phrase_occurrences_scored, DEFAULT_DEDUP_RADIUS_S};
use crate::search::similarity::best_ratio;
use crate::types::{join_words, Occurrence, Segment, Word};

/// Resolve the time range bounded by a start anchor and an end anchor.
///
/// Pairing is greedy: start occurrences are visited best-first and each is
/// matched with the best-ranked end occurrence that finishes after it starts.
/// The first such pair wins even if a lower-ranked start would give a better
/// combined score.
pub fn find_text_segment(
    words: &[Word],
    start_text: &str,
    end_text: &str,
    threshold: f64,
) -> Result<Option<Segment>, MatchError> {
    find_text_segment_scored(
        words,
        start_text,
        end_text,
        threshold,
        DEFAULT_DEDUP_RADIUS_S,
        best_ratio,
    )
}

pub fn find_text_segment_scored(
    words: &[Word],
    start_text: &str,
    end_text: &str,
    threshold: f64,
    dedup_radius_s: f64,
    score: impl Fn(&str, &str) -> f64,
) -> Result<Option<Segment>, MatchError> {
    let starts = find_phrase_occurrences_scored(words, start_text, threshold, dedup_radius_s, &score)?;
    let ends = find_phrase_occurrences_scored(words, end_text, threshold, dedup_radius_s, &score)?;
    if starts.is_empty() || ends.is_empty() {
        return Ok(None);
    }
    Ok(pair_anchors(words, &starts, &ends))
}

fn pair_anchors(words: &[Word], starts: &[Occurrence], ends: &[Occurrence]) -> Option<Segment> {
    for start in starts {
        for end in ends {
            if end.end_s > start.start_s {
                return Some(build_segment(words, start, end));
            }
        }
    }
    None
}

fn build_segment(words: &[Word], start: &Occurrence, end: &Occurrence) -> Segment {
    // Bounds come straight from the anchor words so the inclusive range
    // check stays in integer milliseconds.
    let lo_ms = words[start.first_word].start_ms;
    let hi_ms = words[end.last_word].end_ms;
    let text = join_words(
        words
            .iter()
            .filter(|w| w.start_ms >= lo_ms && w.start_ms <= hi_ms),
    );

    Segment {
        start_s: start.start_s,
        end_s: end.end_s,
        text,
        score: (start.score + end.score) / 2.0,
    }
}
