use crate::config::TimingEstimate;
use crate::types::{TranscriptEntry, Word};

/// Expand caption entries into a word timeline.
///
/// Each entry's duration is split evenly across its whitespace tokens. With
/// [`TimingEstimate::Averaged`] every word boundary is pulled halfway towards
/// the matching entry boundary. Adjacent words of one entry then overlap:
/// word `i` ends after word `i + 1` starts. Starts stay non-decreasing and
/// every word stays inside its entry, so ranges built from them (matches,
/// segments, clips) only widen towards the entry bounds. Use
/// [`TimingEstimate::WordLevel`] for a non-overlapping timeline.
pub fn words_from_entries(entries: &[TranscriptEntry], estimate: TimingEstimate) -> Vec<Word> {
    let mut words = Vec::new();
    for entry in entries {
        let tokens: Vec<&str> = entry.text.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let entry_start = entry.start.max(0.0);
        let entry_end = entry_start + entry.duration.max(0.0);
        let per_word = (entry_end - entry_start) / tokens.len() as f64;

        for (i, token) in tokens.iter().enumerate() {
            let word_start = entry_start + i as f64 * per_word;
            let word_end = word_start + per_word;
            let (start, end) = match estimate {
                TimingEstimate::WordLevel => (word_start, word_end),
                TimingEstimate::Averaged => {
                    ((entry_start + word_start) / 2.0, (word_end + entry_end) / 2.0)
                }
            };
            let start_ms = seconds_to_ms(start);
            let end_ms = seconds_to_ms(end).max(start_ms);
            words.push(Word::new(*token, start_ms, end_ms));
        }
    }
    words
}

fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds * 1000.0).round() as u64
}
