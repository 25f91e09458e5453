use serde::Serialize;

use crate::error::MatchError;
use crate::types::Word;

/// Words selected for one output clip, with absolute timeline bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipPlan {
    pub start_s: f64,
    pub duration_s: f64,
    pub words: Vec<Word>,
}

impl ClipPlan {
    /// Plan a clip over `[start_s, end_s]`, capped at `max_duration_s`.
    pub fn for_range(
        words: &[Word],
        start_s: f64,
        end_s: f64,
        max_duration_s: f64,
    ) -> Result<Self, MatchError> {
        if !(max_duration_s >= 0.0) {
            return Err(MatchError::invalid_input(format!(
                "clip duration must be a non-negative number, got {max_duration_s}"
            )));
        }
        let span = end_s - start_s;
        if !(span >= 0.0) {
            return Err(MatchError::invalid_input(format!(
                "clip range [{start_s}, {end_s}] is empty or reversed"
            )));
        }
        let duration_s = max_duration_s.min(span);
        Ok(Self {
            start_s,
            duration_s,
            words: clip_words(words, start_s, duration_s)?,
        })
    }

    pub fn end_s(&self) -> f64 {
        self.start_s + self.duration_s
    }

    pub fn duration_ms(&self) -> u64 {
        to_ms(self.duration_s)
    }
}

/// Words starting inside `[start_s, start_s + duration_s]`, ends clamped to the clip end.
pub fn clip_words(words: &[Word], start_s: f64, duration_s: f64) -> Result<Vec<Word>, MatchError> {
    if !(start_s >= 0.0) || !start_s.is_finite() {
        return Err(MatchError::invalid_input(format!(
            "clip start must be a non-negative number, got {start_s}"
        )));
    }
    if !(duration_s >= 0.0) || !duration_s.is_finite() {
        return Err(MatchError::invalid_input(format!(
            "clip duration must be a non-negative number, got {duration_s}"
        )));
    }
    let lo_ms = to_ms(start_s);
    let hi_ms = to_ms(start_s + duration_s);

    Ok(words
        .iter()
        .filter(|w| (lo_ms..=hi_ms).contains(&w.start_ms))
        .map(|w| Word::new(w.text.clone(), w.start_ms, w.end_ms.min(hi_ms)))
        .collect())
}

fn to_ms(seconds: f64) -> u64 {
    (seconds * 1000.0).round() as u64
}
