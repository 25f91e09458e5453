use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    /// Millisecond interval is [start_ms, end_ms]; timelines are sorted by start_ms.
    #[serde(alias = "start")]
    pub start_ms: u64,
    #[serde(alias = "end")]
    pub end_ms: u64,
}

impl Word {
    pub fn new(text: impl Into<String>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    pub start_s: f64,
    pub end_s: f64,
    pub text: String,
    /// Similarity in [0, 100].
    pub score: f64,
    /// Index of the first matched word in the searched timeline.
    pub first_word: usize,
    /// Index of the last matched word (inclusive).
    pub last_word: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub start_s: f64,
    pub end_s: f64,
    pub text: String,
    pub score: f64,
}

impl Segment {
    pub fn duration_s(&self) -> f64 {
        self.end_s - self.start_s
    }
}

/// Closed millisecond interval relative to the clip start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CueInterval {
    pub start_ms: u64,
    pub end_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptionCue {
    /// Position of the highlighted word inside its window.
    pub word_index: usize,
    pub chunk_index: usize,
    pub active: CueInterval,
    pub chunk: CueInterval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionWindow {
    pub index: usize,
    pub words: Vec<Word>,
    pub span: CueInterval,
    pub cues: Vec<CaptionCue>,
}

impl CaptionWindow {
    pub fn text(&self) -> String {
        join_words(&self.words)
    }
}

/// Caption-track entry covering several words, timed in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
}

pub(crate) fn join_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> String {
    words
        .into_iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
