use std::path::Path;

use serde::Deserialize;

use crate::error::MatchError;

/// How word times are derived from caption entries that only carry an entry-level span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingEstimate {
    /// Spread the entry duration evenly over its words.
    WordLevel,
    /// Midpoint between the entry boundary and the evenly spread word boundary.
    /// Neighbouring words of one entry overlap.
    #[default]
    Averaged,
}

impl TimingEstimate {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WordLevel => "word_level",
            Self::Averaged => "averaged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub similarity_threshold: f64,
    pub max_query_words: usize,
    pub dedup_radius_s: f64,
    pub window_size: usize,
    pub clip_duration_s: f64,
    pub timing_estimate: TimingEstimate,
    pub font_size: u32,
    pub margin_v: u32,
    pub frame_width: u32,
}

impl SearchConfig {
    pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 80.0;
    pub const DEFAULT_MAX_QUERY_WORDS: usize = 5;
    pub const DEFAULT_DEDUP_RADIUS_S: f64 = 0.5;
    pub const DEFAULT_WINDOW_SIZE: usize = 5;
    pub const DEFAULT_CLIP_DURATION_S: f64 = 30.0;

    pub fn load(path: &Path) -> Result<Self, MatchError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| MatchError::io("read search config", e))?;
        serde_json::from_str(&data).map_err(|e| MatchError::json("parse search config", e))
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        validate_threshold(self.similarity_threshold)?;
        if self.max_query_words == 0 {
            return Err(MatchError::invalid_input("max_query_words must be >= 1"));
        }
        if self.window_size == 0 {
            return Err(MatchError::invalid_input("window_size must be >= 1"));
        }
        if !(self.dedup_radius_s >= 0.0) {
            return Err(MatchError::invalid_input(format!(
                "dedup_radius_s must be a non-negative number, got {}",
                self.dedup_radius_s
            )));
        }
        if !(self.clip_duration_s >= 0.0) {
            return Err(MatchError::invalid_input(format!(
                "clip_duration_s must be a non-negative number, got {}",
                self.clip_duration_s
            )));
        }
        if self.font_size == 0 {
            return Err(MatchError::invalid_input("font_size must be >= 1"));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: Self::DEFAULT_SIMILARITY_THRESHOLD,
            max_query_words: Self::DEFAULT_MAX_QUERY_WORDS,
            dedup_radius_s: Self::DEFAULT_DEDUP_RADIUS_S,
            window_size: Self::DEFAULT_WINDOW_SIZE,
            clip_duration_s: Self::DEFAULT_CLIP_DURATION_S,
            timing_estimate: TimingEstimate::default(),
            font_size: 48,
            margin_v: 250,
            frame_width: 1920,
        }
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), MatchError> {
    if (0.0..=100.0).contains(&threshold) {
        Ok(())
    } else {
        Err(MatchError::invalid_input(format!(
            "similarity threshold must be within [0, 100], got {threshold}"
        )))
    }
}
