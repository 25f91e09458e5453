use serde::Serialize;

use crate::transcript::ClipPlan;
use crate::types::{CaptionWindow, Occurrence, Segment};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub schema_version: u32,
    pub meta: ReportMeta,
    pub occurrences: Vec<Occurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub transcript_path: String,
    pub similarity_threshold: f64,
    pub window_size: usize,
    pub word_count: usize,
    pub scorer: String,
    pub query: QueryReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryReport {
    Phrase { text: String, truncated: bool },
    Segment { start_text: String, end_text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipReport {
    pub start_s: f64,
    pub duration_s: f64,
    pub start: String,
    pub word_count: usize,
    pub caption_window_count: usize,
    pub cue_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_style: Option<String>,
}

impl ClipReport {
    pub fn new(plan: &ClipPlan, windows: &[CaptionWindow], caption_style: Option<&str>) -> Self {
        Self {
            start_s: plan.start_s,
            duration_s: plan.duration_s,
            start: format_time(plan.start_s),
            word_count: plan.words.len(),
            caption_window_count: windows.len(),
            cue_count: windows.iter().map(|w| w.cues.len()).sum(),
            caption_style: caption_style.map(str::to_string),
        }
    }
}

/// Seconds rounded to the nearest whole second as `HH:MM:SS`; negatives clamp to zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}
