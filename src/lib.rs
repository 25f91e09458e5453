pub mod captions;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod transcript;
pub mod types;

pub use captions::{build_caption_windows, caption_schedule, CaptionRenderer, CaptionStyleKind};
pub use config::{SearchConfig, TimingEstimate};
pub use error::MatchError;
pub use pipeline::builder::TranscriptSearcherBuilder;
pub use pipeline::defaults::{LevenshteinScorer, MultiMetricScorer};
pub use pipeline::matcher::PhraseMatcher;
pub use pipeline::runtime::{AnchorSearch, PhraseSearch, TranscriptSearcher};
pub use pipeline::traits::SimilarityScorer;
pub use report::{format_time, ClipReport, QueryReport, ReportMeta, SearchReport};
pub use search::{find_phrase_occurrences, find_text_segment};
pub use transcript::{load_entries, load_words, write_srt, ClipPlan};
pub use types::{CaptionCue, CaptionWindow, CueInterval, Occurrence, Segment, TranscriptEntry, Word};
