pub mod clip;
pub mod entries;
pub mod query;
pub mod srt;

use std::path::Path;

use serde::Deserialize;

use crate::config::TimingEstimate;
use crate::error::MatchError;
use crate::types::{TranscriptEntry, Word};

pub use clip::{clip_words, ClipPlan};
pub use entries::words_from_entries;
pub use query::{anchor_texts, truncate_query};
pub use srt::{format_srt_timestamp, parse_srt, parse_srt_timestamp, write_srt};

#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    List(Vec<Word>),
    Wrapped { words: Vec<Word> },
}

/// Load a word timeline from an `.srt` file or a JSON word list.
///
/// JSON may be a bare array of words or an object with a `words` array.
pub fn load_words(path: &Path) -> Result<Vec<Word>, MatchError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| MatchError::io("read transcript", e))?;

    let is_srt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("srt"));
    let words = if is_srt {
        parse_srt(&data)
    } else {
        match serde_json::from_str::<WordFile>(&data)
            .map_err(|e| MatchError::json("parse transcript words", e))?
        {
            WordFile::List(words) | WordFile::Wrapped { words } => words,
        }
    };

    tracing::debug!(
        path = %path.display(),
        format = if is_srt { "srt" } else { "json" },
        words = words.len(),
        "loaded word timeline"
    );
    Ok(words)
}

/// Load caption entries from JSON and expand them into words.
pub fn load_entries(path: &Path, estimate: TimingEstimate) -> Result<Vec<Word>, MatchError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| MatchError::io("read transcript entries", e))?;
    let entries: Vec<TranscriptEntry> =
        serde_json::from_str(&data).map_err(|e| MatchError::json("parse transcript entries", e))?;
    let words = words_from_entries(&entries, estimate);

    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        words = words.len(),
        timing = estimate.as_str(),
        "expanded caption entries"
    );
    Ok(words)
}
