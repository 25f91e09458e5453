use std::fmt::Write as _;

use crate::error::MatchError;
use crate::types::Word;

/// Parse `HH:MM:SS,mmm` into milliseconds. Hours may have any number of digits.
pub fn parse_srt_timestamp(raw: &str) -> Result<u64, MatchError> {
    let raw = raw.trim();
    let invalid = |what: &str| {
        MatchError::parse("parse SRT timestamp", format!("{what} in '{raw}'"))
    };

    let (hms, millis) = raw.split_once(',').ok_or_else(|| invalid("missing ',mmm'"))?;
    let mut parts = hms.split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid("expected H:MM:SS"));
    };

    let field = |value: &str, name: &str| -> Result<u64, MatchError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(&format!("bad {name} field")));
        }
        value.parse::<u64>().map_err(|_| invalid(&format!("bad {name} field")))
    };
    let hours = field(h, "hours")?;
    let minutes = field(m, "minutes")?;
    let seconds = field(s, "seconds")?;
    let millis = field(millis, "milliseconds")?;
    if minutes >= 60 || seconds >= 60 || millis >= 1000 {
        return Err(invalid("field out of range"));
    }

    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes * 60 + seconds))
        .and_then(|total| total.checked_mul(1000))
        .and_then(|total| total.checked_add(millis))
        .ok_or_else(|| invalid("field out of range"))
}

pub fn format_srt_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1000) % 60;
    let millis = ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Read SRT blocks as one word per cue.
///
/// Parsing is lenient: blank lines and blocks whose index or timing line do
/// not parse are skipped, and only the first text line of a block is used.
pub fn parse_srt(content: &str) -> Vec<Word> {
    let lines: Vec<&str> = content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .collect();

    let mut words = Vec::new();
    let mut i = 0usize;
    while i < lines.len() {
        let line = lines[i];
        if line.is_empty() || line.parse::<u64>().is_err() {
            i += 1;
            continue;
        }
        if i + 2 >= lines.len() {
            break;
        }

        let Some((start, end)) = lines[i + 1].split_once(" --> ") else {
            i += 1;
            continue;
        };
        let (Ok(start_ms), Ok(end_ms)) = (parse_srt_timestamp(start), parse_srt_timestamp(end))
        else {
            i += 1;
            continue;
        };

        words.push(Word::new(lines[i + 2], start_ms, end_ms));
        i += 3;
    }
    words
}

/// One cue per word, numbered from 1.
pub fn write_srt(words: &[Word]) -> String {
    let mut out = String::new();
    for (idx, word) in words.iter().enumerate() {
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
            format_srt_timestamp(word.start_ms),
            format_srt_timestamp(word.end_ms),
            word.text
        );
    }
    out
}
