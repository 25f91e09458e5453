use crate::error::MatchError;
use crate::types::{CaptionCue, CaptionWindow, CueInterval, Word};

/// Split clip words into display windows of at most `window_size` words.
///
/// Times are made relative to the first word of the clip. Each word gets a
/// cue pairing its own active interval with the span of its window, during
/// which the rest of the window stays visible but inactive.
pub fn build_caption_windows(
    words: &[Word],
    window_size: usize,
) -> Result<Vec<CaptionWindow>, MatchError> {
    if window_size == 0 {
        return Err(MatchError::invalid_input("caption window size must be >= 1"));
    }
    let Some(first) = words.first() else {
        return Ok(Vec::new());
    };
    let clip_start_ms = first.start_ms;

    let windows = words
        .chunks(window_size)
        .enumerate()
        .map(|(chunk_index, chunk)| {
            let last = &chunk[chunk.len() - 1];
            let span = CueInterval {
                start_ms: relative_ms(chunk[0].start_ms, clip_start_ms),
                end_ms: relative_ms(last.end_ms, clip_start_ms),
            };
            let cues = chunk
                .iter()
                .enumerate()
                .map(|(word_index, word)| CaptionCue {
                    word_index,
                    chunk_index,
                    active: CueInterval {
                        start_ms: relative_ms(word.start_ms, clip_start_ms),
                        end_ms: relative_ms(word.end_ms, clip_start_ms),
                    },
                    chunk: span,
                })
                .collect();
            CaptionWindow {
                index: chunk_index,
                words: chunk.to_vec(),
                span,
                cues,
            }
        })
        .collect();

    Ok(windows)
}

/// All cues of all windows, in display order.
pub fn caption_schedule(windows: &[CaptionWindow]) -> Vec<CaptionCue> {
    windows
        .iter()
        .flat_map(|window| window.cues.iter().copied())
        .collect()
}

fn relative_ms(ms: u64, clip_start_ms: u64) -> u64 {
    ms.saturating_sub(clip_start_ms)
}
