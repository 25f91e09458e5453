use crate::types::Word;

const CHAR_WIDTH_FACTOR: f64 = 0.45;
const WORD_SPACING_FACTOR: f64 = 0.36;

/// Horizontal placement estimate for one caption window.
///
/// Widths are a per-character approximation; no font metrics are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionLayout {
    pub font_size: u32,
    pub frame_width: u32,
}

impl CaptionLayout {
    pub fn new(font_size: u32, frame_width: u32) -> Self {
        Self {
            font_size,
            frame_width,
        }
    }

    pub fn word_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_size as f64 * CHAR_WIDTH_FACTOR
    }

    pub fn word_spacing(&self) -> f64 {
        self.font_size as f64 * WORD_SPACING_FACTOR
    }

    pub fn window_width(&self, words: &[Word]) -> f64 {
        let glyphs: f64 = words.iter().map(|w| self.word_width(&w.text)).sum();
        glyphs + words.len().saturating_sub(1) as f64 * self.word_spacing()
    }

    /// Left edge of every word with the window centered on the frame.
    pub fn word_positions(&self, words: &[Word]) -> Vec<f64> {
        let mut x = (self.frame_width as f64 - self.window_width(words)) / 2.0;
        let mut positions = Vec::with_capacity(words.len());
        for word in words {
            positions.push(x);
            x += self.word_width(&word.text) + self.word_spacing();
        }
        positions
    }
}

/// Characters preceding each word, counting one separating space per word.
pub fn chars_before(words: &[Word]) -> Vec<usize> {
    let mut offset = 0usize;
    words
        .iter()
        .map(|word| {
            let here = offset;
            offset += word.text.chars().count() + 1;
            here
        })
        .collect()
}

/// Total characters of the window text joined with single spaces.
pub fn window_chars(words: &[Word]) -> usize {
    let glyphs: usize = words.iter().map(|w| w.text.chars().count()).sum();
    glyphs + words.len().saturating_sub(1)
}
