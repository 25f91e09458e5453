use std::fmt::Write as _;

use crate::captions::layout::{chars_before, window_chars, CaptionLayout};
use crate::config::SearchConfig;
use crate::types::CaptionWindow;

const ACTIVE_COLOUR: &str = "&H800080&";
const INACTIVE_COLOUR: &str = "&H808080&";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionStyleKind {
    WordBox,
    DrawText,
    PhraseWindow,
    Highlight,
}

impl CaptionStyleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WordBox => "word-box",
            Self::DrawText => "draw-text",
            Self::PhraseWindow => "phrase-window",
            Self::Highlight => "highlight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawTextStyle {
    pub font_size: u32,
    pub font_file: Option<String>,
}

/// Word labels placed at estimated pixel positions across the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    pub layout: CaptionLayout,
    pub font_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssStyle {
    pub font_size: u32,
    pub margin_v: u32,
    pub active_colour: String,
    pub inactive_colour: String,
}

/// Presentation strategies over the caption window schedule.
///
/// `WordBox`, `DrawText` and `Highlight` produce an ffmpeg filter chain (usable with
/// `-vf` or `-filter_script`); `PhraseWindow` produces an ASS document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionRenderer {
    /// Translucent box behind the active word, window text laid out by character count.
    WordBox(DrawTextStyle),
    /// One centered word at a time, shown for its own active interval.
    DrawText(DrawTextStyle),
    /// Whole window visible for its span, active word recoloured on a layer above.
    PhraseWindow(AssStyle),
    /// Every word of the window in white for the window span, the active word
    /// overdrawn in yellow at the same position.
    Highlight(HighlightStyle),
}

impl CaptionRenderer {
    pub fn from_config(kind: CaptionStyleKind, config: &SearchConfig) -> Self {
        let draw_text = || DrawTextStyle {
            font_size: config.font_size,
            font_file: None,
        };
        match kind {
            CaptionStyleKind::WordBox => Self::WordBox(draw_text()),
            CaptionStyleKind::DrawText => Self::DrawText(draw_text()),
            CaptionStyleKind::PhraseWindow => Self::PhraseWindow(AssStyle {
                font_size: config.font_size,
                margin_v: config.margin_v,
                active_colour: ACTIVE_COLOUR.to_string(),
                inactive_colour: INACTIVE_COLOUR.to_string(),
            }),
            CaptionStyleKind::Highlight => Self::Highlight(HighlightStyle {
                layout: CaptionLayout::new(config.font_size, config.frame_width),
                font_file: None,
            }),
        }
    }

    pub fn kind(&self) -> CaptionStyleKind {
        match self {
            Self::WordBox(_) => CaptionStyleKind::WordBox,
            Self::DrawText(_) => CaptionStyleKind::DrawText,
            Self::PhraseWindow(_) => CaptionStyleKind::PhraseWindow,
            Self::Highlight(_) => CaptionStyleKind::Highlight,
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::WordBox(_) | Self::DrawText(_) | Self::Highlight(_) => "filter",
            Self::PhraseWindow(_) => "ass",
        }
    }

    pub fn render(&self, windows: &[CaptionWindow], clip_duration_ms: u64) -> String {
        match self {
            Self::WordBox(style) => join_filters(render_word_boxes(style, windows)),
            Self::DrawText(style) => {
                join_filters(render_draw_text(style, windows, clip_duration_ms))
            }
            Self::PhraseWindow(style) => render_ass(style, windows),
            Self::Highlight(style) => join_filters(render_highlights(style, windows)),
        }
    }
}

fn render_word_boxes(style: &DrawTextStyle, windows: &[CaptionWindow]) -> Vec<String> {
    let char_px = style.font_size as f64 / 2.0;
    let mut filters = Vec::new();
    for (idx, window) in windows.iter().enumerate() {
        let total_px = window_chars(&window.words) as f64 * char_px;
        let offsets = chars_before(&window.words);
        // Window text stays up until the next window takes over.
        let shown_until_ms = windows
            .get(idx + 1)
            .map_or(window.span.end_ms, |next| next.span.start_ms);
        let text = window
            .words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        filters.push(format!(
            "drawtext=text='{}':fontsize={}{}:fontcolor=white:borderw=2:bordercolor=black:\
             x=(w-{})/2:y=h-h/4:enable='between(t,{},{})'",
            escape_drawtext(&text.to_uppercase()),
            style.font_size,
            font_file_option(style.font_file.as_deref()),
            total_px,
            secs(window.span.start_ms),
            secs(shown_until_ms),
        ));
        for cue in &window.cues {
            let word = &window.words[cue.word_index];
            let offset_px = offsets[cue.word_index] as f64 * char_px;
            filters.push(format!(
                "drawtext=text='{}':fontsize={}{}:x=(w-{})/2+{}:y=h-h/4:fontcolor=#00000000:\
                 box=1:boxcolor=purple@0.3:boxborderw=0:enable='between(t,{},{})'",
                escape_drawtext(&word.text.to_uppercase()),
                style.font_size,
                font_file_option(style.font_file.as_deref()),
                total_px,
                offset_px,
                secs(cue.active.start_ms),
                secs(cue.active.end_ms),
            ));
        }
    }
    filters
}

fn render_highlights(style: &HighlightStyle, windows: &[CaptionWindow]) -> Vec<String> {
    let font_size = style.layout.font_size;
    let font_file = font_file_option(style.font_file.as_deref());
    let mut filters = Vec::new();
    for window in windows {
        let positions = style.layout.word_positions(&window.words);
        for cue in &window.cues {
            let text = escape_drawtext(&window.words[cue.word_index].text.to_uppercase());
            let x = positions[cue.word_index] as i64;
            for (colour, interval) in [("white", &cue.chunk), ("yellow", &cue.active)] {
                filters.push(format!(
                    "drawtext=text='{}':fontsize={}{}:fontcolor={}:borderw=2:bordercolor=black:\
                     x={}:y=h-{}:enable='between(t,{},{})'",
                    text,
                    font_size,
                    font_file,
                    colour,
                    x,
                    font_size * 2,
                    secs(interval.start_ms),
                    secs(interval.end_ms),
                ));
            }
        }
    }
    filters
}

fn render_draw_text(
    style: &DrawTextStyle,
    windows: &[CaptionWindow],
    clip_duration_ms: u64,
) -> Vec<String> {
    let mut filters = Vec::new();
    for window in windows {
        for cue in &window.cues {
            if cue.active.start_ms >= clip_duration_ms {
                continue;
            }
            let word = &window.words[cue.word_index];
            let end_ms = cue.active.end_ms.min(clip_duration_ms);
            filters.push(format!(
                "drawtext=text='{}':fontsize={}{}:fontcolor=lime@1.0:borderw=3:\
                 bordercolor=black@1.0:x=(w-text_w)/2:y=h-h/4:enable='between(t,{},{})'",
                escape_drawtext(&word.text.to_uppercase()),
                style.font_size,
                font_file_option(style.font_file.as_deref()),
                secs(cue.active.start_ms),
                secs(end_ms),
            ));
        }
    }
    filters
}

fn render_ass(style: &AssStyle, windows: &[CaptionWindow]) -> String {
    let mut doc = ass_header(style.font_size, style.margin_v);
    for window in windows {
        let background = window
            .words
            .iter()
            .map(|w| escape_ass(&w.text))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            doc,
            "Dialogue: 0,{},{},Default,,0,0,0,,{{\\c{}}}{}",
            ass_time(window.span.start_ms),
            ass_time(window.span.end_ms),
            style.inactive_colour,
            background
        );

        for cue in &window.cues {
            let text = window
                .words
                .iter()
                .enumerate()
                .map(|(idx, w)| {
                    if idx == cue.word_index {
                        format!(
                            "{{\\c{}}}{}{{\\c{}}}",
                            style.active_colour,
                            escape_ass(&w.text),
                            style.inactive_colour
                        )
                    } else {
                        escape_ass(&w.text)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                doc,
                "Dialogue: 1,{},{},Default,,0,0,0,,{{\\c{}}}{}",
                ass_time(cue.active.start_ms),
                ass_time(cue.active.end_ms),
                style.inactive_colour,
                text
            );
        }
    }
    doc
}

fn ass_header(font_size: u32, margin_v: u32) -> String {
    format!(
        "[Script Info]\n\
         ScriptType: v4.00+\n\
         PlayResX: 1920\n\
         PlayResY: 1080\n\
         WrapStyle: 0\n\
         \n\
         [V4+ Styles]\n\
         Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
         Style: Default,Arial,{font_size},&HFFFFFF&,&H000000&,&H000000&,&H00000000,1,0,0,0,100,100,0,0,1,2,0,2,20,20,{margin_v},1\n\
         \n\
         [Events]\n\
         Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n"
    )
}

fn join_filters(filters: Vec<String>) -> String {
    if filters.is_empty() {
        // ffmpeg rejects an empty -vf chain.
        return "null".to_string();
    }
    filters.join(",")
}

fn font_file_option(path: Option<&str>) -> String {
    path.map(|path| format!(":fontfile='{path}'"))
        .unwrap_or_default()
}

/// Escape text for a single-quoted drawtext value.
pub fn escape_drawtext(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => out.push('\u{2019}'),
            '"' => out.push_str("\\\""),
            ',' => out.push_str("\\,"),
            ':' => out.push_str("\\:"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_ass(text: &str) -> String {
    text.to_uppercase()
        .replace('\\', "/")
        .replace('{', "(")
        .replace('}', ")")
}

/// `H:MM:SS.cc` as used by ASS event lines.
pub fn ass_time(ms: u64) -> String {
    let h = ms / 3_600_000;
    let m = (ms / 60_000) % 60;
    let s = (ms / 1000) % 60;
    let cs = (ms % 1000) / 10;
    format!("{h}:{m:02}:{s:02}.{cs:02}")
}

fn secs(ms: u64) -> String {
    format!("{:.3}", ms as f64 / 1000.0)
}
