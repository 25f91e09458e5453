pub mod layout;
pub mod render;
pub mod windows;

pub use layout::CaptionLayout;
pub use render::{AssStyle, CaptionRenderer, CaptionStyleKind, DrawTextStyle, HighlightStyle};
pub use windows::{build_caption_windows, caption_schedule};
