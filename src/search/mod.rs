pub mod phrase;
pub mod segment;
pub mod similarity;
#[cfg(test)]
mod tests;

pub use phrase::{find_phrase_occurrences, find_phrase_occurrences_scored, DEFAULT_DEDUP_RADIUS_S};
pub use segment::{find_text_segment, find_text_segment_scored};
