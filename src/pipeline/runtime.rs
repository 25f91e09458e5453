use serde::Serialize;

use crate::captions::{build_caption_windows, CaptionLayout, CaptionRenderer, CaptionStyleKind};
use crate::config::SearchConfig;
use crate::error::MatchError;
use crate::pipeline::matcher::PhraseMatcher;
use crate::pipeline::traits::SimilarityScorer;
use crate::transcript::{anchor_texts, truncate_query, ClipPlan};
use crate::types::{CaptionWindow, Occurrence, Segment, Word};

/// Result of a phrase lookup, including the query actually searched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseSearch {
    pub query: String,
    pub truncated: bool,
    pub occurrences: Vec<Occurrence>,
}

/// Result of resolving a passage through its start and end anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorSearch {
    pub start_text: String,
    pub end_text: String,
    pub segment: Option<Segment>,
}

pub struct TranscriptSearcher {
    config: SearchConfig,
    scorer: Box<dyn SimilarityScorer>,
}

pub(crate) struct TranscriptSearcherParts {
    pub config: SearchConfig,
    pub scorer: Box<dyn SimilarityScorer>,
}

impl TranscriptSearcher {
    pub(crate) fn from_parts(parts: TranscriptSearcherParts) -> Self {
        Self {
            config: parts.config,
            scorer: parts.scorer,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Matcher over this searcher's scorer and configured dedup radius.
    pub fn matcher(&self) -> PhraseMatcher<'_> {
        PhraseMatcher::new(self.scorer.as_ref()).with_dedup_radius(self.config.dedup_radius_s)
    }

    pub fn find_phrase(&self, words: &[Word], query: &str) -> Result<PhraseSearch, MatchError> {
        let (searched, truncated) = truncate_query(query, self.config.max_query_words);
        if truncated {
            tracing::warn!(
                max_words = self.config.max_query_words,
                query = %searched,
                "query truncated to its leading words"
            );
        }

        let occurrences = self
            .matcher()
            .find(words, &searched, self.config.similarity_threshold)?;
        tracing::debug!(
            query = %searched,
            matches = occurrences.len(),
            best_score = occurrences.first().map(|o| o.score),
            "phrase search finished"
        );

        Ok(PhraseSearch {
            query: searched,
            truncated,
            occurrences,
        })
    }

    pub fn find_segment_between(
        &self,
        words: &[Word],
        start_text: &str,
        end_text: &str,
    ) -> Result<Option<Segment>, MatchError> {
        let segment = self.matcher().find_segment(
            words,
            start_text,
            end_text,
            self.config.similarity_threshold,
        )?;
        tracing::debug!(
            start_text,
            end_text,
            found = segment.is_some(),
            "segment search finished"
        );
        Ok(segment)
    }

    /// Locate a passage by anchoring on its leading and trailing words.
    pub fn find_segment_for_text(
        &self,
        words: &[Word],
        full_text: &str,
    ) -> Result<AnchorSearch, MatchError> {
        let (start_text, end_text) = anchor_texts(full_text, self.config.max_query_words)?;
        let segment = self.find_segment_between(words, &start_text, &end_text)?;
        Ok(AnchorSearch {
            start_text,
            end_text,
            segment,
        })
    }

    /// Clip starting at `start_s`, ending at `end_s` or after the configured maximum duration.
    pub fn plan_clip(&self, words: &[Word], start_s: f64, end_s: f64) -> Result<ClipPlan, MatchError> {
        ClipPlan::for_range(words, start_s, end_s, self.config.clip_duration_s)
    }

    /// Clip spanning a phrase match, capped at the configured maximum duration.
    pub fn plan_occurrence_clip(
        &self,
        words: &[Word],
        occurrence: &Occurrence,
    ) -> Result<ClipPlan, MatchError> {
        self.plan_clip(words, occurrence.start_s, occurrence.end_s)
    }

    pub fn caption_windows(&self, plan: &ClipPlan) -> Result<Vec<CaptionWindow>, MatchError> {
        let windows = build_caption_windows(&plan.words, self.config.window_size)?;

        let layout = CaptionLayout::new(self.config.font_size, self.config.frame_width);
        for window in &windows {
            let width = layout.window_width(&window.words);
            if width > self.config.frame_width as f64 {
                tracing::warn!(
                    window = window.index,
                    width_px = width,
                    frame_width = self.config.frame_width,
                    "caption window wider than the frame"
                );
            }
        }
        Ok(windows)
    }

    pub fn renderer(&self, kind: CaptionStyleKind) -> CaptionRenderer {
        CaptionRenderer::from_config(kind, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::builder::TranscriptSearcherBuilder;

    fn searcher(config: SearchConfig) -> TranscriptSearcher {
        TranscriptSearcherBuilder::new(config)
            .build()
            .expect("valid config")
    }

    fn timeline(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let start = i as u64 * 1000;
                Word::new(*text, start, start + 800)
            })
            .collect()
    }

    #[test]
    fn searcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranscriptSearcher>();
    }

    #[test]
    fn find_phrase_truncates_long_queries() {
        let words = timeline(&["a", "b", "c", "d", "e", "f", "g"]);
        let config = SearchConfig {
            max_query_words: 3,
            ..SearchConfig::default()
        };
        let found = searcher(config).find_phrase(&words, "a b c d e").unwrap();
        assert!(found.truncated);
        assert_eq!(found.query, "a b c");
        assert_eq!(found.occurrences[0].text, "a b c");
        assert_eq!(found.occurrences[0].score, 100.0);
    }

    #[test]
    fn find_phrase_propagates_invalid_input() {
        let err = searcher(SearchConfig::default())
            .find_phrase(&[], "hello")
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn find_segment_for_text_uses_edge_anchors() {
        let words = timeline(&[
            "intro", "we", "choose", "to", "go", "to", "the", "moon", "in", "this", "decade",
            "outro",
        ]);
        let found = searcher(SearchConfig::default())
            .find_segment_for_text(&words, "we choose to go to the moon in this decade")
            .unwrap();
        assert_eq!(found.start_text, "we choose to go to");
        assert_eq!(found.end_text, "the moon in this decade");

        let segment = found.segment.expect("segment resolves");
        assert_eq!(segment.start_s, 1.0);
        assert_eq!(segment.end_s, 10.8);
        assert_eq!(segment.text, "we choose to go to the moon in this decade");
        assert_eq!(segment.score, 100.0);
    }

    #[test]
    fn find_segment_between_returns_none_when_end_precedes_start() {
        let words = timeline(&["red", "fox", "jumps", "high"]);
        let segment = searcher(SearchConfig::default())
            .find_segment_between(&words, "jumps high", "red fox")
            .unwrap();
        assert!(segment.is_none());
    }

    #[test]
    fn plan_and_windows_follow_config() {
        let words = timeline(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let config = SearchConfig {
            clip_duration_s: 4.0,
            window_size: 2,
            ..SearchConfig::default()
        };
        let searcher = searcher(config);
        let plan = searcher.plan_clip(&words, 1.0, 7.8).unwrap();
        assert_eq!(plan.duration_s, 4.0);
        // words starting in [1000, 5000]
        assert_eq!(plan.words.len(), 5);
        assert_eq!(plan.words.last().unwrap(), &Word::new("f", 5000, 5000));

        let windows = searcher.caption_windows(&plan).unwrap();
        let sizes: Vec<usize> = windows.iter().map(|w| w.words.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(windows[0].span.start_ms, 0);
    }

    #[test]
    fn occurrence_clip_ends_with_the_match() {
        let words = timeline(&["red", "fox", "jumps", "high", "over", "the", "fence"]);
        let searcher = searcher(SearchConfig::default());
        let found = searcher.find_phrase(&words, "fox jumps").unwrap();
        let occurrence = &found.occurrences[0];
        assert_eq!((occurrence.start_s, occurrence.end_s), (1.0, 2.8));

        let plan = searcher.plan_occurrence_clip(&words, occurrence).unwrap();
        assert_eq!(plan.start_s, 1.0);
        assert!((plan.duration_s - 1.8).abs() < 1e-9);
        let texts: Vec<&str> = plan.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["fox", "jumps"]);
    }

    #[test]
    fn occurrence_clip_is_capped_by_clip_duration() {
        let words = timeline(&["red", "fox", "jumps", "high", "over", "the", "fence"]);
        let config = SearchConfig {
            clip_duration_s: 1.5,
            ..SearchConfig::default()
        };
        let searcher = searcher(config);
        let found = searcher.find_phrase(&words, "jumps high over").unwrap();
        let plan = searcher
            .plan_occurrence_clip(&words, &found.occurrences[0])
            .unwrap();
        assert_eq!(plan.start_s, 2.0);
        assert_eq!(plan.duration_s, 1.5);
        assert_eq!(plan.words.len(), 2);
    }

    #[test]
    fn matcher_uses_configured_dedup_radius() {
        let config = SearchConfig {
            dedup_radius_s: 2.0,
            ..SearchConfig::default()
        };
        let searcher = searcher(config);
        assert_eq!(searcher.matcher().dedup_radius_s(), 2.0);
        assert_eq!(searcher.matcher().scorer_name(), "multi_metric");

        let words = timeline(&["go", "go", "stop", "go"]);
        let found = searcher.find_phrase(&words, "go").unwrap();
        let starts: Vec<f64> = found.occurrences.iter().map(|o| o.start_s).collect();
        assert_eq!(starts, vec![0.0, 3.0]);
    }

    #[test]
    fn renderer_picks_requested_style() {
        let searcher = searcher(SearchConfig::default());
        assert_eq!(
            searcher.renderer(CaptionStyleKind::PhraseWindow).kind(),
            CaptionStyleKind::PhraseWindow
        );
        assert_eq!(
            searcher.renderer(CaptionStyleKind::DrawText).file_extension(),
            "filter"
        );
    }
}
