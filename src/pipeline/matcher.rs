use crate::error::MatchError;
use crate::pipeline::defaults::MultiMetricScorer;
use crate::pipeline::traits::SimilarityScorer;
use crate::search::{find_phrase_occurrences_scored, find_text_segment_scored, DEFAULT_DEDUP_RADIUS_S};
use crate::types::{Occurrence, Segment, Word};

/// Phrase matching and anchor resolution over a borrowed scorer.
///
/// [`crate::find_phrase_occurrences`] and [`crate::find_text_segment`] behave
/// like `PhraseMatcher::default()`.
#[derive(Clone, Copy)]
pub struct PhraseMatcher<'a> {
    scorer: &'a dyn SimilarityScorer,
    dedup_radius_s: f64,
}

impl Default for PhraseMatcher<'static> {
    fn default() -> Self {
        Self::new(&MultiMetricScorer)
    }
}

impl<'a> PhraseMatcher<'a> {
    pub fn new(scorer: &'a dyn SimilarityScorer) -> Self {
        Self {
            scorer,
            dedup_radius_s: DEFAULT_DEDUP_RADIUS_S,
        }
    }

    /// Occurrences whose starts are closer than `radius_s` collapse onto the best one.
    pub fn with_dedup_radius(mut self, radius_s: f64) -> Self {
        self.dedup_radius_s = radius_s;
        self
    }

    pub fn dedup_radius_s(&self) -> f64 {
        self.dedup_radius_s
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn find(
        &self,
        words: &[Word],
        query: &str,
        threshold: f64,
    ) -> Result<Vec<Occurrence>, MatchError> {
        find_phrase_occurrences_scored(words, query, threshold, self.dedup_radius_s, |q, c| {
            self.scorer.score(q, c)
        })
    }

    pub fn find_segment(
        &self,
        words: &[Word],
        start_text: &str,
        end_text: &str,
        threshold: f64,
    ) -> Result<Option<Segment>, MatchError> {
        find_text_segment_scored(
            words,
            start_text,
            end_text,
            threshold,
            self.dedup_radius_s,
            |q, c| self.scorer.score(q, c),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{find_phrase_occurrences, find_text_segment};

    struct ExactScorer;

    impl SimilarityScorer for ExactScorer {
        fn score(&self, query: &str, candidate: &str) -> f64 {
            if query == candidate {
                100.0
            } else {
                0.0
            }
        }

        fn name(&self) -> &'static str {
            "exact"
        }
    }

    fn repeated_go() -> Vec<Word> {
        vec![
            Word::new("go", 0, 200),
            Word::new("go", 300, 500),
            Word::new("went", 1000, 1200),
            Word::new("go", 2000, 2200),
        ]
    }

    #[test]
    fn default_matches_free_functions() {
        let words = vec![
            Word::new("the", 0, 100),
            Word::new("quick", 100, 400),
            Word::new("brwn", 400, 700),
            Word::new("fox", 700, 900),
        ];
        let matcher = PhraseMatcher::default();
        assert_eq!(matcher.scorer_name(), "multi_metric");
        assert_eq!(matcher.dedup_radius_s(), DEFAULT_DEDUP_RADIUS_S);
        assert_eq!(
            matcher.find(&words, "quick brown", 80.0).unwrap(),
            find_phrase_occurrences(&words, "quick brown", 80.0).unwrap()
        );
        assert_eq!(
            matcher.find_segment(&words, "the quick", "brown fox", 80.0).unwrap(),
            find_text_segment(&words, "the quick", "brown fox", 80.0).unwrap()
        );
    }

    #[test]
    fn dedup_radius_controls_suppression() {
        let words = repeated_go();
        let matcher = PhraseMatcher::new(&ExactScorer);

        let starts: Vec<f64> = matcher
            .find(&words, "go", 100.0)
            .unwrap()
            .iter()
            .map(|o| o.start_s)
            .collect();
        assert_eq!(starts, vec![0.0, 2.0]);

        let starts: Vec<f64> = matcher
            .with_dedup_radius(0.1)
            .find(&words, "go", 100.0)
            .unwrap()
            .iter()
            .map(|o| o.start_s)
            .collect();
        assert_eq!(starts, vec![0.0, 0.3, 2.0]);
    }

    #[test]
    fn find_segment_uses_the_borrowed_scorer() {
        let words = repeated_go();
        let matcher = PhraseMatcher::new(&ExactScorer);
        let segment = matcher
            .find_segment(&words, "went", "go", 100.0)
            .unwrap()
            .expect("end anchor after start");
        assert_eq!(segment.start_s, 1.0);
        assert_eq!(segment.end_s, 2.2);
        assert_eq!(segment.text, "went go");
        assert_eq!(segment.score, 100.0);

        // "gone" is only close under a fuzzy scorer.
        assert!(matcher.find_segment(&words, "went", "gone", 80.0).unwrap().is_none());
    }

    #[test]
    fn find_propagates_invalid_input() {
        let matcher = PhraseMatcher::new(&ExactScorer);
        assert!(matcher.find(&[], "go", 80.0).unwrap_err().is_invalid_input());
        assert!(matcher
            .find(&repeated_go(), "   ", 80.0)
            .unwrap_err()
            .is_invalid_input());
    }
}
