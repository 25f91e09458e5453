use crate::pipeline::traits::SimilarityScorer;
use crate::search::similarity::{best_ratio, sorted_tokens};

/// Best of plain, partial and token-sort ratio.
pub struct MultiMetricScorer;

impl SimilarityScorer for MultiMetricScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        best_ratio(query, candidate)
    }

    fn name(&self) -> &'static str {
        "multi_metric"
    }
}

/// Normalized Levenshtein similarity, also tried on sorted tokens.
///
/// Stricter than [`MultiMetricScorer`]: there is no partial-window pass, so a
/// short query does not match well inside a longer candidate.
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let direct = strsim::normalized_levenshtein(query, candidate);
        let sorted = strsim::normalized_levenshtein(&sorted_tokens(query), &sorted_tokens(candidate));
        direct.max(sorted) * 100.0
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}
