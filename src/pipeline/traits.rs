/// Similarity between a lower-cased query and a lower-cased candidate, on a 0–100 scale.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, query: &str, candidate: &str) -> f64;

    fn name(&self) -> &'static str;
}
