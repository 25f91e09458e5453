use crate::config::SearchConfig;
use crate::error::MatchError;
use crate::pipeline::defaults::MultiMetricScorer;
use crate::pipeline::runtime::{TranscriptSearcher, TranscriptSearcherParts};
use crate::pipeline::traits::SimilarityScorer;

pub struct TranscriptSearcherBuilder {
    config: SearchConfig,
    scorer: Option<Box<dyn SimilarityScorer>>,
}

impl TranscriptSearcherBuilder {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: None,
        }
    }

    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn build(self) -> Result<TranscriptSearcher, MatchError> {
        self.config.validate()?;

        let scorer = self
            .scorer
            .unwrap_or_else(|| Box::new(MultiMetricScorer));
        tracing::debug!(
            scorer = scorer.name(),
            threshold = self.config.similarity_threshold,
            window_size = self.config.window_size,
            "transcript searcher ready"
        );

        Ok(TranscriptSearcher::from_parts(TranscriptSearcherParts {
            config: self.config,
            scorer,
        }))
    }
}
