use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::seranking::KeywordSource;
use crate::seranking::types::KeywordMetrics;

/// Checks candidate keywords against the data API in fixed-size batches.
pub struct Verifier<'a, S> {
    source: &'a S,
    batch_size: usize,
    delay: Duration,
}

impl<'a, S: KeywordSource> Verifier<'a, S> {
    pub fn new(source: &'a S, config: &Config) -> Self {
        Self {
            source,
            batch_size: config.batch_size.max(1),
            delay: config.batch_delay,
        }
    }

    /// Candidates with positive search volume, in response order across batches.
    ///
    /// A failed batch contributes nothing; the remaining batches still run.
    pub async fn verify(&self, candidates: &[String]) -> Vec<KeywordMetrics> {
        let mut verified = Vec::new();
        for (i, batch) in candidates.chunks(self.batch_size).enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            match self.source.export_keywords(batch).await {
                Ok(items) => {
                    for item in items.into_iter().filter(|item| item.volume > 0) {
                        info!(keyword = %item.keyword, volume = item.volume, "found");
                        verified.push(item);
                    }
                }
                Err(e) => {
                    warn!(error = %e, batch = i + 1, size = batch.len(), "keyword batch failed");
                }
            }
        }
        verified
    }
}
