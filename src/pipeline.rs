//! Research run: competitor keywords first, then three verification waves over generated candidates.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::Config;
use crate::keywords::expand::{expand_compounds, expand_fixed_list, expand_variations};
use crate::keywords::{KeywordStore, Summary};
use crate::seranking::KeywordSource;
use crate::seranking::types::KeywordMetrics;
use crate::verify::Verifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveReport {
    pub name: &'static str,
    /// Candidates not already in the store when the wave started.
    pub checked: usize,
    pub added: usize,
}

#[derive(Debug)]
pub struct ResearchReport {
    pub store: KeywordStore,
    /// Unique keywords returned across all competitor domains.
    pub competitor_keywords: usize,
    pub competitor_added: usize,
    pub waves: Vec<WaveReport>,
    pub summary: Summary,
}

pub async fn research(source: &impl KeywordSource, config: &Config) -> ResearchReport {
    info!(
        client = %config.client_name,
        competitors = config.competitors.len(),
        "starting keyword research"
    );
    let mut store = KeywordStore::new();

    info!("step 1: fetching competitor keywords");
    let competitor = fetch_competitor_keywords(source, &config.competitors).await;
    let competitor_added = store.add(&competitor);
    info!(unique = competitor.len(), added = competitor_added, "competitor keywords stored");

    let verifier = Verifier::new(source, config);
    let mut waves = Vec::with_capacity(3);

    info!("step 2: hebrew variations");
    let variations = expand_variations();
    waves.push(run_wave("Hebrew Variations", &variations, &verifier, &mut store).await);

    info!("step 3: compound keywords");
    let compounds = expand_compounds(&variations);
    waves.push(run_wave("Compound Keywords", &compounds, &verifier, &mut store).await);

    info!("step 4: expansion keywords");
    waves.push(run_wave("Expansion", &expand_fixed_list(), &verifier, &mut store).await);

    store.finalize();
    let summary = store.summary();
    info!(
        keywords = summary.total_keywords,
        volume = summary.total_volume,
        categories = summary.categories,
        long_tail = summary.long_tail,
        "research complete"
    );

    ResearchReport {
        store,
        competitor_keywords: competitor.len(),
        competitor_added,
        waves,
        summary,
    }
}

/// Ranking keywords for every domain, unique by keyword text.
///
/// A repeated keyword keeps its first position but takes the metrics of its last occurrence.
/// Failed domains contribute nothing.
async fn fetch_competitor_keywords(
    source: &impl KeywordSource,
    domains: &[String],
) -> Vec<KeywordMetrics> {
    let mut unique: Vec<KeywordMetrics> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for domain in domains {
        let items = source
            .domain_keywords(domain)
            .await
            .inspect_err(|e| warn!(%domain, error = %e, "failed to fetch competitor keywords"))
            .unwrap_or_default();
        info!(%domain, found = items.len(), "competitor keywords fetched");

        for item in items {
            match index.get(&item.keyword).copied() {
                Some(i) => unique[i] = item,
                None => {
                    index.insert(item.keyword.clone(), unique.len());
                    unique.push(item);
                }
            }
        }
    }

    unique
}

async fn run_wave<S: KeywordSource>(
    name: &'static str,
    candidates: &[String],
    verifier: &Verifier<'_, S>,
    store: &mut KeywordStore,
) -> WaveReport {
    let fresh: Vec<String> = candidates
        .iter()
        .filter(|k| !store.contains(k))
        .cloned()
        .collect();

    if fresh.is_empty() {
        info!(wave = name, "no new keywords to check");
        return WaveReport {
            name,
            checked: 0,
            added: 0,
        };
    }

    info!(wave = name, candidates = fresh.len(), "checking new keywords");
    let verified = verifier.verify(&fresh).await;
    let added = store.add(&verified);
    info!(wave = name, added, "wave complete");

    WaveReport {
        name,
        checked: fresh.len(),
        added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::categorize::OTHER;
    use crate::verify::tests::MockSource;

    fn config(domains: &[&str]) -> Config {
        let mut config = Config::for_tests("http://unused");
        config.competitors = domains.iter().map(|d| d.to_string()).collect();
        config
    }

    #[tokio::test]
    async fn failed_domain_does_not_affect_others() {
        let mut source = MockSource::default();
        source.domains.insert(
            "good.co.il".into(),
            vec![KeywordMetrics::new("כיור מטבח", 900), KeywordMetrics::new("ברז", 400)],
        );
        source.failing_domains.insert("bad.co.il".into());

        let report = research(&source, &config(&["bad.co.il", "good.co.il"])).await;

        assert_eq!(
            *source.domain_calls.lock().unwrap(),
            vec!["bad.co.il", "good.co.il"]
        );
        assert_eq!(report.competitor_keywords, 2);
        assert_eq!(report.competitor_added, 2);
        assert_eq!(report.summary.total_keywords, 2);
    }

    #[tokio::test]
    async fn competitor_duplicates_take_last_metrics() {
        let mut source = MockSource::default();
        source
            .domains
            .insert("a.co.il".into(), vec![KeywordMetrics::new("מסנן מים", 100), KeywordMetrics::new("כיור", 5)]);
        source
            .domains
            .insert("b.co.il".into(), vec![KeywordMetrics::new("מסנן מים", 700)]);

        let unique = fetch_competitor_keywords(&source, &["a.co.il".into(), "b.co.il".into()]).await;

        assert_eq!(
            unique,
            vec![KeywordMetrics::new("מסנן מים", 700), KeywordMetrics::new("כיור", 5)]
        );
    }

    #[tokio::test]
    async fn competitor_keywords_skip_verification() {
        let mut source = MockSource::default();
        source
            .domains
            .insert("a.co.il".into(), vec![KeywordMetrics::new("מקלחון הזזה", 260)]);

        let report = research(&source, &config(&["a.co.il"])).await;

        let other = report.store.bucket(OTHER).unwrap();
        assert_eq!(other.records[0].keyword, "מקלחון הזזה");
        assert_eq!(other.records[0].volume, 260);
        assert!(
            source
                .batches
                .lock()
                .unwrap()
                .iter()
                .all(|b| !b.contains(&"מקלחון הזזה".to_string()))
        );
    }

    #[tokio::test]
    async fn waves_skip_keywords_already_stored() {
        let mut source = MockSource::with_volumes(&[("מסנן", 5000), ("כיור למטבח", 1200), ("שיש", 800)]);
        source
            .domains
            .insert("a.co.il".into(), vec![KeywordMetrics::new("ברז", 3000)]);

        let report = research(&source, &config(&["a.co.il"])).await;

        let checked: Vec<String> = source.batches.lock().unwrap().concat();
        assert!(!checked.contains(&"ברז".to_string()));
        // Each candidate goes out at most once across the waves.
        assert_eq!(checked.iter().filter(|k| *k == "מסנן").count(), 1);
        assert!(checked.contains(&"כיור למטבח".to_string()));

        let variations = expand_variations();
        assert_eq!(report.waves[0].name, "Hebrew Variations");
        assert_eq!(report.waves[0].checked, variations.len() - 1);
        assert_eq!(report.waves[0].added, 1);
        assert_eq!(report.waves[1].added, 1);
        assert_eq!(report.waves[2].name, "Expansion");
        assert_eq!(report.waves[2].added, 1);
        assert_eq!(report.summary.total_keywords, 4);
        assert_eq!(report.summary.total_volume, 10_000);
    }

    #[tokio::test]
    async fn wave_with_nothing_new_makes_no_calls() {
        let source = MockSource::default();
        let verifier = Verifier::new(&source, &config(&[]));
        let mut store = KeywordStore::new();
        store.add(&[KeywordMetrics::new("שיש", 10)]);

        let report = run_wave("Expansion", &["שיש".to_string()], &verifier, &mut store).await;

        assert_eq!(report, WaveReport { name: "Expansion", checked: 0, added: 0 });
        assert!(source.batch_sizes().is_empty());
    }

    #[tokio::test]
    async fn buckets_are_sorted_after_run() {
        let source = MockSource::with_volumes(&[("כיור", 100), ("כיורים", 900), ("כיורי", 400)]);

        let report = research(&source, &config(&[])).await;

        let volumes: Vec<u64> = report
            .store
            .bucket("כיורים")
            .unwrap()
            .records
            .iter()
            .map(|r| r.volume)
            .collect();
        assert_eq!(volumes, vec![900, 400, 100]);
    }

    #[tokio::test]
    async fn total_outage_still_completes() {
        let mut source = MockSource::default();
        source.failing_domains.insert("a.co.il".into());
        source.failing_batches.extend(0..100);

        let report = research(&source, &config(&["a.co.il"])).await;

        assert_eq!(report.summary, Summary::default());
        assert_eq!(report.waves.len(), 3);
    }
}
