use std::collections::HashSet;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::categorize;
use crate::seranking::types::KeywordMetrics;

/// Phrases with at least this many words count as long-tail.
const LONG_TAIL_WORDS: usize = 3;

/// A verified keyword with its metrics.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct KeywordRecord {
    pub keyword: String,
    pub volume: u64,
    pub cpc: f64,
    pub difficulty: f64,
    pub competition: f64,
    pub is_long_tail: bool,
}

impl KeywordRecord {
    fn from_metrics(item: &KeywordMetrics) -> Self {
        let keyword = item.keyword.trim().to_string();
        let is_long_tail = keyword.split_whitespace().count() >= LONG_TAIL_WORDS;
        Self {
            keyword,
            volume: item.volume,
            cpc: item.cpc,
            difficulty: item.difficulty,
            competition: item.competition,
            is_long_tail,
        }
    }
}

#[derive(Debug)]
pub struct CategoryBucket {
    pub label: &'static str,
    pub records: Vec<KeywordRecord>,
}

impl CategoryBucket {
    pub fn total_volume(&self) -> u64 {
        self.records.iter().map(|r| r.volume).sum()
    }
}

/// Aggregate numbers for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_keywords: usize,
    pub total_volume: u64,
    pub categories: usize,
    pub long_tail: usize,
}

/// Categorized keyword records, unique by lowercased keyword across all categories.
///
/// Append-only: the first record seen for a keyword is the one kept.
/// Buckets keep the order in which their category first received a keyword.
#[derive(Debug, Default)]
pub struct KeywordStore {
    buckets: Vec<CategoryBucket>,
    seen: HashSet<String>,
}

fn normalize(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

impl KeywordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.seen.contains(&normalize(keyword))
    }

    /// Record every item not seen before. Returns how many were added.
    pub fn add(&mut self, items: &[KeywordMetrics]) -> usize {
        let mut added = 0;
        for item in items {
            let key = normalize(&item.keyword);
            if key.is_empty() || self.seen.contains(&key) {
                continue;
            }

            let record = KeywordRecord::from_metrics(item);
            let label = categorize(&record.keyword);
            self.bucket_mut(label).records.push(record);
            self.seen.insert(key);
            added += 1;
        }
        added
    }

    fn bucket_mut(&mut self, label: &'static str) -> &mut CategoryBucket {
        let index = match self.buckets.iter().position(|b| b.label == label) {
            Some(i) => i,
            None => {
                self.buckets.push(CategoryBucket {
                    label,
                    records: Vec::new(),
                });
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index]
    }

    /// Sort every bucket by volume, highest first. Equal volumes keep their order.
    pub fn finalize(&mut self) {
        for bucket in &mut self.buckets {
            bucket.records.sort_by(|a, b| b.volume.cmp(&a.volume));
        }
    }

    pub fn summary(&self) -> Summary {
        let records = || self.buckets.iter().flat_map(|b| b.records.iter());
        Summary {
            total_keywords: records().count(),
            total_volume: records().map(|r| r.volume).sum(),
            categories: self.buckets.len(),
            long_tail: records().filter(|r| r.is_long_tail).count(),
        }
    }

    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    #[cfg(test)]
    pub fn bucket(&self, label: &str) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.label == label)
    }
}

impl Serialize for KeywordStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(bucket.label, &bucket.records)?;
        }
        map.end()
    }
}
