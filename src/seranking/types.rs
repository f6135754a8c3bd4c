use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// One keyword item as returned by either SE Ranking endpoint.
///
/// Only `keyword` is required. Metrics that are missing or `null` default to zero.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct KeywordMetrics {
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpc: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competition: f64,
}

impl KeywordMetrics {
    #[cfg(test)]
    pub fn new(keyword: &str, volume: u64) -> Self {
        Self {
            keyword: keyword.to_string(),
            volume,
            cpc: 0.0,
            difficulty: 0.0,
            competition: 0.0,
        }
    }
}

/// Body of `POST /v1/keywords/export`.
#[derive(Serialize, Debug)]
pub struct ExportRequest<'a> {
    pub keywords: &'a [String],
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a JSON array of keyword items, skipping elements that don't fit the schema.
///
/// Elements with an empty keyword (after trimming) are dropped as well.
pub fn decode_items(body: &str) -> Result<Vec<KeywordMetrics>, serde_json::Error> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let items = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<KeywordMetrics>(value) {
            Ok(item) if !item.keyword.trim().is_empty() => Some(item),
            Ok(_) => {
                debug!("skipping item with empty keyword");
                None
            }
            Err(e) => {
                debug!(error = %e, "skipping malformed keyword item");
                None
            }
        })
        .collect();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_metrics_default_to_zero() {
        let items = decode_items(r#"[{"keyword": "כיור"}]"#).unwrap();
        assert_eq!(items, vec![KeywordMetrics::new("כיור", 0)]);
    }

    #[test]
    fn null_metrics_default_to_zero() {
        let items =
            decode_items(r#"[{"keyword": "ברז", "volume": null, "cpc": null, "difficulty": 12}]"#)
                .unwrap();
        assert_eq!(items[0].volume, 0);
        assert_eq!(items[0].cpc, 0.0);
        assert_eq!(items[0].difficulty, 12.0);
    }

    #[test]
    fn full_item_decodes() {
        let items = decode_items(
            r#"[{"keyword": "מסנן מים", "volume": 1900, "cpc": 2.35, "difficulty": 41, "competition": 0.8, "extra": true}]"#,
        )
        .unwrap();
        assert_eq!(items[0].keyword, "מסנן מים");
        assert_eq!(items[0].volume, 1900);
        assert_eq!(items[0].cpc, 2.35);
        assert_eq!(items[0].competition, 0.8);
    }

    #[test]
    fn malformed_items_are_skipped() {
        let items = decode_items(
            r#"[{"volume": 10}, {"keyword": 5}, {"keyword": "  "}, {"keyword": "אסלה", "volume": -3}, {"keyword": "מקלחון", "volume": 320}]"#,
        )
        .unwrap();
        assert_eq!(items, vec![KeywordMetrics::new("מקלחון", 320)]);
    }

    #[test]
    fn non_array_body_is_an_error() {
        assert!(decode_items(r#"{"error": "bad token"}"#).is_err());
        assert!(decode_items("not json").is_err());
    }
}
