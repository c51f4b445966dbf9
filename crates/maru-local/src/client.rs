//! Keyword search against the local-place REST API.
//!
//! Failure handling is uniform: HTTP errors, non-success statuses, a
//! missing key, and decode failures are logged and become an empty
//! result. No retries.

use crate::category::PlaceCategory;
use maru_core::config::SearchConfig;
use maru_core::{MaruError, Place, Result};
use serde::Deserialize;
use std::time::Duration;

/// A raw search document as the upstream API returns it. Coordinates
/// and distance arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawDocument {
    pub place_name: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub road_address_name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub distance: String,
}

#[derive(Debug, Deserialize)]
struct KeywordResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<RawDocument> for Place {
    fn from(doc: RawDocument) -> Self {
        Place {
            name: doc.place_name,
            address: doc.address_name,
            road_address: none_if_empty(doc.road_address_name),
            category: doc.category_name,
            phone: none_if_empty(doc.phone),
            x: doc.x.parse().unwrap_or(0.0),
            y: doc.y.parse().unwrap_or(0.0),
            distance_m: doc.distance.parse().ok(),
        }
    }
}

pub struct LocalSearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LocalSearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| MaruError::Upstream(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Keyword search, optionally narrowed to a category group.
    /// Returns an empty list on any failure.
    pub async fn search_keyword(
        &self,
        query: &str,
        category: Option<PlaceCategory>,
        size: usize,
    ) -> Vec<Place> {
        if self.api_key.trim().is_empty() {
            tracing::warn!("local search skipped: no API key configured");
            return Vec::new();
        }

        let url = format!("{}/v2/local/search/keyword.json", self.base_url);
        let size = size.clamp(1, 15).to_string();
        let mut request = self
            .http
            .get(&url)
            .header("Authorization", format!("KakaoAK {}", self.api_key))
            .query(&[("query", query), ("size", size.as_str())]);
        if let Some(category) = category {
            request = request.query(&[("category_group_code", category.code())]);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(query, error = %e, "local search request failed");
                return Vec::new();
            }
        };
        if !response.status().is_success() {
            tracing::warn!(query, status = %response.status(), "local search returned error status");
            return Vec::new();
        }

        match response.json::<KeywordResponse>().await {
            Ok(body) => body.documents.into_iter().map(Place::from).collect(),
            Err(e) => {
                tracing::warn!(query, error = %e, "local search response decode failed");
                Vec::new()
            }
        }
    }
}
