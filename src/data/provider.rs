use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::{API, ApiConfig};
use crate::data::fallback::FetchError;
use crate::models::{Influencer, InfluencerPayload, PerformanceMetrics, QueryAnswer, QueryRequest};

/// Abstract interface over the remote metrics API.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch_performance(&self) -> Result<PerformanceMetrics, FetchError>;

    /// Returned pre-sorted by descending influence score.
    async fn fetch_influencers(&self, limit: usize) -> Result<Vec<Influencer>, FetchError>;

    async fn ask(&self, question: &str) -> Result<String, FetchError>;
}

pub struct HttpMetricsProvider {
    client: Client,
    base_url: String,
}

impl HttpMetricsProvider {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // The client-level timeout doubles as the cancellation mechanism:
        // a request that overruns it is aborted in flight, not abandoned.
        let client = Client::builder().timeout(config.fetch_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        response.json::<T>().await.map_err(FetchError::from_reqwest)
    }
}

#[async_trait]
impl MetricsProvider for HttpMetricsProvider {
    async fn fetch_performance(&self) -> Result<PerformanceMetrics, FetchError> {
        self.get_json(API.endpoints.performance).await
    }

    async fn fetch_influencers(&self, limit: usize) -> Result<Vec<Influencer>, FetchError> {
        let path = format!("{}?limit={}", API.endpoints.influencers, limit);
        let payload: InfluencerPayload = self.get_json(&path).await?;
        Ok(payload.influencers)
    }

    async fn ask(&self, question: &str) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, API.endpoints.query);
        let body = QueryRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        let answer: QueryAnswer = response.json().await.map_err(FetchError::from_reqwest)?;
        Ok(answer.answer)
    }
}
