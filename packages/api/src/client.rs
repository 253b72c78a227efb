use records::{ClientConfig, ClientError, Record, RecordId, RecordService, ResponseEnvelope};
use reqwest::{Client, RequestBuilder};

use crate::response;

/// HTTP client for the user API. Cheap to clone.
#[derive(Clone, Debug)]
pub struct RecordClient {
    http: Client,
    config: ClientConfig,
}

impl RecordClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send and read the whole body. Only transport failures are errors here.
    async fn exchange(&self, request: RequestBuilder) -> Result<(u16, String), ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("request failed: {e}");
            ClientError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        tracing::debug!("HTTP {status}, {} bytes", body.len());
        Ok((status, body))
    }
}

impl RecordService for RecordClient {
    async fn list(&self) -> Result<Vec<Record>, ClientError> {
        let url = self.config.collection_url();
        tracing::debug!("GET {url}");
        let (status, body) = self.exchange(self.http.get(&url)).await?;
        response::read_collection(status, &body)
    }

    async fn get(&self, id: RecordId) -> Result<Record, ClientError> {
        let url = self.config.record_url(id);
        tracing::debug!("GET {url}");
        let (status, body) = self.exchange(self.http.get(&url)).await?;
        response::read_record(id, status, &body)
    }

    async fn create(&self, record: &Record) -> Result<ResponseEnvelope, ClientError> {
        let url = self.config.collection_url();
        tracing::debug!("POST {url}");
        let (status, body) = self.exchange(self.http.post(&url).json(record)).await?;
        response::read_envelope(status, &body)
    }

    async fn update(&self, id: RecordId, record: &Record) -> Result<ResponseEnvelope, ClientError> {
        let url = self.config.record_url(id);
        tracing::debug!("PUT {url}");
        let (status, body) = self.exchange(self.http.put(&url).json(record)).await?;
        response::read_envelope(status, &body)
    }

    async fn delete(&self, id: RecordId) -> Result<ResponseEnvelope, ClientError> {
        let url = self.config.record_url(id);
        tracing::debug!("DELETE {url}");
        let (status, body) = self.exchange(self.http.delete(&url)).await?;
        response::read_envelope(status, &body)
    }
}
