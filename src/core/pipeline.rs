use crate::core::decoder::decode;
use crate::core::extractor::extract;
use crate::core::requester::build_request;
use crate::core::{DecodeMode, EarthquakeEvent, Pipeline, Transport};
use crate::utils::error::QuakeError;

/// Requester → Transport → Decoder → Extractor，失敗時一律降級為空結果
pub struct EarthquakePipeline<T: Transport> {
    transport: T,
    endpoint: String,
    decode_mode: DecodeMode,
}

impl<T: Transport> EarthquakePipeline<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            decode_mode: DecodeMode::default(),
        }
    }

    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 交給 extractor 的文字；請求、傳輸或解碼失敗，以及非 200 的回應都回傳空字串
    pub async fn fetch_body(&self) -> String {
        let target = match build_request(&self.endpoint) {
            Ok(target) => target,
            Err(e) => {
                tracing::error!("❌ Error with creating URL: {}", e);
                return String::new();
            }
        };

        let response = match self.transport.fetch(&target).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                return String::new();
            }
        };

        if !response.is_ok() {
            tracing::warn!(
                "⚠️ {}",
                QuakeError::NonSuccessStatus {
                    status: response.status
                }
            );
            return String::new();
        }

        match decode(response.body.as_deref(), self.decode_mode) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                String::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> Pipeline for EarthquakePipeline<T> {
    async fn run(&self) -> Option<EarthquakeEvent> {
        tracing::info!("🚀 Fetching earthquake data from: {}", self.endpoint);

        let body = self.fetch_body().await;
        let event = extract(&body);

        match &event {
            Some(event) => tracing::info!("✅ Extracted event: {}", event.title()),
            None => tracing::debug!("No event extracted"),
        }

        event
    }
}
