use crate::core::{ConfigProvider, RawResponse, RequestTarget, Transport};
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest 實作的 GET 傳輸層
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.connect_timeout(), config.read_timeout())
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, target: &RequestTarget) -> Result<RawResponse> {
        tracing::debug!("Making GET request to: {}", target.as_str());
        let response = self.client.get(target.url().clone()).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            // 不讀取內容，response 在此被釋放
            return Ok(RawResponse {
                status: status.as_u16(),
                body: None,
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());

        Ok(RawResponse {
            status: status.as_u16(),
            body: Some(body.to_vec()),
        })
    }
}
