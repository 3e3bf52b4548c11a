use crate::domain::model::{
    DecodeMode, DisplayFields, EarthquakeEvent, RawResponse, RequestTarget,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Transport: Send + Sync {
    fn fetch(
        &self,
        target: &RequestTarget,
    ) -> impl std::future::Future<Output = Result<RawResponse>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> String;
    fn connect_timeout(&self) -> Duration;
    fn read_timeout(&self) -> Duration;
    fn decode_mode(&self) -> DecodeMode;
}

/// 整條抓取流程；任何失敗都在內部記錄並轉成 `None`
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn run(&self) -> Option<EarthquakeEvent>;
}

pub trait EventView {
    fn show(&mut self, fields: &DisplayFields) -> Result<()>;
}
