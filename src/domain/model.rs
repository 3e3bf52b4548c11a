use serde::{Deserialize, Serialize};
use url::Url;

/// 一筆地震事件，只會由成功解析的 feature 建立
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarthquakeEvent {
    title: String,
    occurred_at_epoch_millis: i64,
    tsunami_alert: i32,
}

impl EarthquakeEvent {
    pub(crate) fn new(title: String, occurred_at_epoch_millis: i64, tsunami_alert: i32) -> Self {
        Self {
            title,
            occurred_at_epoch_millis,
            tsunami_alert,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 自 1970-01-01T00:00:00Z 起的毫秒數
    pub fn occurred_at_epoch_millis(&self) -> i64 {
        self.occurred_at_epoch_millis
    }

    /// 目錄回報的原始海嘯旗標
    pub fn tsunami_alert(&self) -> i32 {
        self.tsunami_alert
    }

    pub fn alert(&self) -> TsunamiAlert {
        TsunamiAlert::from_code(self.tsunami_alert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsunamiAlert {
    NoAlert,
    Issued,
    Unknown(i32),
}

impl TsunamiAlert {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => TsunamiAlert::NoAlert,
            1 => TsunamiAlert::Issued,
            other => TsunamiAlert::Unknown(other),
        }
    }
}

/// 已驗證過的請求目標
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    url: Url,
}

impl RequestTarget {
    pub(crate) fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// 交給畫面顯示的三個字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFields {
    pub title: String,
    pub date: String,
    pub tsunami_alert: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// 只有狀態碼 200 才有內容
    pub body: Option<Vec<u8>>,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DecodeMode {
    /// 去掉換行符號後直接串接各行
    #[default]
    Lines,
    /// 保留原始內容
    Whole,
}
