use crate::app::display::{AlertLabels, DisplayTimezone};
use crate::config::{validate_timeouts, DEFAULT_ENDPOINT};
use crate::core::{ConfigProvider, DecodeMode};
use crate::utils::error::{QuakeError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub connect_timeout_seconds: Option<u64>,
    pub read_timeout_seconds: Option<u64>,
    pub decode_mode: Option<DecodeMode>,
    /// 依鍵名排序附加到 endpoint 的查詢參數
    pub query: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub timezone: Option<DisplayTimezone>,
    pub alert_yes: Option<String>,
    pub alert_no: Option<String>,
    pub alert_not_available: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuakeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuakeError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USGS_HOST})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuakeError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timezone(&self) -> DisplayTimezone {
        self.display.timezone.unwrap_or_default()
    }

    pub fn alert_labels(&self) -> AlertLabels {
        let defaults = AlertLabels::default();
        AlertLabels {
            yes: self.display.alert_yes.clone().unwrap_or(defaults.yes),
            no: self.display.alert_no.clone().unwrap_or(defaults.no),
            not_available: self
                .display
                .alert_not_available
                .clone()
                .unwrap_or(defaults.not_available),
        }
    }
}

impl ConfigProvider for TomlConfig {
    /// 附加 `[source.query]` 後的 endpoint；基底網址格式錯誤時原樣回傳，交給 requester 拒絕
    fn endpoint(&self) -> String {
        let Some(query) = self.source.query.as_ref().filter(|q| !q.is_empty()) else {
            return self.source.endpoint.clone();
        };

        match Url::parse(&self.source.endpoint) {
            Ok(mut url) => {
                url.query_pairs_mut().extend_pairs(query.iter());
                url.to_string()
            }
            Err(_) => self.source.endpoint.clone(),
        }
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.source.connect_timeout_seconds.unwrap_or(15))
    }

    fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.source.read_timeout_seconds.unwrap_or(10))
    }

    fn decode_mode(&self) -> DecodeMode {
        self.source.decode_mode.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_timeouts(
            "source.connect_timeout_seconds",
            self.connect_timeout().as_secs(),
            "source.read_timeout_seconds",
            self.read_timeout().as_secs(),
        )?;

        let labels = [
            ("display.alert_yes", &self.display.alert_yes),
            ("display.alert_no", &self.display.alert_no),
            ("display.alert_not_available", &self.display.alert_not_available),
        ];
        for (field, label) in labels {
            if let Some(label) = label {
                validate_non_empty_string(field, label)?;
            }
        }

        Ok(())
    }
}
