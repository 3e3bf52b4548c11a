pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::validate_range;

/// USGS 查詢：2014 年規模 7 以上的地震
pub const DEFAULT_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2014-01-01&endtime=2014-12-01&minmagnitude=7";

pub const MIN_TIMEOUT_SECONDS: u64 = 1;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

pub(crate) fn validate_timeouts(
    connect_field: &str,
    connect: u64,
    read_field: &str,
    read: u64,
) -> Result<()> {
    validate_range(connect_field, connect, MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)?;
    validate_range(read_field, read, MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)
}

#[cfg(feature = "cli")]
use crate::app::display::{AlertLabels, DisplayTimezone, OutputFormat};
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, DecodeMode};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "soonami")]
#[command(about = "Show the first earthquake returned by a USGS event query")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "TOML config file; overrides the flags below")]
    pub config: Option<String>,

    #[arg(long, default_value = "15", help = "Connect timeout in seconds")]
    pub connect_timeout: u64,

    #[arg(long, default_value = "10", help = "Read timeout in seconds")]
    pub read_timeout: u64,

    #[arg(long, value_enum, default_value_t = DecodeMode::Lines)]
    pub decode_mode: DecodeMode,

    #[arg(long, help = "Show the event time in UTC instead of the local zone")]
    pub utc: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn timezone(&self) -> DisplayTimezone {
        if self.utc {
            DisplayTimezone::Utc
        } else {
            DisplayTimezone::Local
        }
    }

    pub fn alert_labels(&self) -> AlertLabels {
        AlertLabels::default()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout)
    }

    fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    // 網址交給 Requester 檢查，格式錯誤只會得到空結果
    fn validate(&self) -> Result<()> {
        validate_timeouts(
            "connect_timeout",
            self.connect_timeout,
            "read_timeout",
            self.read_timeout,
        )
    }
}
