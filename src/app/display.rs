use crate::core::{EarthquakeEvent, EventView};
pub use crate::domain::model::DisplayFields;
use crate::domain::model::TsunamiAlert;
use crate::utils::error::Result;
use chrono::{Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Write;

const DATE_PATTERN: &str = "%a, %-d %b %Y at %H:%M:%S %Z";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTimezone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 海嘯警報的顯示文字，可依語系替換
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertLabels {
    pub yes: String,
    pub no: String,
    pub not_available: String,
}

impl Default for AlertLabels {
    fn default() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
            not_available: "Not available".to_string(),
        }
    }
}

/// 把毫秒時間戳轉成 `Mon, 16 Dec 2013 at 19:20:00 UTC` 這樣的日期
///
/// 超出 chrono 可表示範圍時回傳 `None`
pub fn format_date<Z>(epoch_millis: i64, tz: &Z) -> Option<String>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    tz.timestamp_millis_opt(epoch_millis)
        .single()
        .map(|dt| dt.format(DATE_PATTERN).to_string())
}

/// 以 IANA 名稱解析時區，例如 `America/Los_Angeles`
pub fn parse_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// 取得系統時區；無法判定時回傳 `None`，日期改用數字位移顯示
pub fn system_zone() -> Option<Tz> {
    match iana_time_zone::get_timezone() {
        Ok(name) => {
            let zone = parse_zone(&name);
            if zone.is_none() {
                tracing::debug!("Unknown system time zone: {}", name);
            }
            zone
        }
        Err(e) => {
            tracing::debug!("Cannot determine system time zone: {}", e);
            None
        }
    }
}

pub fn format_tsunami_alert(code: i32, labels: &AlertLabels) -> &str {
    alert_label(TsunamiAlert::from_code(code), labels)
}

fn alert_label(alert: TsunamiAlert, labels: &AlertLabels) -> &str {
    match alert {
        TsunamiAlert::NoAlert => &labels.no,
        TsunamiAlert::Issued => &labels.yes,
        TsunamiAlert::Unknown(_) => &labels.not_available,
    }
}

#[derive(Debug, Clone)]
pub struct DisplayFormatter {
    timezone: DisplayTimezone,
    labels: AlertLabels,
    local_zone: Option<Tz>,
}

impl DisplayFormatter {
    pub fn new(timezone: DisplayTimezone, labels: AlertLabels) -> Self {
        let local_zone = match timezone {
            DisplayTimezone::Local => system_zone(),
            DisplayTimezone::Utc => None,
        };
        Self {
            timezone,
            labels,
            local_zone,
        }
    }

    /// 指定本地時區，取代系統偵測結果
    pub fn with_local_zone(mut self, zone: Tz) -> Self {
        self.local_zone = Some(zone);
        self
    }

    pub fn fields(&self, event: &EarthquakeEvent) -> DisplayFields {
        let millis = event.occurred_at_epoch_millis();
        let date = match self.timezone {
            DisplayTimezone::Local => match &self.local_zone {
                Some(zone) => format_date(millis, zone),
                None => format_date(millis, &Local),
            },
            DisplayTimezone::Utc => format_date(millis, &Utc),
        };

        let date = date.unwrap_or_else(|| {
            tracing::warn!("⚠️ Timestamp {} cannot be displayed", millis);
            String::new()
        });

        DisplayFields {
            title: event.title().to_string(),
            date,
            tsunami_alert: alert_label(event.alert(), &self.labels).to_string(),
        }
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(DisplayTimezone::default(), AlertLabels::default())
    }
}

/// 在終端機輸出標題、日期與海嘯警報
pub struct TerminalView<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventView for TerminalView<W> {
    fn show(&mut self, fields: &DisplayFields) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{}", fields.title)?;
                writeln!(self.out, "{}", fields.date)?;
                writeln!(self.out, "Tsunami alert: {}", fields.tsunami_alert)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, fields)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
