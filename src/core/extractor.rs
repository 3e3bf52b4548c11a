use crate::core::EarthquakeEvent;
use crate::utils::error::{QuakeError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    // 只取第一筆，其餘元素不做結構檢查
    features: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    title: String,
    time: i64,
    tsunami: i32,
}

/// 解析 GeoJSON feature collection 的第一筆 feature
///
/// 空白輸入、空的 `features` 陣列或格式錯誤都回傳 `None`，後兩者會在這裡記錄
pub fn extract(json_text: &str) -> Option<EarthquakeEvent> {
    if json_text.trim().is_empty() {
        tracing::debug!("Empty response body, nothing to extract");
        return None;
    }

    match try_extract(json_text) {
        Ok(event) => Some(event),
        Err(QuakeError::EmptyResult) => {
            tracing::info!("📭 Response contained no earthquake features");
            None
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            None
        }
    }
}

pub fn try_extract(json_text: &str) -> Result<EarthquakeEvent> {
    let collection: FeatureCollection = serde_json::from_str(json_text)?;

    let first = collection
        .features
        .into_iter()
        .next()
        .ok_or(QuakeError::EmptyResult)?;

    let feature: Feature = serde_json::from_value(first)?;
    let Properties {
        title,
        time,
        tsunami,
    } = feature.properties;

    Ok(EarthquakeEvent::new(title, time, tsunami))
}
