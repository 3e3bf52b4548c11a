use crate::core::RequestTarget;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

/// 把網址字串轉成請求目標；格式錯誤時不應發出任何網路請求
pub fn build_request(url: &str) -> Result<RequestTarget> {
    let parsed = validate_url("endpoint", url)?;
    tracing::debug!("Built request target: {}", parsed);
    Ok(RequestTarget::new(parsed))
}
