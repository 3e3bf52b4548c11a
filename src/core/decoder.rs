use crate::core::DecodeMode;
use crate::utils::error::{QuakeError, Result};
use std::io::{BufRead, Read};

/// 把回應內容轉成文字。沒有內容時回傳空字串。
pub fn decode(body: Option<&[u8]>, mode: DecodeMode) -> Result<String> {
    match body {
        Some(bytes) => decode_stream(bytes, mode),
        None => Ok(String::new()),
    }
}

/// [`decode`] 的串流版本
///
/// [`DecodeMode::Lines`] 會去掉每個換行符號（`\n`、`\r\n` 或單獨的 `\r`），
/// 各行之間不插入任何字元；字串值跨行的 JSON 會因此被黏在一起。
/// 無效的 UTF-8 以 U+FFFD 取代。
pub fn decode_stream<R: BufRead>(mut reader: R, mode: DecodeMode) -> Result<String> {
    let mut raw = Vec::new();
    match mode {
        DecodeMode::Whole => {
            reader
                .read_to_end(&mut raw)
                .map_err(QuakeError::StreamFailure)?;
        }
        DecodeMode::Lines => {
            let mut line = Vec::new();
            loop {
                line.clear();
                let read = reader
                    .read_until(b'\n', &mut line)
                    .map_err(QuakeError::StreamFailure)?;
                if read == 0 {
                    break;
                }
                if line.last() == Some(&b'\n') {
                    line.pop();
                }
                // 單獨的 \r 也算換行
                raw.extend(line.iter().copied().filter(|b| *b != b'\r'));
            }
        }
    }

    Ok(String::from_utf8_lossy(&raw).into_owned())
}
