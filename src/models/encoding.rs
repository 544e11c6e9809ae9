use std::fmt;
use std::str::FromStr;
use base64::engine::general_purpose;
use base64::Engine;
use crate::error::{ConvertError, Result};

/// `source_text` 寫入 stdin 前使用的編碼
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceEncoding {
    #[default]
    Utf8,
    /// 寫入時與 latin1 相同
    Ascii,
    Latin1,
    Utf16Le,
    /// 文字本身是 base64，寫入解碼後的位元組
    Base64,
    /// 文字本身是十六進位字串，寫入解碼後的位元組
    Hex,
}

impl SourceEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "utf8",
            SourceEncoding::Ascii => "ascii",
            SourceEncoding::Latin1 => "latin1",
            SourceEncoding::Utf16Le => "utf16le",
            SourceEncoding::Base64 => "base64",
            SourceEncoding::Hex => "hex",
        }
    }

    /// 將文字依此編碼轉為位元組
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            SourceEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            SourceEncoding::Ascii | SourceEncoding::Latin1 => {
                Ok(text.encode_utf16().map(|unit| unit as u8).collect())
            }
            SourceEncoding::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect()),
            SourceEncoding::Base64 => decode_base64(text),
            SourceEncoding::Hex => decode_hex(text),
        }
    }
}

impl FromStr for SourceEncoding {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(SourceEncoding::Utf8),
            "ascii" => Ok(SourceEncoding::Ascii),
            "latin1" | "binary" => Ok(SourceEncoding::Latin1),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(SourceEncoding::Utf16Le),
            "base64" => Ok(SourceEncoding::Base64),
            "hex" => Ok(SourceEncoding::Hex),
            _ => Err(ConvertError::invalid_request(format!("Unknown encoding: {}", s))),
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let cleaned = cleaned.trim_end_matches('=');
    let decoded = if cleaned.contains(['-', '_']) {
        general_purpose::URL_SAFE_NO_PAD.decode(cleaned)
    } else {
        general_purpose::STANDARD_NO_PAD.decode(cleaned)
    };
    decoded.map_err(|e| ConvertError::invalid_request(format!("無效的 base64 輸入: {}", e)))
}

fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let digits = text.trim().as_bytes();
    if digits.len() % 2 != 0 {
        return Err(ConvertError::invalid_request("無效的 hex 輸入：長度必須為偶數"));
    }
    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .filter(|s| s.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| {
                    ConvertError::invalid_request(format!(
                        "無效的 hex 輸入: {}",
                        String::from_utf8_lossy(pair)
                    ))
                })
        })
        .collect()
}
