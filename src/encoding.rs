//! 字符编码转换模块。
//!
//! 旧的歌词文件常常以 GBK 编码保存，本模块提供解析器所依赖的
//! GBK/UTF-8 字节级转换。转换是纯函数，不持有任何状态。

use std::fmt;

use encoding_rs::{GBK, UTF_8};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::error::{LrcParserError, Result};

/// 枚举：表示歌词文件可能使用的字符编码。
///
/// 仅作为转换调用的参数使用，不被任何文档持有。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Encoding {
    /// 纯 ASCII 文本。只作为检测结果存在，不支持作为转换端点。
    Ascii,
    /// UTF-8 编码。
    Utf8,
    /// GBK (Windows-936) 编码。
    Gbk,
    /// 未知编码。
    Unknown,
}

impl Encoding {
    /// 返回编码的规范名称。
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Ascii => "ASCII",
            Encoding::Utf8 => "UTF-8",
            Encoding::Gbk => "GBK",
            Encoding::Unknown => "UNKNOWN",
        }
    }

    /// 映射到底层编解码器；`Ascii` 与 `Unknown` 没有对应的编解码器。
    fn codec(self) -> Option<&'static encoding_rs::Encoding> {
        match self {
            Encoding::Utf8 => Some(UTF_8),
            Encoding::Gbk => Some(GBK),
            Encoding::Ascii | Encoding::Unknown => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 将 `input` 的字节按 `from` 编码解码，再重新编码为 `to`。
///
/// 支持 {UTF-8, GBK} 之间的任意组合；`from == to` 时是忠实的往返转换。
///
/// # 错误
/// * [`LrcParserError::UnsupportedEncoding`] - 任一端点不在受支持的编码集内。
/// * [`LrcParserError::ConversionFailed`] - 字节序列对 `from` 非法，
///   或目标编码无法表示解码出的字符。
pub fn convert_encoding(input: &[u8], from: Encoding, to: Encoding) -> Result<Vec<u8>> {
    let (Some(decoder), Some(encoder)) = (from.codec(), to.codec()) else {
        return Err(LrcParserError::UnsupportedEncoding { from, to });
    };

    let decoded = decoder
        .decode_without_bom_handling_and_without_replacement(input)
        .ok_or(LrcParserError::ConversionFailed { from, to })?;

    let (encoded, _, had_unmappable) = encoder.encode(&decoded);
    if had_unmappable {
        return Err(LrcParserError::ConversionFailed { from, to });
    }

    Ok(encoded.into_owned())
}
