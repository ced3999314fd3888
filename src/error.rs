//! 定义了整个 `lrc-parser` 库的错误类型 `LrcParserError`。

use std::{io, num::ParseIntError, str::Utf8Error};
use thiserror::Error;

use crate::encoding::Encoding;

/// `lrc-parser` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum LrcParserError {
    /// 输入的歌词内容为空
    #[error("输入的歌词内容为空")]
    EmptyInput,

    /// 请求的编码转换不受支持
    #[error("不支持的编码转换: {from} -> {to}")]
    UnsupportedEncoding {
        /// 请求的源编码
        from: Encoding,
        /// 请求的目标编码
        to: Encoding,
    },

    /// 编码转换失败（字节序列非法，或目标编码无法表示某些字符）
    #[error("编码转换失败: {from} -> {to}")]
    ConversionFailed {
        /// 转换的源编码
        from: Encoding,
        /// 转换的目标编码
        to: Encoding,
    },

    /// 尚未加载任何文件
    #[error("尚未加载任何文件")]
    NoFileLoaded,

    /// 整数解析失败 (源自 `std::num::ParseIntError`)
    #[error("整数解析失败: {0}")]
    ParseInt(#[from] ParseIntError),

    /// UTF-8 校验失败 (源自 `std::str::Utf8Error`)
    #[error("UTF-8 校验失败: {0}")]
    Utf8(#[from] Utf8Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),
}

/// `LrcParserError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, LrcParserError>;
