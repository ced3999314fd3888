//! 文本文件读取辅助模块。
//!
//! 以二进制方式读取文件并拆分为行：文件可能是 GBK 编码，
//! 在编码转换之前不能假设内容是合法的 UTF-8。

use std::{fs, path::Path};

use tracing::warn;

use crate::{error::Result, parser::utils::strip_bom_and_trim};

/// 读取文件内容并拆分为规范化后的非空行。
///
/// 每一行都去掉 UTF-8 BOM 与两端 ASCII 空白（兼容 `\r\n` 行尾），
/// 空行被过滤掉。文件句柄只在读取期间持有。
///
/// # 错误
/// 文件无法读取时返回 [`crate::LrcParserError::Io`]。
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let content = fs::read(path)?;

    let lines: Vec<Vec<u8>> = content
        .split(|&byte| byte == b'\n')
        .map(strip_bom_and_trim)
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect();

    if lines.is_empty() {
        warn!("读取到空文件: {}", path.display());
    }

    Ok(lines)
}
