#![warn(missing_docs)]

//! # LRC Parser RS
//!
//! 一个用于解析 LRC 歌词文件的 Rust 库，支持标准 LRC 与增强型
//! （逐字时间戳）LRC，并内置 GBK/UTF-8 编码转换。
//!
//! ## 主要功能
//!
//! - **行分类**: 将文件开头的 `[key: value]` 元数据标签与
//!   `[mm:ss.mmm]` 歌词行分开收集。
//! - **增强型检测**: 在第一条歌词行上判定文件是否携带
//!   `<mm:ss.mmm>` 逐字时间戳，并据此重建每行的显示文本。
//! - **编码转换**: 对 GBK 编码的老歌词文件，解析后可整体转换为
//!   UTF-8。
//!
//! ## 解析行序列
//!
//! ```rust
//! use lrc_parser_rs::parser::LrcParser;
//!
//! let parser = LrcParser::new();
//! let document = parser
//!     .parse(&["[ar: 许嵩]", "[00:12.340]第一句歌词"])
//!     .unwrap();
//!
//! assert_eq!(document.tags(), vec!["ar: 许嵩"]);
//! assert_eq!(document.text()[0].start_ms(), Some(12340));
//! assert!(!document.is_enhanced());
//! ```
//!
//! ## 解析文件
//!
//! ```rust,no_run
//! use lrc_parser_rs::{Encoding, LrcHelper};
//!
//! let mut helper = LrcHelper::new();
//! helper.load("lyrics.lrc").unwrap();
//! // 对 GBK 编码的文件，解析后统一转换为 UTF-8：
//! helper.change_encoding(Encoding::Gbk).unwrap();
//! for line in helper.text() {
//!     println!("{}", line.text());
//! }
//! ```

pub mod encoding;
pub mod error;
pub mod parser;
pub mod text_file;

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

pub use crate::{
    encoding::Encoding,
    error::{LrcParserError, Result},
    parser::{EnhancedState, LrcParser, LyricDocument, LyricLine},
};

// ==========================================================
//  顶层 API
// ==========================================================

/// 顶层歌词解析客户端，封装了文件读取、解析与编码转换。
///
/// 这是与本库交互的主要入口点。每个实例独占一个解析结果：
/// 重新加载文件会先清空上一次的结果。
#[derive(Debug, Default)]
pub struct LrcHelper {
    parser: LrcParser,
    document: LyricDocument,
    path: Option<PathBuf>,
}

impl LrcHelper {
    /// 创建一个新的、空的 `LrcHelper` 实例。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建实例并立即加载给定的歌词文件。
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut helper = Self::new();
        helper.load(path)?;
        Ok(helper)
    }

    /// 读取并解析给定的歌词文件，替换之前的解析结果。
    ///
    /// # 错误
    /// * [`LrcParserError::Io`] - 文件无法读取；
    /// * [`LrcParserError::EmptyInput`] - 文件中没有任何非空行，
    ///   此时文档保持为空。
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.clear_result();
        self.path = Some(path.to_path_buf());

        let lines = text_file::read_lines(path)?;
        self.document = self.parser.parse(&lines)?;
        Ok(())
    }

    /// 重新加载当前文件。
    ///
    /// # 错误
    /// 除 [`load`](Self::load) 的错误外，尚未加载过文件时返回
    /// [`LrcParserError::NoFileLoaded`]。
    pub fn reload(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(LrcParserError::NoFileLoaded)?;
        self.load(path)
    }

    /// 当前加载文件的文件名（不含路径）。
    #[must_use]
    pub fn file_name(&self) -> Option<Cow<'_, str>> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy())
    }

    /// 假定已解析的文本是 `source` 编码，将其整体转换为 UTF-8。
    ///
    /// 委托给 [`LyricDocument::recode`]；详见其文档中关于重复调用的
    /// 说明。
    pub fn change_encoding(&mut self, source: Encoding) -> Result<()> {
        self.document.recode(source)
    }

    /// 所有标签行的文本，按源文件顺序。
    #[must_use]
    pub fn tags(&self) -> Vec<Cow<'_, str>> {
        self.document.tags()
    }

    /// 所有带时间戳的歌词行，按源文件顺序。
    #[must_use]
    pub fn text(&self) -> &[LyricLine] {
        self.document.text()
    }

    /// 当前文档是否为增强型 LRC。
    #[must_use]
    pub fn is_enhanced(&self) -> bool {
        self.document.is_enhanced()
    }

    /// 清空当前的解析结果。
    pub fn clear_result(&mut self) {
        self.document.clear();
    }

    /// 当前的解析结果。
    #[must_use]
    pub fn document(&self) -> &LyricDocument {
        &self.document
    }
}
