//! 定义了 LRC 解析结果的核心数据类型。
//!
//! 行文本以原始字节存储：分类用的正则都是纯 ASCII 模式，可以直接在
//! 字节上运行，而 GBK 编码的文件在调用 [`LyricDocument::recode`] 之前
//! 不包含合法的 UTF-8 文本。需要字符串视图时按需（有损）解码。

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    encoding::{self, Encoding},
    error::Result,
};

/// 歌词文件中的一行，标签或带时间戳的歌词文本。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LyricLine {
    /// 元数据标签行，保存方括号内的原始文本（例如 `ar: Artist Name`）。
    Tag {
        /// 标签的原始字节
        text: Vec<u8>,
    },
    /// 带时间戳的歌词行。
    Timed {
        /// 行的开始时间（毫秒）
        start_ms: u64,
        /// 歌词文本的原始字节
        text: Vec<u8>,
    },
}

impl LyricLine {
    /// 构造一个标签行。
    pub fn tag(text: impl Into<Vec<u8>>) -> Self {
        LyricLine::Tag { text: text.into() }
    }

    /// 构造一个带时间戳的歌词行。
    pub fn timed(start_ms: u64, text: impl Into<Vec<u8>>) -> Self {
        LyricLine::Timed {
            start_ms,
            text: text.into(),
        }
    }

    /// 该行是否为元数据标签。
    #[must_use]
    pub fn is_tag(&self) -> bool {
        matches!(self, LyricLine::Tag { .. })
    }

    /// 该行是否为带时间戳的歌词文本。
    #[must_use]
    pub fn is_timed(&self) -> bool {
        matches!(self, LyricLine::Timed { .. })
    }

    /// 行的开始时间；标签行返回 `None`。
    #[must_use]
    pub fn start_ms(&self) -> Option<u64> {
        match self {
            LyricLine::Tag { .. } => None,
            LyricLine::Timed { start_ms, .. } => Some(*start_ms),
        }
    }

    /// 行文本的原始字节。
    #[must_use]
    pub fn raw_text(&self) -> &[u8] {
        match self {
            LyricLine::Tag { text } | LyricLine::Timed { text, .. } => text,
        }
    }

    /// 行文本的字符串视图。
    ///
    /// 对尚未转换编码的 GBK 文本，非 ASCII 字节会被替换字符顶替；
    /// 先调用 [`LyricDocument::recode`] 可得到精确的文本。
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.raw_text())
    }
}

/// 增强型（逐字时间戳）检测状态。
///
/// 在第一条歌词行上判定一次，之后对整个文档保持不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnhancedState {
    /// 尚未解析到任何歌词行。
    #[default]
    Unknown,
    /// 第一条歌词行包含行内逐字时间戳。
    Enhanced,
    /// 第一条歌词行不包含行内逐字时间戳。
    Plain,
}

/// 一次解析得到的歌词文档：标签前缀 + 歌词行后缀。
///
/// 按构造顺序保证：一旦出现歌词行，后续不会再有标签行。
#[derive(Debug, Clone, Default)]
pub struct LyricDocument {
    lines: Vec<LyricLine>,
    enhanced: EnhancedState,
    warnings: Vec<String>,
}

impl LyricDocument {
    /// 创建一个空文档。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 文档中的全部行，标签在前、歌词在后，保持源文件顺序。
    #[must_use]
    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    /// 所有标签行的文本，按源文件顺序。
    #[must_use]
    pub fn tags(&self) -> Vec<Cow<'_, str>> {
        self.lines
            .iter()
            .take_while(|line| line.is_tag())
            .map(LyricLine::text)
            .collect()
    }

    /// 所有带时间戳的歌词行，按源文件顺序（不按时间排序）。
    #[must_use]
    pub fn text(&self) -> &[LyricLine] {
        let first_timed = self
            .lines
            .iter()
            .position(LyricLine::is_timed)
            .unwrap_or(self.lines.len());
        &self.lines[first_timed..]
    }

    /// 文档是否为增强型 LRC。
    #[must_use]
    pub fn is_enhanced(&self) -> bool {
        self.enhanced == EnhancedState::Enhanced
    }

    /// 当前的增强型检测状态。
    #[must_use]
    pub fn enhanced_state(&self) -> EnhancedState {
        self.enhanced
    }

    /// 文档是否为空。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 解析过程中记录的非致命告警。
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 清空文档，恢复到未解析状态。
    pub fn clear(&mut self) {
        self.lines.clear();
        self.enhanced = EnhancedState::Unknown;
        self.warnings.clear();
    }

    /// 将每一行（包括标签行）的文本从 `source` 编码就地转换为 UTF-8。
    ///
    /// 空文本不做处理。这是一次性的破坏性操作：文档不记录自身的
    /// "当前"编码，对已经转换过的文本以另一种源编码再次调用会产生
    /// 乱码。
    ///
    /// # 错误
    /// 任一行转换失败时返回错误，此时已转换的行保持转换后的状态。
    pub fn recode(&mut self, source: Encoding) -> Result<()> {
        for line in &mut self.lines {
            let text = match line {
                LyricLine::Tag { text } | LyricLine::Timed { text, .. } => text,
            };
            if text.is_empty() {
                continue;
            }
            *text = encoding::convert_encoding(text, source, Encoding::Utf8)?;
        }
        Ok(())
    }

    pub(crate) fn push_line(&mut self, line: LyricLine) {
        self.lines.push(line);
    }

    pub(crate) fn set_enhanced_state(&mut self, state: EnhancedState) {
        self.enhanced = state;
    }

    pub(crate) fn push_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}
