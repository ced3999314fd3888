//! # LRC 格式解析器
//!
//! 对规范化后的行序列做单遍、只进的三阶段扫描：先收集标签行，
//! 再解析带时间戳的歌词行，遇到无法识别的行后丢弃剩余内容。
//! 是否为增强型（逐字时间戳）LRC 只在第一条歌词行上判定一次。
//!
//! 四个解析模式在构造时编译一次，由解析器自身持有。由于歌词文本
//! 可能是 GBK 字节，所有模式都以关闭 Unicode 的字节正则表示。

use regex::bytes::{Captures, Regex};
use tracing::warn;

use crate::{
    error::{LrcParserError, Result},
    parser::{
        types::{EnhancedState, LyricDocument, LyricLine},
        utils,
    },
};

/// 将分钟、秒、毫秒三个分量合成总毫秒数。
#[must_use]
pub const fn time_to_ms(minutes: u64, seconds: u64, milliseconds: u64) -> u64 {
    (minutes * 60 + seconds) * 1000 + milliseconds
}

/// 扫描阶段。阶段只会向前推进，不会回退。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsePhase {
    /// 文件开头的标签行。
    Tags,
    /// 带时间戳的歌词行。
    Timed,
    /// 遇到无法识别的行，剩余内容全部丢弃。
    Done,
}

/// LRC 行分类与解析器。
#[derive(Debug)]
pub struct LrcParser {
    /// 匹配标签行，捕获方括号内的全部文本
    tag_re: Regex,
    /// 匹配歌词行，捕获分/秒/毫秒、可选的未用子字段和行尾文本
    timed_re: Regex,
    /// 匹配行内的逐字时间标签，例如 `<00:05.123>`
    inline_re: Regex,
    /// 匹配单独的时间标签，`[mm:ss.mmm]` 或 `<mm:ss.mmm>`
    time_tag_re: Regex,
}

impl Default for LrcParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LrcParser {
    /// 创建解析器并编译全部解析模式。
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag_re: Regex::new(r"(?-u)^\[(.*)\]$").expect("未能编译标签行模式"),
            timed_re: Regex::new(
                r"(?-u)^\[(\d{1,2}):(\d{1,2})\.(\d{2,3})(?:\.(\d{2,3}))?\](.*)$",
            )
            .expect("未能编译歌词行模式"),
            inline_re: Regex::new(r"(?-u)<([^>]+)>").expect("未能编译逐字时间标签模式"),
            time_tag_re: Regex::new(
                r"(?-u)^[\[<](\d{1,2}):(\d{1,2})\.(\d{2,3})(?:\.(\d{2,3}))?[\]>]$",
            )
            .expect("未能编译时间标签模式"),
        }
    }

    /// 解析一个有序的行序列，产出 [`LyricDocument`]。
    ///
    /// 行在解析前会先做 BOM/空白规范化。格式错误的行不会使已累积的
    /// 结果失效：解析在该行提前结束，并在文档中记录一条告警。
    ///
    /// # 错误
    /// * [`LrcParserError::EmptyInput`] - 输入序列为空。
    /// * [`LrcParserError::ParseInt`] - 时间戳分量无法按十进制整数解析；
    ///   模式已保证捕获内容只含数字，出现该错误说明内部逻辑被破坏。
    pub fn parse<L: AsRef<[u8]>>(&self, raw_lines: &[L]) -> Result<LyricDocument> {
        if raw_lines.is_empty() {
            return Err(LrcParserError::EmptyInput);
        }

        let mut document = LyricDocument::new();
        let mut phase = ParsePhase::Tags;
        let mut dropped = 0usize;
        let mut first_dropped: Option<(usize, String)> = None;

        for (index, raw_line) in raw_lines.iter().enumerate() {
            let line = utils::strip_bom_and_trim(raw_line.as_ref());

            if phase == ParsePhase::Tags {
                if let Some(caps) = self.tag_re.captures(line) {
                    let tag = caps.get(1).map_or(&b""[..], |m| m.as_bytes());
                    document.push_line(LyricLine::tag(tag));
                    continue;
                }
                phase = ParsePhase::Timed;
            }

            if phase == ParsePhase::Timed {
                if let Some(caps) = self.timed_re.captures(line) {
                    self.push_timed_line(&mut document, &caps)?;
                    continue;
                }
                phase = ParsePhase::Done;
            }

            dropped += 1;
            if first_dropped.is_none() {
                first_dropped = Some((index + 1, preview(line)));
            }
        }

        if let Some((line_number, content)) = first_dropped {
            let warning = format!(
                "第 {line_number} 行无法识别，解析提前结束，共丢弃 {dropped} 行: '{content}'"
            );
            warn!("{warning}");
            document.push_warning(warning);
        }

        Ok(document)
    }

    /// 解析一个单独的时间标签（`[mm:ss.mmm]` 或 `<mm:ss.mmm>`）为总毫秒数。
    ///
    /// 不符合时间标签形状的输入返回 `Ok(None)`。
    pub fn parse_time_tag(&self, tag: &[u8]) -> Result<Option<u64>> {
        let Some(caps) = self.time_tag_re.captures(tag) else {
            return Ok(None);
        };
        let minutes = parse_component(&caps, 1)?;
        let seconds = parse_component(&caps, 2)?;
        let milliseconds = parse_component(&caps, 3)?;
        Ok(Some(time_to_ms(minutes, seconds, milliseconds)))
    }

    /// 解析一条已匹配的歌词行并追加到文档。
    fn push_timed_line(&self, document: &mut LyricDocument, caps: &Captures<'_>) -> Result<()> {
        let minutes = parse_component(caps, 1)?;
        let seconds = parse_component(caps, 2)?;
        let milliseconds = parse_component(caps, 3)?;
        let start_ms = time_to_ms(minutes, seconds, milliseconds);

        let text = caps.get(5).map_or(&b""[..], |m| m.as_bytes()).trim_ascii();

        // 增强型判定只在第一条歌词行上进行，此后保持不变
        if document.enhanced_state() == EnhancedState::Unknown {
            let state = if self.inline_re.is_match(text) {
                EnhancedState::Enhanced
            } else {
                EnhancedState::Plain
            };
            document.set_enhanced_state(state);
        }

        let text = match document.enhanced_state() {
            EnhancedState::Enhanced => self.rebuild_enhanced_text(text),
            _ => text.to_vec(),
        };

        document.push_line(LyricLine::timed(start_ms, text));
        Ok(())
    }

    /// 从增强型歌词行中剥离逐字时间标签，重建显示文本。
    ///
    /// 每个标签后到下一个标签（或行尾）之间的片段视为一个词；英文词
    /// 之间补一个空格，最后去掉可能多出的一个尾随空白。逐字时间戳
    /// 本身不保留。
    fn rebuild_enhanced_text(&self, text: &[u8]) -> Vec<u8> {
        let markers: Vec<_> = self.inline_re.find_iter(text).collect();
        let mut result = Vec::with_capacity(text.len());

        for (i, marker) in markers.iter().enumerate() {
            let word_end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            let word = text[marker.end()..word_end].trim_ascii();
            result.extend_from_slice(word);
            if utils::is_english_word(word) {
                result.push(b' ');
            }
        }

        if result.last().is_some_and(|byte| byte.is_ascii_whitespace()) {
            result.pop();
        }

        result
    }
}

/// 把一个捕获组按十进制整数解析。
fn parse_component(caps: &Captures<'_>, group: usize) -> Result<u64> {
    let bytes = caps.get(group).map_or(&b""[..], |m| m.as_bytes());
    Ok(std::str::from_utf8(bytes)?.parse::<u64>()?)
}

/// 截取一行的前 50 个字符用于告警信息。
fn preview(line: &[u8]) -> String {
    String::from_utf8_lossy(line).chars().take(50).collect()
}
