//! LRC 解析器核心模块

pub mod lrc_parser;
pub mod types;
pub mod utils;

pub use lrc_parser::{LrcParser, time_to_ms};
pub use types::{EnhancedState, LyricDocument, LyricLine};
