//! 用于演示 `lrc-parser` 库的核心功能。
//!
//! ## 如何运行
//!
//! ```bash
//! cargo run --example demo -- <LRC 文件路径> [源编码]
//! ```
//!
//! 第二个参数指定源文件编码（例如 `gbk`），省略时不做转换。

use lrc_parser_rs::{Encoding, LrcHelper, error::Result};
use tracing::{Level, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("用法: demo <LRC 文件路径> [源编码]");
        return Ok(());
    };

    let mut helper = LrcHelper::from_file(&path)?;

    if let Some(source) = args.next() {
        let source = source.parse::<Encoding>().unwrap_or(Encoding::Unknown);
        info!("将歌词文本从 {source} 转换为 UTF-8...");
        helper.change_encoding(source)?;
    }

    if let Some(name) = helper.file_name() {
        info!("文件: {name}");
    }
    info!("是否为增强型 LRC: {}", helper.is_enhanced());

    for tag in helper.tags() {
        println!("[{tag}]");
    }
    for line in helper.text() {
        let ms = line.start_ms().unwrap_or(0);
        println!(
            "[{:02}:{:02}.{:03}] {}",
            ms / 60_000,
            ms % 60_000 / 1000,
            ms % 1000,
            line.text()
        );
    }

    for warning in helper.document().warnings() {
        info!("解析告警: {warning}");
    }

    Ok(())
}
