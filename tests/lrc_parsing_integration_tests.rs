//! LRC 解析的端到端集成测试。
//!
//! 测试文件写入临时目录，覆盖 UTF-8 与 GBK 两种编码的
//! 标准 LRC 和增强型 LRC 文件。

use std::{fs, path::PathBuf};

use lrc_parser_rs::{Encoding, LrcHelper, LrcParserError, LyricLine};
use tempfile::TempDir;
use test_log::test;

/// 把行内容以指定编码写入临时目录下的文件。
fn write_lyric_file(dir: &TempDir, name: &str, lines: &[&str], encoding: Encoding) -> PathBuf {
    let path = dir.path().join(name);
    let content = lines.join("\n");
    let bytes = match encoding {
        Encoding::Utf8 => content.into_bytes(),
        Encoding::Gbk => {
            let (encoded, _, had_unmappable) = encoding_rs::GBK.encode(&content);
            assert!(!had_unmappable, "测试内容应能用 GBK 表示");
            encoded.into_owned()
        }
        other => panic!("测试不支持以 {other} 编码写入"),
    };
    fs::write(&path, bytes).unwrap();
    path
}

const NORMAL_LRC: &[&str] = &[
    " [t1: Test tag] ",
    " [标签: 测试标签] ",
    " [00:00.001] Test lyric",
    " [00:01.010] 歌词测试",
];

const ENHANCED_LRC: &[&str] = &[
    " [t1: Tags Test] ",
    " [标签: 诗意歌词测试] ",
    "[00:05.123] <00:05.123> And <00:05.300> I <00:05.450> remember <00:06.000> all <00:06.200> my <00:06.500> childhood <00:07.000> dreams",
    "[00:08.500] <00:08.500> I <00:08.650> find <00:08.800> it <00:09.000> hard <00:09.250> to <00:09.400> get <00:09.600> them <00:09.800> out <00:10.000> of <00:10.150> my <00:10.300> mind",
    "[00:15.000] <00:15.000> 窗 <00:15.200> 透 <00:15.400> 初 <00:15.600> 晓 <00:16.000> 日 <00:16.200> 照 <00:16.400> 西 <00:16.600> 桥 <00:17.000> 云 <00:17.200> 自 <00:17.400> 摇",
    "[00:20.000] <00:20.000> 想 <00:20.200> 你 <00:20.400> 当 <00:20.600> 年 <00:21.000> 荷 <00:21.200> 风 <00:21.400> 微 <00:21.600> 摆 <00:22.000> 的 <00:22.200> 衣 <00:22.400> 角",
];

fn expected_normal_text() -> Vec<LyricLine> {
    vec![
        LyricLine::timed(1, "Test lyric"),
        LyricLine::timed(1010, "歌词测试"),
    ]
}

fn expected_enhanced_text() -> Vec<LyricLine> {
    vec![
        LyricLine::timed(5123, "And I remember all my childhood dreams"),
        LyricLine::timed(8500, "I find it hard to get them out of my mind"),
        LyricLine::timed(15000, "窗透初晓日照西桥云自摇"),
        LyricLine::timed(20000, "想你当年荷风微摆的衣角"),
    ]
}

#[test]
fn test_normal_lrc_utf8() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "test.lrc", NORMAL_LRC, Encoding::Utf8);

    let helper = LrcHelper::from_file(&path).unwrap();

    assert!(!helper.is_enhanced());
    assert_eq!(helper.tags(), vec!["t1: Test tag", "标签: 测试标签"]);
    assert_eq!(helper.text(), expected_normal_text());
}

#[test]
fn test_normal_lrc_gbk() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "test_gbk.lrc", NORMAL_LRC, Encoding::Gbk);

    let mut helper = LrcHelper::from_file(&path).unwrap();
    helper.change_encoding(Encoding::Gbk).unwrap();

    assert!(!helper.is_enhanced());
    assert_eq!(helper.tags(), vec!["t1: Test tag", "标签: 测试标签"]);
    assert_eq!(helper.text(), expected_normal_text());
}

#[test]
fn test_enhanced_lrc_utf8() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "test_enhanced.lrc", ENHANCED_LRC, Encoding::Utf8);

    let helper = LrcHelper::from_file(&path).unwrap();

    assert!(helper.is_enhanced());
    assert_eq!(helper.tags(), vec!["t1: Tags Test", "标签: 诗意歌词测试"]);
    assert_eq!(helper.text(), expected_enhanced_text());
}

#[test]
fn test_enhanced_lrc_gbk() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "test_enhanced_gbk.lrc", ENHANCED_LRC, Encoding::Gbk);

    let mut helper = LrcHelper::from_file(&path).unwrap();
    helper.change_encoding(Encoding::Gbk).unwrap();

    assert!(helper.is_enhanced());
    assert_eq!(helper.tags(), vec!["t1: Tags Test", "标签: 诗意歌词测试"]);
    assert_eq!(helper.text(), expected_enhanced_text());
}

#[test]
fn test_empty_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.lrc");
    fs::write(&path, "\n  \n\t\n").unwrap();

    let mut helper = LrcHelper::new();
    let result = helper.load(&path);

    assert!(matches!(result, Err(LrcParserError::EmptyInput)));
    assert!(helper.document().is_empty());
    assert!(helper.tags().is_empty());
    assert!(helper.text().is_empty());
    assert!(!helper.is_enhanced());
}

#[test]
fn test_malformed_suffix_keeps_prefix() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(
        &dir,
        "malformed.lrc",
        &[
            "[ar: Artist]",
            "[00:01.000] kept line",
            "not a lyric line",
            "[00:02.000] dropped line",
        ],
        Encoding::Utf8,
    );

    let helper = LrcHelper::from_file(&path).unwrap();

    assert_eq!(helper.tags(), vec!["ar: Artist"]);
    assert_eq!(helper.text(), vec![LyricLine::timed(1000, "kept line")]);
    assert_eq!(helper.document().warnings().len(), 1);
}

#[test]
fn test_file_name_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "成全.lrc", NORMAL_LRC, Encoding::Utf8);

    let mut helper = LrcHelper::from_file(&path).unwrap();
    assert_eq!(helper.file_name().as_deref(), Some("成全.lrc"));

    // 重新加载会先清空旧结果，结果应与首次加载一致
    helper.reload().unwrap();
    assert_eq!(helper.text(), expected_normal_text());
}

#[test]
fn test_reload_without_load_fails() {
    let mut helper = LrcHelper::new();
    assert!(matches!(
        helper.reload(),
        Err(LrcParserError::NoFileLoaded)
    ));
}

#[test]
fn test_load_replaces_previous_result() {
    let dir = TempDir::new().unwrap();
    let normal = write_lyric_file(&dir, "normal.lrc", NORMAL_LRC, Encoding::Utf8);
    let enhanced = write_lyric_file(&dir, "enhanced.lrc", ENHANCED_LRC, Encoding::Utf8);

    let mut helper = LrcHelper::from_file(&normal).unwrap();
    assert!(!helper.is_enhanced());

    helper.load(&enhanced).unwrap();
    assert!(helper.is_enhanced());
    assert_eq!(helper.file_name().as_deref(), Some("enhanced.lrc"));
    assert_eq!(helper.text(), expected_enhanced_text());
}

#[test]
fn test_clear_result() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "test.lrc", NORMAL_LRC, Encoding::Utf8);

    let mut helper = LrcHelper::from_file(&path).unwrap();
    helper.clear_result();

    assert!(helper.document().is_empty());
    assert!(!helper.is_enhanced());
    // 文件路径保持不变，仍可重新加载
    helper.reload().unwrap();
    assert_eq!(helper.text(), expected_normal_text());
}

#[test]
fn test_double_recode_corrupts_text() {
    let dir = TempDir::new().unwrap();
    let path = write_lyric_file(&dir, "gbk.lrc", NORMAL_LRC, Encoding::Gbk);

    let mut helper = LrcHelper::from_file(&path).unwrap();
    helper.change_encoding(Encoding::Gbk).unwrap();
    let converted: Vec<LyricLine> = helper.text().to_vec();

    // 文档不记录自身编码，重复转换会破坏已转换的文本
    if helper.change_encoding(Encoding::Gbk).is_ok() {
        assert_ne!(helper.text(), converted);
    }
}
