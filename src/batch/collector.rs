//! # KPP 配置文件收集器
//!
//! 在单个目录（不递归）中收集机理名前缀匹配的 KPP 配置文件，
//! 并读取为带来源信息的 `ConfigLine` 序列。
//!
//! ## 功能
//! - 依次匹配 `<name>*.kpp`, `<name>*.spc`, `<name>*.eqn`, `<name>*.def`
//! - 同一后缀内按路径排序，保证多次运行结果一致
//! - 去除制表符与 `{ ... }` 注释（可跨行），丢弃空行
//! - 去除文件开头的 BOM；非 UTF-8 字节替换为 U+FFFD 并记录警告
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{KppError, Result};
use crate::models::ConfigLine;

use log::{debug, info, warn};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// KPP 配置文件后缀，按读取顺序
pub const KPP_SUFFIXES: [&str; 4] = [".kpp", ".spc", ".eqn", ".def"];

/// 部分编辑器写在文件开头的 UTF-8 BOM
const BYTE_ORDER_MARK: char = '\u{feff}';

/// KPP 配置文件收集器
pub struct ConfigCollector {
    /// 输入目录
    dir: PathBuf,
    /// 机理名前缀
    name: String,
}

impl ConfigCollector {
    /// 创建新的收集器
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// 各后缀对应的文件名匹配模式
    pub fn patterns(&self) -> Vec<String> {
        let prefix = glob::Pattern::escape(&self.name);
        KPP_SUFFIXES
            .iter()
            .map(|suffix| format!("{}*{}", prefix, suffix))
            .collect()
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(KppError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let candidates: Vec<(String, PathBuf)> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let name = e.file_name().to_str()?.to_string();
                Some((name, e.path().to_path_buf()))
            })
            .collect();

        let mut files = Vec::new();
        for pattern in self.patterns() {
            let glob_pattern = glob::Pattern::new(&pattern).map_err(|e| {
                KppError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
            })?;

            let mut matched: Vec<PathBuf> = candidates
                .iter()
                .filter(|(name, _)| glob_pattern.matches(name))
                .map(|(_, path)| path.clone())
                .collect();
            matched.sort();
            debug!("{} -> {:?}", pattern, matched);
            files.extend(matched);
        }

        Ok(files)
    }

    /// 读取所有匹配文件的有效行
    pub fn read_lines(&self) -> Result<Vec<ConfigLine>> {
        let files = self.collect()?;
        if files.is_empty() {
            return Err(KppError::MissingInput {
                pattern: self
                    .dir
                    .join(format!("{}*{{{}}}", self.name, KPP_SUFFIXES.join(",")))
                    .display()
                    .to_string(),
            });
        }

        let mut lines = Vec::new();
        for file in &files {
            let file_lines = read_config_file(file)?;
            info!("read {} line(s) from {}", file_lines.len(), file.display());
            lines.extend(file_lines);
        }
        Ok(lines)
    }
}

/// 读取单个配置文件
pub fn read_config_file(path: &Path) -> Result<Vec<ConfigLine>> {
    let bytes = fs::read(path).map_err(|e| KppError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        warn!("{}: invalid UTF-8 replaced with U+FFFD", path.display());
    }

    let source = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");

    Ok(parse_config_content(&content, source))
}

/// 从字符串内容提取有效行
pub fn parse_config_content(content: &str, source: &str) -> Vec<ConfigLine> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut in_comment = false;
    let mut lines = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let text = strip_comments(&raw.replace('\t', ""), &mut in_comment);
        if text.trim().is_empty() {
            continue;
        }
        debug!("{}:{}: {}", source, i + 1, text.trim());
        lines.push(ConfigLine::new(text, source, i + 1));
    }

    lines
}

/// 去除 `{ ... }` 注释，`in_comment` 跨行保持状态
fn strip_comments(line: &str, in_comment: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match (c, *in_comment) {
            ('{', false) => *in_comment = true,
            ('}', true) => *in_comment = false,
            (_, false) => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_content_drops_blanks_tabs_and_comments() {
        let content = "#DEFVAR\n\n\tO3\t= 3O;  { ozone }\n{ multi\nline comment }\n   \nO = O;\n";
        let lines = parse_config_content(content, "a.spc");
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["#DEFVAR", "O3= 3O;  ", "O = O;"]);
        assert_eq!(lines[1].line_number, 3);
        assert_eq!(lines[2].origin(), "a.spc:7");
    }

    #[test]
    fn test_parse_content_strips_byte_order_mark() {
        let content = "\u{feff}#EQUATIONS\n<R1> O2 + hv = 2O : SUN;\n";
        let lines = parse_config_content(content, "a.eqn");
        assert_eq!(lines[0].text, "#EQUATIONS");
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_invalid_utf8_in_comment_is_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chap.spc");
        fs::write(&path, b"#DEFVAR { caf\xe9 }\nO3 = 3O;\n").unwrap();

        let lines = read_config_file(&path).unwrap();
        let texts: Vec<_> = lines.iter().map(|l| l.text.trim()).collect();
        assert_eq!(texts, vec!["#DEFVAR", "O3 = 3O;"]);
    }

    #[test]
    fn test_collect_orders_by_suffix_then_name() {
        let dir = tempdir().unwrap();
        for name in [
            "chap.def",
            "chap_b.eqn",
            "chap_a.eqn",
            "chap.spc",
            "chap.kpp",
            "other.eqn",
            "chap.txt",
        ] {
            fs::write(dir.path().join(name), "#ATOMS\n").unwrap();
        }
        fs::create_dir(dir.path().join("chap_sub.eqn")).unwrap();

        let files = ConfigCollector::new(dir.path(), "chap").collect().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["chap.kpp", "chap.spc", "chap_a.eqn", "chap_b.eqn", "chap.def"]
        );
    }

    #[test]
    fn test_no_recursion() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("chap.eqn"), "#EQUATIONS\n").unwrap();

        let result = ConfigCollector::new(dir.path(), "chap").read_lines();
        assert!(matches!(result, Err(KppError::MissingInput { .. })));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let result = ConfigCollector::new(dir.path().join("absent"), "chap").collect();
        assert!(matches!(result, Err(KppError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_prefix_is_matched_literally() {
        let collector = ConfigCollector::new("kpp", "mech[1]");
        assert_eq!(collector.patterns()[0], "mech[[]1[]]*.kpp");
    }
}
