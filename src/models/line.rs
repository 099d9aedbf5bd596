//! # 配置行与区块数据模型
//!
//! `ConfigLine` 保存一行 KPP 配置文本及其来源（文件、行号），
//! `Section` 表示四类可识别的 KPP 区块。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 和 `parsers/` 使用
//! - 无外部模块依赖

use std::fmt;

/// KPP 配置中的一行文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    /// 去除制表符后的行文本
    pub text: String,
    /// 来源文件（显示用）
    pub source: String,
    /// 来源文件中的行号（从 1 开始）
    pub line_number: usize,
}

impl ConfigLine {
    pub fn new(text: impl Into<String>, source: impl Into<String>, line_number: usize) -> Self {
        ConfigLine {
            text: text.into(),
            source: source.into(),
            line_number,
        }
    }

    /// 来源位置，形如 `file.eqn:12`
    pub fn origin(&self) -> String {
        format!("{}:{}", self.source, self.line_number)
    }
}

/// 可识别的 KPP 区块
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Atoms,
    DefVar,
    DefFix,
    Equations,
}

impl Section {
    /// 所有区块，按日志输出顺序
    pub const ALL: [Section; 4] = [
        Section::Atoms,
        Section::DefVar,
        Section::DefFix,
        Section::Equations,
    ];

    /// `#` 之后的区块名
    pub fn name(&self) -> &'static str {
        match self {
            Section::Atoms => "ATOMS",
            Section::DefVar => "DEFVAR",
            Section::DefFix => "DEFFIX",
            Section::Equations => "EQUATIONS",
        }
    }

    /// 按区块名精确匹配（区分大小写）
    pub fn from_name(token: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.name() == token)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name())
    }
}
