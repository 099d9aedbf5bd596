//! # KPP 区块切分
//!
//! 单次正向扫描：遇到可识别的 `#NAME` 标记行即打开对应区块，
//! 之后的行追加到当前区块，直到下一个标记行或输入结束。
//!
//! ## 规则
//! - 标记名取 `#` 之后到第一个空白字符为止的文本，精确匹配（区分大小写）
//! - 未识别的标记（如 `#INCLUDE`, `#INLINE`）关闭当前区块，其后的行被忽略
//! - 第一个标记之前的行被忽略
//! - 区块不跨文件延续：每个文件开头均无打开的区块
//! - 同一区块可出现多次，按输入顺序拼接
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `models/line.rs`

use crate::models::{ConfigLine, Section};
use log::debug;

/// 按区块归类后的配置行
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    atoms: Vec<ConfigLine>,
    defvar: Vec<ConfigLine>,
    deffix: Vec<ConfigLine>,
    equations: Vec<ConfigLine>,
}

impl Sections {
    /// 获取某区块的所有行（未出现的区块返回空切片）
    pub fn get(&self, section: Section) -> &[ConfigLine] {
        match section {
            Section::Atoms => &self.atoms,
            Section::DefVar => &self.defvar,
            Section::DefFix => &self.deffix,
            Section::Equations => &self.equations,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut Vec<ConfigLine> {
        match section {
            Section::Atoms => &mut self.atoms,
            Section::DefVar => &mut self.defvar,
            Section::DefFix => &mut self.deffix,
            Section::Equations => &mut self.equations,
        }
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_empty())
    }
}

/// 若该行为标记行，返回 `#` 之后的标记名
fn marker_token(text: &str) -> Option<&str> {
    let rest = text.trim_start().strip_prefix('#')?;
    Some(rest.split_whitespace().next().unwrap_or(""))
}

/// 将配置行切分到各区块
pub fn split_by_section(lines: &[ConfigLine]) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<Section> = None;
    let mut source: Option<&str> = None;

    for line in lines {
        if source != Some(line.source.as_str()) {
            if let Some(section) = current.take() {
                debug!("{}: new file closes section {}", line.origin(), section);
            }
            source = Some(line.source.as_str());
        }

        if let Some(token) = marker_token(&line.text) {
            current = Section::from_name(token);
            match current {
                Some(section) => debug!("{}: opening section {}", line.origin(), section),
                None => debug!("{}: ignoring block '#{}'", line.origin(), token),
            }
            continue;
        }

        if let Some(section) = current {
            sections.get_mut(section).push(line.clone());
        }
    }

    sections
}
