//! # KPP 物种行解析器
//!
//! 解析 `#DEFFIX` 与 `#DEFVAR` 区块中的物种定义行。
//!
//! ## 行格式
//! ```text
//! NAME = description ;
//! ```
//! 描述部分（元素组成）目前不使用。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `models/species.rs`, `batch/report.rs`

use crate::batch::BatchReport;
use crate::error::{KppError, Result};
use crate::models::{ConfigLine, Section, Species};

/// 物种在 MICM 中的角色
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeciesRole {
    /// `#DEFFIX`: 常量示踪物
    Fixed,
    /// `#DEFVAR`: 可变物种，带绝对容差
    Variable { tolerance: f64 },
}

/// 解析单个物种行
pub fn parse_species_line(line: &str, role: SpeciesRole) -> Result<Species> {
    let parts: Vec<&str> = line.split('=').collect();
    if parts.len() != 2 {
        return Err(KppError::section(format!(
            "expected exactly one '=', found {} in '{}'",
            parts.len() - 1,
            line.trim()
        )));
    }

    let name = parts[0].trim();
    if name.is_empty() {
        return Err(KppError::section(format!(
            "missing species name in '{}'",
            line.trim()
        )));
    }

    Ok(match role {
        SpeciesRole::Fixed => Species::constant(name),
        SpeciesRole::Variable { tolerance } => Species::variable(name, tolerance),
    })
}

/// 翻译整个物种区块
pub fn translate_species(
    section: Section,
    lines: &[ConfigLine],
    role: SpeciesRole,
) -> BatchReport<Species> {
    BatchReport::translate(section, lines, |text| parse_species_line(text, role))
}
