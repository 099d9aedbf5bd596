//! # MICM 配置文档
//!
//! `species.json` 与 `reactions.json` 的顶层结构，均以 `camp-data` 为键。
//!
//! ```text
//! species.json   { "camp-data": [ species... ] }
//! reactions.json { "camp-data": [ { "name", "type": "MECHANISM", "reactions": [...] } ] }
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 和 `export.rs` 使用
//! - 使用 `models/species.rs`, `models/reaction.rs`

use super::{Reaction, Species};
use serde::Serialize;

/// 物种文档
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesDocument {
    #[serde(rename = "camp-data")]
    pub entries: Vec<Species>,
}

impl SpeciesDocument {
    /// 固定物种在前，可变物种在后，组内保持输入顺序
    pub fn assemble(fixed: Vec<Species>, variable: Vec<Species>) -> Self {
        let mut entries = fixed;
        entries.extend(variable);
        SpeciesDocument { entries }
    }
}

/// 机理类型标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MechanismType {
    #[serde(rename = "MECHANISM")]
    Mechanism,
}

/// 单个机理
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mechanism {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MechanismType,
    pub reactions: Vec<Reaction>,
}

/// 反应文档
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MechanismDocument {
    #[serde(rename = "camp-data")]
    pub mechanisms: Vec<Mechanism>,
}

impl MechanismDocument {
    pub fn assemble(name: impl Into<String>, reactions: Vec<Reaction>) -> Self {
        MechanismDocument {
            mechanisms: vec![Mechanism {
                name: name.into(),
                kind: MechanismType::Mechanism,
                reactions,
            }],
        }
    }
}
