//! # 解析器模块
//!
//! KPP 配置文本的区块切分、物种解析、方程解析与速率表达式解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型与 `batch/report.rs`
//! - 子模块: sections, species, equation, rate

pub mod equation;
pub mod rate;
pub mod sections;
pub mod species;

pub use equation::translate_equations;
pub use sections::{split_by_section, Sections};
pub use species::{translate_species, SpeciesRole};
