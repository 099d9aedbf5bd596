//! # 数据模型模块
//!
//! 定义 KPP 输入行和 MICM 输出文档的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/` 和 `commands/` 使用
//! - 子模块: line, species, reaction, document

pub mod document;
pub mod line;
pub mod reaction;
pub mod species;

pub use document::{MechanismDocument, SpeciesDocument};
pub use line::{ConfigLine, Section};
pub use reaction::{Product, RateConstant, RateParameters, Reactant, Reaction, SpeciesMap};
pub use species::{Species, DEFAULT_ABSOLUTE_TOLERANCE};
