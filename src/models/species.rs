//! # MICM 物种数据模型
//!
//! 一个 KPP `#DEFFIX`/`#DEFVAR` 行对应一个 `Species`。
//! 固定物种带 `tracer type`，可变物种带 `absolute tolerance`，二者互斥。
//!
//! ## 依赖关系
//! - 被 `parsers/species.rs` 和 `models/document.rs` 使用

use serde::Serialize;

/// 可变物种的默认绝对容差
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1.0e-12;

/// MICM 物种类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeciesType {
    #[serde(rename = "CHEM_SPEC")]
    ChemSpec,
}

/// MICM 示踪物类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TracerType {
    #[serde(rename = "CONSTANT")]
    Constant,
}

/// MICM 物种条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Species {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: SpeciesType,

    #[serde(rename = "tracer type", skip_serializing_if = "Option::is_none")]
    pub tracer_type: Option<TracerType>,

    #[serde(
        rename = "absolute tolerance",
        skip_serializing_if = "Option::is_none"
    )]
    pub absolute_tolerance: Option<f64>,
}

impl Species {
    /// 固定（背景）物种
    pub fn constant(name: impl Into<String>) -> Self {
        Species {
            name: name.into(),
            kind: SpeciesType::ChemSpec,
            tracer_type: Some(TracerType::Constant),
            absolute_tolerance: None,
        }
    }

    /// 可变物种
    pub fn variable(name: impl Into<String>, tolerance: f64) -> Self {
        Species {
            name: name.into(),
            kind: SpeciesType::ChemSpec,
            tracer_type: None,
            absolute_tolerance: Some(tolerance),
        }
    }

    #[cfg(test)]
    pub fn is_constant(&self) -> bool {
        self.tracer_type.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constant_species_json() {
        let value = serde_json::to_value(Species::constant("O2")).unwrap();
        assert_eq!(
            value,
            json!({"name": "O2", "type": "CHEM_SPEC", "tracer type": "CONSTANT"})
        );
    }

    #[test]
    fn test_variable_species_json() {
        let value =
            serde_json::to_value(Species::variable("O3", DEFAULT_ABSOLUTE_TOLERANCE)).unwrap();
        assert_eq!(
            value,
            json!({"name": "O3", "type": "CHEM_SPEC", "absolute tolerance": 1.0e-12})
        );
        assert!(value.get("tracer type").is_none());
    }
}
