//! # MICM 反应数据模型
//!
//! 一条 KPP 方程对应一个 `Reaction`。速率参数平铺在反应对象中，
//! 未设置的参数不输出，由 MICM 使用其默认值。
//!
//! ## MICM Arrhenius 公式
//! ```text
//! k = A * exp(C / T) * (T / D)^B * (1 + E * P)
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/rate.rs`, `parsers/equation.rs` 使用
//! - 被 `models/document.rs` 使用

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// MICM 反应类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReactionType {
    #[serde(rename = "ARRHENIUS")]
    Arrhenius,
    #[serde(rename = "PHOTOLYSIS")]
    Photolysis,
}

impl std::fmt::Display for ReactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionType::Arrhenius => write!(f, "ARRHENIUS"),
            ReactionType::Photolysis => write!(f, "PHOTOLYSIS"),
        }
    }
}

/// MICM 速率参数（字母槽位）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RateParameters {
    #[serde(rename = "A", skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(rename = "B", skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(rename = "C", skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(rename = "D", skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
}

/// 速率表达式的解析结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConstant {
    pub reaction_type: ReactionType,
    pub parameters: RateParameters,
}

impl RateConstant {
    /// 光解反应：参数由 MICM 光解表提供
    pub fn photolysis() -> Self {
        RateConstant {
            reaction_type: ReactionType::Photolysis,
            parameters: RateParameters::default(),
        }
    }

    pub fn arrhenius(parameters: RateParameters) -> Self {
        RateConstant {
            reaction_type: ReactionType::Arrhenius,
            parameters,
        }
    }
}

/// 反应物条目
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Reactant {
    #[serde(rename = "qty", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// 产物条目
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub r#yield: Option<f64>,
}

/// 以物种名为键、保持首次出现顺序的映射
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for SpeciesMap<V> {
    fn default() -> Self {
        SpeciesMap {
            entries: Vec::new(),
        }
    }
}

impl<V> SpeciesMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入条目；已存在的键保持原位置，返回被替换的旧值
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

#[cfg(test)]
impl<V> SpeciesMap<V> {
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<V: Serialize> Serialize for SpeciesMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// MICM 反应条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reaction {
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,

    #[serde(flatten)]
    pub parameters: RateParameters,

    pub reactants: SpeciesMap<Reactant>,

    pub products: SpeciesMap<Product>,

    /// KPP 方程标签 `<...>`
    #[serde(rename = "MUSICA name")]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_species_map_keeps_first_position() {
        let mut map = SpeciesMap::new();
        map.insert("NO", Product::default());
        map.insert("O3", Product { r#yield: Some(2.0) });
        let old = map.insert("NO", Product { r#yield: Some(1.0) });

        assert_eq!(old, Some(Product::default()));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["NO", "O3"]);
        assert_eq!(map.get("NO").unwrap().r#yield, Some(1.0));
    }

    #[test]
    fn test_reaction_json_layout() {
        let mut reactants = SpeciesMap::new();
        reactants.insert("O3", Reactant::default());
        reactants.insert("O", Reactant { quantity: Some(2.0) });
        let mut products = SpeciesMap::new();
        products.insert("O2", Product { r#yield: Some(2.0) });

        let reaction = Reaction {
            reaction_type: ReactionType::Arrhenius,
            parameters: RateParameters {
                a: Some(8.0e-12),
                c: Some(-2060.0),
                d: Some(300.0),
                ..Default::default()
            },
            reactants,
            products,
            label: "R4".to_string(),
        };

        let text = serde_json::to_string(&reaction).unwrap();
        assert_eq!(
            text,
            r#"{"type":"ARRHENIUS","A":8e-12,"C":-2060.0,"D":300.0,"reactants":{"O3":{},"O":{"qty":2.0}},"products":{"O2":{"yield":2.0}},"MUSICA name":"R4"}"#
        );
        assert_eq!(
            serde_json::to_value(&reaction).unwrap()["reactants"],
            json!({"O3": {}, "O": {"qty": 2.0}})
        );
    }
}
