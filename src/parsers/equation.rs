//! # KPP 方程行解析器
//!
//! 解析 `#EQUATIONS` 区块中的反应方程。
//!
//! ## 行格式
//! ```text
//! <LABEL> R1 + 2R2 + hv = P1 + 2P2 : COEFFS ;
//! ```
//! - 标签位于 `<` 与 `>` 之间，原样保留
//! - 反应物/产物以 `+` 分隔，可带一位数字的化学计量系数前缀
//! - 含 `hv` 的反应物（光子）不计入反应物
//! - 速率表达式交给 `parsers/rate.rs`
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `parsers/rate.rs`, `models/reaction.rs`, `batch/report.rs`

use super::rate::parse_rate_expression;
use crate::batch::BatchReport;
use crate::error::{KppError, Result};
use crate::models::{ConfigLine, Product, Reactant, Reaction, Section, SpeciesMap};

use log::{debug, warn};

/// 光子记号
const PHOTON: &str = "hv";

/// 拆分 `+` 连接的物种项
fn split_terms<'a>(side: &'a str, what: &str) -> Result<Vec<&'a str>> {
    side.split('+')
        .map(str::trim)
        .map(|term| {
            if term.is_empty() {
                Err(KppError::equation(format!("empty {} term in '{}'", what, side.trim())))
            } else {
                Ok(term)
            }
        })
        .collect()
}

/// 拆出物种项的一位数字系数前缀
///
/// 返回 `(系数, 物种名)`。多位数字或小数系数不受支持。
pub fn split_coefficient(term: &str) -> Result<(Option<f64>, &str)> {
    let mut chars = term.chars();
    let first = match chars.next() {
        Some(c) if c.is_ascii_digit() => c,
        _ => return Ok((None, term)),
    };

    if matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '.') {
        return Err(KppError::MultiDigitCoefficient {
            term: term.to_string(),
        });
    }

    let name = term[first.len_utf8()..].trim();
    if name.is_empty() {
        return Err(KppError::equation(format!(
            "coefficient '{}' has no species",
            term
        )));
    }

    Ok((first.to_digit(10).map(f64::from), name))
}

/// 解析单个方程行
pub fn parse_equation_line(line: &str) -> Result<Reaction> {
    let body = line.trim();

    let sides: Vec<&str> = body.split('=').collect();
    if sides.len() != 2 {
        return Err(KppError::equation(format!(
            "expected exactly one '=', found {}",
            sides.len() - 1
        )));
    }

    let rest: Vec<&str> = sides[1].split(':').collect();
    if rest.len() != 2 {
        return Err(KppError::equation(format!(
            "expected exactly one ':' after '=', found {}",
            rest.len() - 1
        )));
    }
    let product_side = rest[0];
    let coefficients = rest[1].replace(';', "");

    // 提取 <label>
    let labelled = sides[0]
        .trim()
        .strip_prefix('<')
        .ok_or_else(|| KppError::equation("missing '<' before the equation label"))?;
    let (label, reactant_side) = labelled
        .split_once('>')
        .ok_or_else(|| KppError::equation("missing '>' after the equation label"))?;
    if label.is_empty() {
        return Err(KppError::equation("empty equation label"));
    }

    let rate = parse_rate_expression(&coefficients)?;

    let mut reactants = SpeciesMap::new();
    for term in split_terms(reactant_side, "reactant")? {
        if term.contains(PHOTON) {
            debug!("<{}> dropping photon term '{}'", label, term);
            continue;
        }
        let (quantity, name) = split_coefficient(term)?;
        if reactants.insert(name, Reactant { quantity }).is_some() {
            warn!("<{}> reactant '{}' listed more than once", label, name);
        }
    }
    if reactants.is_empty() {
        return Err(KppError::equation(format!("<{}> has no reactants", label)));
    }

    // 空产物侧表示汇（sink）反应
    let mut products = SpeciesMap::new();
    if !product_side.trim().is_empty() {
        for term in split_terms(product_side, "product")? {
            let (r#yield, name) = split_coefficient(term)?;
            if products.insert(name, Product { r#yield }).is_some() {
                warn!("<{}> product '{}' listed more than once", label, name);
            }
        }
    }

    debug!(
        "<{}> {}: {} -> {}",
        label,
        rate.reaction_type,
        reactants.keys().collect::<Vec<_>>().join(" + "),
        products.keys().collect::<Vec<_>>().join(" + ")
    );

    Ok(Reaction {
        reaction_type: rate.reaction_type,
        parameters: rate.parameters,
        reactants,
        products,
        label: label.to_string(),
    })
}

/// 翻译整个方程区块
pub fn translate_equations(lines: &[ConfigLine]) -> BatchReport<Reaction> {
    BatchReport::translate(Section::Equations, lines, parse_equation_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reaction::ReactionType;
    use crate::models::RateParameters;
    use serde_json::json;

    #[test]
    fn test_photolysis_equation() {
        let reaction = parse_equation_line("<R1>NO2 + hv = NO + O3P : SUN;").unwrap();
        assert_eq!(reaction.label, "R1");
        assert_eq!(reaction.reaction_type, ReactionType::Photolysis);
        assert_eq!(reaction.reactants.keys().collect::<Vec<_>>(), vec!["NO2"]);
        assert_eq!(
            reaction.products.keys().collect::<Vec<_>>(),
            vec!["NO", "O3P"]
        );
        assert!(!reaction.reactants.contains_key("hv"));
    }

    #[test]
    fn test_stoichiometric_digits() {
        let reaction = parse_equation_line("<R2> O2 + hv = 2O : (SUN*1.0E-10) ;").unwrap();
        assert_eq!(reaction.products.get("O").unwrap().r#yield, Some(2.0));

        let reaction = parse_equation_line("<R7> 2O + M = O2 + M : 1.0E-33;").unwrap();
        assert_eq!(reaction.reactants.get("O").unwrap().quantity, Some(2.0));
        assert_eq!(reaction.reactants.get("M").unwrap().quantity, None);
        assert!(!reaction.reactants.contains_key("2O"));
    }

    #[test]
    fn test_arrhenius_equation_json() {
        let reaction = parse_equation_line("<R4> O + O3 = 2O2 : ARR_ab( 8.0E-12, 2060 );").unwrap();
        assert_eq!(
            serde_json::to_value(&reaction).unwrap(),
            json!({
                "type": "ARRHENIUS",
                "A": 8.0e-12,
                "C": -2060.0,
                "D": 300.0,
                "reactants": {"O": {}, "O3": {}},
                "products": {"O2": {"yield": 2.0}},
                "MUSICA name": "R4"
            })
        );
    }

    #[test]
    fn test_label_is_verbatim() {
        let reaction = parse_equation_line("  <G 1.a_b>O3 = O : 1.0;").unwrap();
        assert_eq!(reaction.label, "G 1.a_b");
    }

    #[test]
    fn test_bare_coefficient() {
        let reaction = parse_equation_line("<R9> O1D + M = O + M : 3.3E-11;").unwrap();
        assert_eq!(
            reaction.parameters,
            RateParameters {
                a: Some(3.3e-11),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_sink_reaction_has_no_products() {
        let reaction = parse_equation_line("<D1> HNO3 = : 1.0E-5;").unwrap();
        assert!(reaction.products.is_empty());
    }

    #[test]
    fn test_hv_term_with_digit_is_dropped() {
        let reaction = parse_equation_line("<P1> O3 + 2hv = O + O2 : SUN;").unwrap();
        assert_eq!(reaction.reactants.keys().collect::<Vec<_>>(), vec!["O3"]);
    }

    #[test]
    fn test_malformed_equations() {
        for line in [
            "<R1> O3 O + O2 : SUN;",
            "<R1> O3 = O + O2 SUN;",
            "R1> O3 = O + O2 : SUN;",
            "<R1 O3 = O + O2 : SUN;",
            "<> O3 = O + O2 : SUN;",
            "<R1> O3 + = O : 1.0;",
            "<R1> hv = O : SUN;",
        ] {
            assert!(
                matches!(parse_equation_line(line), Err(KppError::EquationFormat { .. })),
                "expected format error for {}",
                line
            );
        }
    }

    #[test]
    fn test_multi_digit_coefficient_is_rejected() {
        let err = parse_equation_line("<R1> O3 = 12O : 1.0;").unwrap_err();
        assert!(matches!(err, KppError::MultiDigitCoefficient { ref term } if term == "12O"));

        let err = parse_equation_line("<R1> O3 = 0.5O2 : 1.0;").unwrap_err();
        assert!(matches!(err, KppError::MultiDigitCoefficient { .. }));
    }

    #[test]
    fn test_split_coefficient() {
        assert_eq!(split_coefficient("3NO2").unwrap(), (Some(3.0), "NO2"));
        assert_eq!(split_coefficient("2 O").unwrap(), (Some(2.0), "O"));
        assert_eq!(split_coefficient("O1D").unwrap(), (None, "O1D"));
        assert!(split_coefficient("4").is_err());
    }

    #[test]
    fn test_translate_continues_after_bad_line() {
        let lines = vec![
            ConfigLine::new("<R1> O2 + hv = 2O : SUN;", "m.eqn", 2),
            ConfigLine::new("<R2> O + O2 = O3 : ARR_xyz(1.0);", "m.eqn", 3),
            ConfigLine::new("<R3> O3 + hv = O1D + O2 : SUN;", "m.eqn", 4),
        ];
        let report = translate_equations(&lines);
        let labels: Vec<_> = report.records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["R1", "R3"]);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            KppError::UnrecognizedRateExpression { .. }
        ));
    }
}
