//! # KPP 速率系数表达式解析器
//!
//! 将方程 `:` 与 `;` 之间的速率表达式映射为 MICM 反应类型与参数。
//!
//! ## 判定顺序
//! 1. 含 `SUN`：光解反应，无数值参数
//! 2. 含 `ARR`：Arrhenius 宏调用 `ARR_xxx(a0, a1, ...)`
//! 3. 其他：去掉括号后作为单个浮点数，仅设置 `A`
//!
//! ## KPP 与 MICM 的 Arrhenius 约定
//! ```text
//! KPP  ARR_abc(A0, B0, C0) = A0 * exp(-B0 / T) * (T / 300)^C0
//! MICM k = A * exp(C / T) * (T / D)^B
//! ```
//! 因此 B、C 槽位互换且指数项符号取反，D 固定为 300。
//!
//! ## 依赖关系
//! - 被 `parsers/equation.rs` 使用
//! - 使用 `models/reaction.rs`

use crate::error::{KppError, Result};
use crate::models::{RateConstant, RateParameters};

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// KPP Arrhenius 公式中的参考温度 (K)
pub const KPP_REFERENCE_TEMPERATURE: f64 = 300.0;

fn macro_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*\(([^()]*)\)\s*$").unwrap())
}

/// 解析 KPP 数值字面量，接受 Fortran 风格的 `D` 指数
pub fn parse_kpp_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == 'D' || c == 'd' { 'E' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 解析速率表达式
pub fn parse_rate_expression(expression: &str) -> Result<RateConstant> {
    let rate = if expression.contains("SUN") {
        RateConstant::photolysis()
    } else if expression.contains("ARR") {
        parse_arrhenius(expression)?
    } else {
        let literal: String = expression
            .chars()
            .filter(|c| *c != '(' && *c != ')')
            .collect();
        let a = parse_kpp_number(&literal)
            .ok_or_else(|| KppError::rate(expression, "not a numeric rate constant"))?;
        RateConstant::arrhenius(RateParameters {
            a: Some(a),
            ..Default::default()
        })
    };

    debug!("rate '{}' -> {:?}", expression.trim(), rate);
    Ok(rate)
}

/// 解析 `ARR_abc` / `ARR_ab` / `ARR_ac` 宏调用
pub fn parse_arrhenius(expression: &str) -> Result<RateConstant> {
    let caps = macro_call_regex()
        .captures(expression)
        .ok_or_else(|| KppError::rate(expression, "expected a call of the form NAME(args)"))?;
    let name = &caps[1];

    let args = caps[2]
        .split(',')
        .map(|arg| {
            parse_kpp_number(arg).ok_or_else(|| {
                KppError::rate(expression, format!("invalid argument '{}'", arg.trim()))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let (suffix, arity) = if name.ends_with("_abc") {
        ("_abc", 3)
    } else if name.ends_with("_ab") {
        ("_ab", 2)
    } else if name.ends_with("_ac") {
        ("_ac", 2)
    } else {
        return Err(KppError::rate(
            expression,
            format!("unsupported Arrhenius macro '{}'", name),
        ));
    };

    if args.len() != arity {
        return Err(KppError::rate(
            expression,
            format!(
                "'{}' expects {} arguments, found {}",
                name,
                arity,
                args.len()
            ),
        ));
    }

    // 注意 KPP 与 MICM 约定中 B、C 互换，且指数项变号
    let parameters = match suffix {
        "_abc" => RateParameters {
            a: Some(args[0]),
            b: Some(args[2]),
            c: Some(-args[1]),
            d: Some(KPP_REFERENCE_TEMPERATURE),
        },
        "_ab" => RateParameters {
            a: Some(args[0]),
            b: None,
            c: Some(-args[1]),
            d: Some(KPP_REFERENCE_TEMPERATURE),
        },
        _ => RateParameters {
            a: Some(args[0]),
            b: Some(args[1]),
            c: None,
            d: Some(KPP_REFERENCE_TEMPERATURE),
        },
    };

    Ok(RateConstant::arrhenius(parameters))
}
