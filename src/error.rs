//! # 统一错误处理模块
//!
//! 定义 kpp2micm 的所有错误类型，使用 `thiserror` 派生。
//!
//! 行级错误（物种行、方程行、速率表达式）由 `batch/report.rs` 收集，
//! 不会中断整个批次；其余错误直接向上传播到 `main.rs`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// kpp2micm 统一错误类型
#[derive(Error, Debug)]
pub enum KppError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No KPP config files matched: {pattern}")]
    MissingInput { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 解析错误（行级，可恢复）
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed species line: {reason}")]
    SectionFormat { reason: String },

    #[error("Malformed equation line: {reason}")]
    EquationFormat { reason: String },

    #[error("Unrecognized rate expression '{expression}': {reason}")]
    UnrecognizedRateExpression { expression: String, reason: String },

    #[error("Multi-digit stoichiometric coefficient is not supported: '{term}'")]
    MultiDigitCoefficient { term: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // ─────────────────────────────────────────────────────────────
    // 批次错误
    // ─────────────────────────────────────────────────────────────
    #[error("{count} line(s) failed to translate (strict mode)")]
    LineFailures { count: usize },
}

impl KppError {
    /// 构造物种行格式错误
    pub fn section(reason: impl Into<String>) -> Self {
        KppError::SectionFormat {
            reason: reason.into(),
        }
    }

    /// 构造方程行格式错误
    pub fn equation(reason: impl Into<String>) -> Self {
        KppError::EquationFormat {
            reason: reason.into(),
        }
    }

    /// 构造速率表达式错误
    pub fn rate(expression: &str, reason: impl Into<String>) -> Self {
        KppError::UnrecognizedRateExpression {
            expression: expression.trim().to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, KppError>;
