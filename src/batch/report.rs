//! # 逐行翻译结果汇总
//!
//! 每一行独立翻译：成功的记录进入 `records`，失败的行连同来源位置
//! 进入 `failures`，批次继续处理。是否将失败视为致命由调用方决定。
//!
//! ## 依赖关系
//! - 被 `parsers/species.rs`, `parsers/equation.rs` 使用
//! - 被 `commands/convert.rs` 汇总报告

use crate::error::{KppError, Result};
use crate::models::{ConfigLine, Section};
use log::{debug, warn};

/// 单行翻译失败
#[derive(Debug)]
pub struct LineFailure {
    /// 所属区块
    pub section: Section,
    /// 来源位置 `file:line`
    pub origin: String,
    /// 原始行文本
    pub text: String,
    pub error: KppError,
}

impl std::fmt::Display for LineFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {} -> {}",
            self.origin,
            self.section,
            self.text.trim(),
            self.error
        )
    }
}

/// 一个区块的批量翻译结果
#[derive(Debug)]
pub struct BatchReport<T> {
    pub section: Section,
    pub records: Vec<T>,
    pub failures: Vec<LineFailure>,
}

impl<T> BatchReport<T> {
    pub fn new(section: Section) -> Self {
        BatchReport {
            section,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// 对区块中的每一行执行翻译函数，收集结果
    pub fn translate<F>(section: Section, lines: &[ConfigLine], mut translate_line: F) -> Self
    where
        F: FnMut(&str) -> Result<T>,
    {
        let mut report = Self::new(section);
        for line in lines {
            debug!("{}: {}", line.origin(), line.text.trim());
            match translate_line(&line.text) {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    let failure = LineFailure {
                        section,
                        origin: line.origin(),
                        text: line.text.clone(),
                        error,
                    };
                    warn!("{}", failure);
                    report.failures.push(failure);
                }
            }
        }
        report
    }

    pub fn succeeded(&self) -> usize {
        self.records.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 处理总行数
    pub fn total(&self) -> usize {
        self.succeeded() + self.failed()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
