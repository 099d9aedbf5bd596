//! # 终端输出
//!
//! 转换进度与结果的终端呈现。诊断细节写入日志，这里只输出用户关心的状态行。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 与 `main.rs` 使用
//! - 使用 `batch/report.rs` 的失败记录
//! - 使用 `colored` crate

use crate::batch::LineFailure;
use crate::error::KppError;

use colored::{ColoredString, Colorize};
use std::fmt::Display;

/// 状态行标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 读取输入
    Reading,
    /// 跳过的区块
    Skipped,
    /// 已写出的文件
    Wrote,
    /// 转换完成
    Finished,
}

impl Status {
    fn tag(self) -> ColoredString {
        match self {
            Status::Reading => " reading".blue().bold(),
            Status::Skipped => " skipped".yellow().bold(),
            Status::Wrote => "   wrote".green().bold(),
            Status::Finished => "finished".green().bold(),
        }
    }
}

/// 打印一行状态
pub fn status(kind: Status, msg: impl Display) {
    println!("{} {}", kind.tag(), msg);
}

/// 打印转换标题：`<kpp_name> -> <mechanism>`
pub fn print_banner(kpp_name: &str, mechanism: &str) {
    println!(
        "\n{} {} {} {}\n",
        "kpp2micm".bold(),
        kpp_name.cyan(),
        "->".dimmed(),
        mechanism.cyan()
    );
}

/// 打印一条未能翻译的配置行
pub fn print_failure(failure: &LineFailure) {
    println!(
        "{} {} {} {}",
        "  failed".red().bold(),
        failure.origin.cyan(),
        format!("[{}]", failure.section).dimmed(),
        failure.error
    );
    println!("         {}", failure.text.trim().dimmed());
}

/// 打印致命错误（stderr）
pub fn print_error(err: &KppError) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
