//! # 命令执行模块
//!
//! 初始化日志并执行转换流水线。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `utils/logging.rs`
//! - 子模块: convert

pub mod convert;

use crate::cli::Cli;
use crate::error::Result;
use crate::utils::logging;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.args.logfile.as_deref(), cli.args.debug)?;
    convert::execute(cli.args)
}
