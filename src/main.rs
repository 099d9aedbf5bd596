//! # kpp2micm - KPP 机理配置转换工具
//!
//! 将 KPP 配置文件（`.kpp`, `.spc`, `.eqn`, `.def`）中的物种与反应方程
//! 翻译为 MICM 使用的 `species.json` 与 `reactions.json`。
//!
//! ## 流水线
//! 读取文件 -> 区块切分 -> 物种/方程翻译 -> 组装文档 -> 写出 JSON
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (流水线执行逻辑)
//!   │     ├── batch/     (文件收集与逐行汇总)
//!   │     ├── parsers/   (KPP 解析器)
//!   │     ├── models/    (数据模型)
//!   │     └── export.rs  (JSON 写出)
//!   ├── utils/      (输出与日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        log::error!("{}", e);
        utils::output::print_error(&e);
        std::process::exit(1);
    }
}
