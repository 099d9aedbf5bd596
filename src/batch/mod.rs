//! # 批量处理模块
//!
//! 收集 KPP 配置文件，并逐行汇总翻译结果。
//!
//! ## 功能
//! - 按机理名前缀与后缀收集输入文件
//! - 读取为带来源信息的配置行
//! - 逐行成功/失败统计
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `parsers/` 使用
//! - 使用 `walkdir`, `glob` 收集文件

pub mod collector;
pub mod report;

pub use collector::ConfigCollector;
pub use report::{BatchReport, LineFailure};
