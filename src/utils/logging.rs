//! # 日志初始化
//!
//! 使用 `simplelog` 作为 `log` 门面的后端。
//! 指定日志文件时写入文件（覆盖），否则输出到标准输出。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `log`, `simplelog` crate

use crate::error::{KppError, Result};

use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::fs::File;
use std::path::Path;

/// 根据 `--debug` 选择日志级别
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// 初始化全局日志，只能调用一次
pub fn init(logfile: Option<&Path>, debug: bool) -> Result<()> {
    let level = level_for(debug);
    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| KppError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => SimpleLogger::init(level, Config::default())?,
    }
    Ok(())
}
