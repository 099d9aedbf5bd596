//! # 转换参数 CLI 定义
//!
//! KPP -> MICM 转换的全部选项，均可通过环境变量设置。
//! 兼容旧脚本的下划线写法（如 `--kpp_dir`）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::models::DEFAULT_ABSOLUTE_TOLERANCE;

use clap::Args;
use std::path::PathBuf;

/// 转换参数
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Log file (default: stdout)
    #[arg(long, env = "KPP2MICM_LOGFILE")]
    pub logfile: Option<PathBuf>,

    /// KPP input config directory
    #[arg(long, alias = "kpp_dir", env = "KPP2MICM_KPP_DIR", default_value = "../configs/kpp")]
    pub kpp_dir: PathBuf,

    /// KPP config name (file name prefix)
    #[arg(long, alias = "kpp_name", env = "KPP2MICM_KPP_NAME", default_value = "small_strato")]
    pub kpp_name: String,

    /// MICM output config directory
    #[arg(long, alias = "micm_dir", env = "KPP2MICM_MICM_DIR", default_value = "../configs/micm")]
    pub micm_dir: PathBuf,

    /// Mechanism name
    #[arg(long, env = "KPP2MICM_MECHANISM", default_value = "Chapman")]
    pub mechanism: String,

    /// Absolute tolerance of variable species
    #[arg(long, env = "KPP2MICM_TOLERANCE", default_value_t = DEFAULT_ABSOLUTE_TOLERANCE)]
    pub tolerance: f64,

    /// Treat any untranslatable line as fatal; nothing is written
    #[arg(long, env = "KPP2MICM_STRICT", default_value_t = false)]
    pub strict: bool,

    /// Set logging level to debug
    #[arg(long, env = "KPP2MICM_DEBUG", default_value_t = false)]
    pub debug: bool,
}
