//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。单一命令，无子命令：
//! 一次调用完成读取、解析与写出的全部流程。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// kpp2micm - KPP 机理配置转换为 MICM JSON 配置
#[derive(Parser, Debug)]
#[command(name = "kpp2micm")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Translate KPP config files (.kpp, .spc, .eqn, .def) to MICM JSON config files",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: convert::ConvertArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["kpp2micm"]).unwrap();
        assert_eq!(cli.args.kpp_name, "small_strato");
        assert_eq!(cli.args.mechanism, "Chapman");
        assert_eq!(cli.args.tolerance, 1.0e-12);
        assert!(cli.args.logfile.is_none());
        assert!(!cli.args.debug);
        assert!(!cli.args.strict);
    }

    #[test]
    fn test_legacy_underscore_aliases() {
        let cli = Cli::try_parse_from([
            "kpp2micm",
            "--kpp_dir",
            "in",
            "--kpp_name",
            "chapman",
            "--micm-dir",
            "out",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.args.kpp_dir, PathBuf::from("in"));
        assert_eq!(cli.args.kpp_name, "chapman");
        assert_eq!(cli.args.micm_dir, PathBuf::from("out"));
        assert!(cli.args.debug);
    }

    #[test]
    fn test_directories_from_environment() {
        // 只设置其他测试不检查的选项
        std::env::set_var("KPP2MICM_KPP_DIR", "/data/kpp");
        std::env::set_var("KPP2MICM_MICM_DIR", "/data/micm");

        let cli = Cli::try_parse_from(["kpp2micm"]).unwrap();
        assert_eq!(cli.args.kpp_dir, PathBuf::from("/data/kpp"));
        assert_eq!(cli.args.micm_dir, PathBuf::from("/data/micm"));

        let cli = Cli::try_parse_from(["kpp2micm", "--micm-dir", "out"]).unwrap();
        assert_eq!(cli.args.micm_dir, PathBuf::from("out"));

        std::env::remove_var("KPP2MICM_KPP_DIR");
        std::env::remove_var("KPP2MICM_MICM_DIR");
    }

    #[test]
    fn test_rejects_subcommand_like_positional() {
        assert!(Cli::try_parse_from(["kpp2micm", "convert"]).is_err());
    }
}
