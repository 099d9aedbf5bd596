//! # MICM JSON 导出
//!
//! 将物种文档与反应文档序列化为 4 空格缩进的 JSON，
//! 写入 `<micm_dir>/<mechanism>/species.json` 与 `reactions.json`。
//! 已存在的同名文件会被直接覆盖。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `models/document.rs`
//! - 使用 `serde_json` 序列化

use crate::error::{KppError, Result};
use crate::models::{MechanismDocument, SpeciesDocument};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

pub const SPECIES_FILE: &str = "species.json";
pub const REACTIONS_FILE: &str = "reactions.json";

/// 写出的文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub species: PathBuf,
    pub reactions: PathBuf,
}

/// 序列化为 4 空格缩进的 JSON 文本（带结尾换行）
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json 只输出合法 UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| KppError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 写出两个 MICM 配置文件
pub fn write_documents(
    micm_dir: &Path,
    mechanism: &str,
    species: &SpeciesDocument,
    reactions: &MechanismDocument,
) -> Result<OutputPaths> {
    let mechanism_dir = micm_dir.join(mechanism);
    fs::create_dir_all(&mechanism_dir).map_err(|e| KppError::FileWriteError {
        path: mechanism_dir.display().to_string(),
        source: e,
    })?;

    let paths = OutputPaths {
        species: mechanism_dir.join(SPECIES_FILE),
        reactions: mechanism_dir.join(REACTIONS_FILE),
    };

    write_file(&paths.species, &to_json_string(species)?)?;
    write_file(&paths.reactions, &to_json_string(reactions)?)?;

    Ok(paths)
}
