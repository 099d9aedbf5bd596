//! # convert 命令实现
//!
//! KPP -> MICM 的完整流水线：读取、切分、翻译、组装、写出。
//!
//! ## 功能
//! - 读取目录中机理名前缀匹配的 KPP 文件
//! - 按 `#DEFFIX`, `#DEFVAR`, `#EQUATIONS` 区块翻译
//! - 逐行收集失败，打印汇总表
//! - `--strict` 时任一失败行即终止，不写出任何文件
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `parsers/`, `models/`, `export.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchReport, ConfigCollector, LineFailure};
use crate::cli::convert::ConvertArgs;
use crate::error::{KppError, Result};
use crate::export::{self, OutputPaths};
use crate::models::{MechanismDocument, Reaction, Section, Species, SpeciesDocument};
use crate::parsers::{
    split_by_section, translate_equations, translate_species, Sections, SpeciesRole,
};
use crate::utils::output::{self, Status};

use log::{debug, info, warn};
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 流水线选项（与参数解析解耦）
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub kpp_dir: PathBuf,
    pub kpp_name: String,
    pub micm_dir: PathBuf,
    pub mechanism: String,
    pub tolerance: f64,
    pub strict: bool,
}

impl From<&ConvertArgs> for ConvertOptions {
    fn from(args: &ConvertArgs) -> Self {
        ConvertOptions {
            kpp_dir: args.kpp_dir.clone(),
            kpp_name: args.kpp_name.clone(),
            micm_dir: args.micm_dir.clone(),
            mechanism: args.mechanism.clone(),
            tolerance: args.tolerance,
            strict: args.strict,
        }
    }
}

/// 翻译结果
#[derive(Debug)]
pub struct Translation {
    pub sections: Sections,
    pub fixed: BatchReport<Species>,
    pub variable: BatchReport<Species>,
    pub equations: BatchReport<Reaction>,
}

impl Translation {
    pub fn failures(&self) -> impl Iterator<Item = &LineFailure> {
        self.fixed
            .failures
            .iter()
            .chain(&self.variable.failures)
            .chain(&self.equations.failures)
    }

    pub fn failed(&self) -> usize {
        self.fixed.failed() + self.variable.failed() + self.equations.failed()
    }

    pub fn is_clean(&self) -> bool {
        self.fixed.is_clean() && self.variable.is_clean() && self.equations.is_clean()
    }

    pub fn species_document(&self) -> SpeciesDocument {
        SpeciesDocument::assemble(self.fixed.records.clone(), self.variable.records.clone())
    }

    pub fn mechanism_document(&self, name: &str) -> MechanismDocument {
        MechanismDocument::assemble(name, self.equations.records.clone())
    }
}

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Lines")]
    lines: usize,
    #[tabled(rename = "Translated")]
    translated: usize,
    #[tabled(rename = "Failed")]
    failed: usize,
}

impl SummaryRow {
    fn from_report<T>(report: &BatchReport<T>) -> Self {
        SummaryRow {
            section: report.section.to_string(),
            lines: report.total(),
            translated: report.succeeded(),
            failed: report.failed(),
        }
    }
}

/// 读取并翻译 KPP 配置
pub fn translate(options: &ConvertOptions) -> Result<Translation> {
    let lines = ConfigCollector::new(&options.kpp_dir, &options.kpp_name).read_lines()?;
    let sections = split_by_section(&lines);
    if sections.is_empty() {
        warn!(
            "no lines found inside #ATOMS, #DEFFIX, #DEFVAR or #EQUATIONS in {}",
            options.kpp_dir.display()
        );
    }

    for section in Section::ALL {
        info!("____ KPP section {} ____", section);
        for line in sections.get(section) {
            info!("{}", line.text.trim());
        }
    }

    let fixed = translate_species(
        Section::DefFix,
        sections.get(Section::DefFix),
        SpeciesRole::Fixed,
    );
    let variable = translate_species(
        Section::DefVar,
        sections.get(Section::DefVar),
        SpeciesRole::Variable {
            tolerance: options.tolerance,
        },
    );
    let equations = translate_equations(sections.get(Section::Equations));

    Ok(Translation {
        sections,
        fixed,
        variable,
        equations,
    })
}

/// 组装并写出 MICM 配置
pub fn write(options: &ConvertOptions, translation: &Translation) -> Result<OutputPaths> {
    let species = translation.species_document();
    let reactions = translation.mechanism_document(&options.mechanism);
    debug!("____ MICM species ____\n{}", export::to_json_string(&species)?);
    debug!("____ MICM reactions ____\n{}", export::to_json_string(&reactions)?);

    let paths =
        export::write_documents(&options.micm_dir, &options.mechanism, &species, &reactions)?;
    info!("wrote {}", paths.species.display());
    info!("wrote {}", paths.reactions.display());
    Ok(paths)
}

/// 流水线结果
#[derive(Debug)]
pub struct Conversion {
    pub translation: Translation,
    /// 严格模式下存在失败行时为 `None`，此时不写出任何文件
    pub paths: Option<OutputPaths>,
}

impl Conversion {
    /// 写出的文件路径；未写出时返回 `LineFailures`
    pub fn written(&self) -> Result<&OutputPaths> {
        self.paths.as_ref().ok_or_else(|| KppError::LineFailures {
            count: self.translation.failed(),
        })
    }
}

/// 完整流水线
pub fn convert(options: &ConvertOptions) -> Result<Conversion> {
    let translation = translate(options)?;
    if options.strict && !translation.is_clean() {
        warn!(
            "strict mode: {} line(s) failed, nothing written",
            translation.failed()
        );
        return Ok(Conversion {
            translation,
            paths: None,
        });
    }

    let paths = write(options, &translation)?;
    Ok(Conversion {
        translation,
        paths: Some(paths),
    })
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let options = ConvertOptions::from(&args);
    output::print_banner(&options.kpp_name, &options.mechanism);
    output::status(Status::Reading, options.kpp_dir.display());

    let conversion = convert(&options)?;
    let translation = &conversion.translation;

    let atoms = translation.sections.get(Section::Atoms).len();
    if atoms > 0 {
        output::status(Status::Skipped, format!("{} line(s) of {}", atoms, Section::Atoms));
    }

    let rows = vec![
        SummaryRow::from_report(&translation.fixed),
        SummaryRow::from_report(&translation.variable),
        SummaryRow::from_report(&translation.equations),
    ];
    println!("{}", Table::new(&rows));

    for failure in translation.failures() {
        output::print_failure(failure);
    }

    let paths = conversion.written()?;
    output::status(Status::Wrote, paths.species.display());
    output::status(Status::Wrote, paths.reactions.display());

    output::status(
        Status::Finished,
        format!(
            "{} species and {} reaction(s), {} line(s) failed",
            translation.fixed.succeeded() + translation.variable.succeeded(),
            translation.equations.succeeded(),
            translation.failed()
        ),
    );

    Ok(())
}
