//! Minimal CLI: discover `*.json` samples → emit a sibling `.ts` class per file
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rayon::prelude::*;

use crate::codegen;
use crate::config::{GenerationConfig, Variant};
use crate::error::GenerateError;
use crate::model::{self, ClassModel};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate a typed class definition next to every JSON sample under a directory
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// base directory scanned recursively for *.json samples
    #[arg(short = 'd', long, default_value = ".")]
    base_path: PathBuf,

    /// class-name template; '#' is replaced with the sample's file stem
    #[arg(short = 'n', long = "class-name", default_value = "#Model")]
    class_name: String,

    /// delete each sample file after its class is generated
    #[arg(short = 'x', long, default_value_t = false)]
    delete_source: bool,

    /// emit the serializable variant (fromJSON/toJSON) instead of the plain data holder
    #[arg(short = 'f', long, default_value_t = false)]
    serializable: bool,

    /// serializable variant only: fromJSON returns null when its input is falsy
    #[arg(long, default_value_t = false)]
    nullable_factory: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let config = GenerationConfig {
            base_path: self.base_path.clone(),
            class_name_template: self.class_name.clone(),
            delete_source: self.delete_source,
            variant: if self.serializable {
                Variant::Serializable
            } else {
                Variant::PlainData
            },
            nullable_factory: self.nullable_factory,
        };
        run_with_config(&config)
    }
}

/// Engine entry point. Every setting lives in the explicit config; no
/// ambient state. Files are independent and write only their own sibling
/// output path, so generation runs in parallel with no coordination.
pub fn run_with_config(config: &GenerationConfig) -> anyhow::Result<()> {
    let sources = discover_sources(&config.base_path)?;
    let failed = sources
        .par_iter()
        .filter(|source| match generate_file(source, config) {
            Ok(out_path) => {
                eprintln!("{} {}", "generated".green(), out_path.display());
                false
            }
            Err(error) => {
                eprintln!("{} {error}", "error:".red().bold());
                true
            }
        })
        .count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} sample file(s) failed", sources.len());
    }
    Ok(())
}

/// Generate one class file: read → parse → model → render → write,
/// optionally deleting the source. Returns the output path written.
pub fn generate_file(source: &Path, config: &GenerationConfig) -> Result<PathBuf, GenerateError> {
    let text = std::fs::read_to_string(source).map_err(|error| GenerateError::Read {
        path: source.to_path_buf(),
        source: error,
    })?;
    let rendered = generate_source(source, &text, config)?;

    let out_path = source.with_extension("ts");
    std::fs::write(&out_path, rendered).map_err(|error| GenerateError::Write {
        path: out_path.clone(),
        source: error,
    })?;
    if config.delete_source {
        std::fs::remove_file(source).map_err(|error| GenerateError::Delete {
            path: source.to_path_buf(),
            source: error,
        })?;
    }
    Ok(out_path)
}

/// The pure text→text step shared by the CLI and tests: raw JSON in,
/// rendered class source out.
pub fn generate_source(
    source: &Path,
    text: &str,
    config: &GenerationConfig,
) -> Result<String, GenerateError> {
    let value =
        serde_json::from_str::<serde_json::Value>(text).map_err(|error| GenerateError::Parse {
            path: source.to_path_buf(),
            source: error,
        })?;
    let document = model::as_document(source, &value)?;
    let name = codegen::class_name(&config.class_name_template, source);
    let class_model = ClassModel::from_document(name, document);
    Ok(codegen::render(&class_model, config))
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn discover_sources(base_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.json", base_path.display());
    let entries = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {pattern}"))?;
    let mut out = Vec::new();
    for entry in entries {
        out.push(entry.context("failed to read a path matched by the glob")?);
    }
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
