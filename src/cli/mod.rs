use clap::Parser;
use regex::Regex;
use std::sync::OnceLock;

use crate::utils::{file_exists, Result, TranslatorError};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "glossary-translate",
    about = "Translate a text file with Google Cloud Translation using a CSV glossary",
    disable_version_flag = true
)]
pub struct CommandLineArgs {
    /// Source language code
    #[arg(short = 'f', long)]
    pub from: String,

    /// Target language code
    #[arg(short = 't', long)]
    pub to: String,

    /// Glossary CSV file path
    #[arg(short = 'g', long)]
    pub glossary: String,

    /// Input text file path
    #[arg(short = 'i', long)]
    pub input: String,

    /// Output text file path
    #[arg(short = 'o', long)]
    pub output: String,

    /// Service account key JSON file path
    #[arg(short = 'a', long)]
    pub account: String,

    /// Google Cloud project ID
    #[arg(short = 'p', long)]
    pub project: String,
}

fn language_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("valid language code pattern")
    })
}

fn project_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9-]{4,28}[a-z0-9]$").expect("valid project id pattern")
    })
}

/// ISO 639-1 code, optionally with a region (`ja`, `zh-CN`).
pub fn is_valid_language_code(code: &str) -> bool {
    language_code_pattern().is_match(code)
}

/// 6-30 lowercase letters, digits or hyphens; starts with a letter, does not
/// end with a hyphen.
pub fn is_valid_project_id(project_id: &str) -> bool {
    project_id_pattern().is_match(project_id)
}

/// Local checks run before anything touches the network. Missing files fail
/// immediately; format problems are collected and reported together.
pub fn validate_arguments(args: &CommandLineArgs) -> Result<()> {
    let mut errors = Vec::new();

    if !is_valid_language_code(&args.from) {
        errors.push(format!("Invalid source language code: {}", args.from));
    }
    if !is_valid_language_code(&args.to) {
        errors.push(format!("Invalid target language code: {}", args.to));
    }

    let required_files = [
        ("Input file", &args.input),
        ("Glossary file", &args.glossary),
        ("Service account key file", &args.account),
    ];
    for (label, path) in required_files {
        if !file_exists(path) {
            return Err(TranslatorError::FileNotFound(format!(
                "{} not found: {}",
                label, path
            )));
        }
    }

    if !is_valid_project_id(&args.project) {
        errors.push(format!("Invalid project ID format: {}", args.project));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TranslatorError::InvalidArgs(errors.join("\n")))
    }
}
