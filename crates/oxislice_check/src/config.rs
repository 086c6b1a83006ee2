use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::{env, path::PathBuf};

use oxislice_core::{DEFAULT_CONFIG_FILE, find_git_root, load_rule_options, read_tsconfig_alias};
use oxislice_rules::{RuleId, RuleOptions, RuleSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tree grouped by file
    Tree,
    /// Machine-readable JSON report
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fsd")]
#[command(about = "Check Feature-Sliced Design import rules in JavaScript/TypeScript projects")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// JSON rule options file (defaults to oxislice.json in the root, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path alias prefix, overrides the config file and tsconfig
    #[arg(long)]
    pub alias: Option<String>,

    /// Rewrite files to fix the violations that have a fix
    #[arg(long)]
    pub fix: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "tree")]
    pub format: OutputFormat,

    /// Comma separated rules to run (defaults to all)
    #[arg(long, value_delimiter = ',', value_parser = parse_rule_id)]
    pub rules: Vec<RuleId>,

    /// Maximum number of fixes applied to a single file
    #[arg(long, default_value = "10")]
    pub max_fix_passes: usize,

    /// Only check files whose path relative to the root contains this string
    #[arg(long)]
    pub include: Option<String>,

    #[clap(skip)]
    pub options: RuleOptions,
}

fn parse_rule_id(name: &str) -> Result<RuleId, String> {
    RuleId::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = RuleId::ALL.iter().map(|r| r.as_str()).collect();
        format!("unknown rule '{name}', expected one of: {}", known.join(", "))
    })
}

impl Config {
    /// Initialize the config by resolving the root directory and loading rule options
    pub fn initialize(&mut self) -> Result<()> {
        // Resolve root directory
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            find_git_root(&env::current_dir()?)?
        };
        info!("Using root directory: {}", root.display());

        self.options = match &self.config {
            Some(path) => load_rule_options(path)?,
            None => {
                let default_path = root.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    load_rule_options(&default_path)?
                } else {
                    debug!("No {} in root, using default rule options", DEFAULT_CONFIG_FILE);
                    RuleOptions::default()
                }
            }
        };

        if let Some(alias) = &self.alias {
            debug!("Using alias from command line: '{}'", alias);
            self.options.alias = alias.clone();
        } else if self.options.alias.is_empty() {
            debug!("Reading alias from tsconfig");
            self.options.alias = read_tsconfig_alias(&root).unwrap_or_default();
        }
        info!("Using path alias: '{}'", self.options.alias);

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn rule_selection(&self) -> RuleSelection {
        if self.rules.is_empty() { RuleSelection::all() } else { RuleSelection::only(&self.rules) }
    }
}
