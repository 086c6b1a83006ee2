//! Host utilities for oxislice.
//!
//! This crate feeds the rule core in `oxislice_rules` with real projects:
//! - Parsing import declarations (bindings and spans) from JS/TS files with oxc
//! - Collecting source files from a project
//! - Configuration utilities (git root finding, tsconfig alias, rule options file)
//! - Glob matching for restricted public entry files

mod collector;
mod config;
mod constants;
mod parser;
mod patterns;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_sources};
pub use config::{find_git_root, load_rule_options, read_tsconfig_alias};
pub use constants::{DEFAULT_CONFIG_FILE, JS_TS_EXTENSIONS, SKIPPED_DIRS};
pub use parser::{parse_imports, read_source};
pub use patterns::PatternSet;
pub use types::SourceFile;
