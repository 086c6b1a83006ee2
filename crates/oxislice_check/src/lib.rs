//! Feature-Sliced Design import checks for JavaScript/TypeScript projects.
//!
//! Runs the `oxislice_rules` rules over every source file of a project in
//! parallel and reports the violations, optionally rewriting the files that
//! have fixable ones.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use clap::Parser;
//! use oxislice_check::{Config, run_fsd_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["fsd", "--root", "/path/to/project"]);
//!
//! let result = run_fsd_check(cfg)?;
//!
//! if !result.warnings.is_empty() {
//!     // Use buffered output for better performance
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     oxislice_check::print_warnings_tree(&mut stdout, &result)?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_fsd_check;
pub use config::{Config, OutputFormat};
pub use reporter::{print_json, print_no_violations_message, print_warnings_tree};
pub use types::{CheckResult, Warning};
