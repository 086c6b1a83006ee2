use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use oxislice_check::{Config, OutputFormat};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oxislice")]
#[command(about = "Feature-Sliced Design import linting for JavaScript/TypeScript codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check FSD layer, public API, relative path and import order rules
    Fsd(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Fsd(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running FSD import check (using {} threads)", num_threads);
            debug!("Config: root={:?}, config={:?}, fix={}", cfg.root, cfg.config, cfg.fix);

            let format = cfg.format;
            let result = oxislice_check::run_fsd_check(cfg)?;
            debug!("Found {} warnings", result.warnings.len());

            let elapsed_ms = start.elapsed().as_millis();

            match format {
                OutputFormat::Json => oxislice_check::print_json(&mut stdout, &result)?,
                OutputFormat::Tree => {
                    if result.warnings.is_empty() {
                        info!("No violations found");
                        oxislice_check::print_no_violations_message(&mut stdout, &result)?;
                    } else {
                        oxislice_check::print_warnings_tree(&mut stdout, &result)?;
                    }
                    writeln!(
                        stdout,
                        "\n{} Finished in {}ms on {} files (using {} threads).",
                        "●".bright_blue(),
                        elapsed_ms.to_string().cyan(),
                        result.files_analyzed.to_string().cyan(),
                        num_threads.to_string().cyan()
                    )?;
                }
            }
            stdout.flush()?;

            if !result.warnings.is_empty() {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
