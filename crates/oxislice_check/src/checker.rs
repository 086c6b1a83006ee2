use anyhow::{Context, Result, anyhow};
use dashmap::DashMap;
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use oxislice_core::{CollectorConfig, PatternSet, SourceFile, collect_sources, parse_imports, read_source};
use oxislice_rules::{Analyzer, FileContext, RuleId, Violation};

use crate::{
    config::Config,
    types::{CheckResult, Warning},
};

/// Shared, read-only state of one run.
struct FileChecker<'a> {
    root: &'a Path,
    analyzer: Analyzer<'a>,
    other_public: PatternSet,
    fix: bool,
    max_fix_passes: usize,
}

pub fn run_fsd_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting FSD import check");
    cfg.initialize()?;
    let root = cfg.root()?.clone();

    debug!("Collecting source files with include filter: {:?}", cfg.include);
    let files = collect_sources(&CollectorConfig { root: root.clone(), include: cfg.include.clone() })?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
        return Err(anyhow!("No source files found under {}", root.display()));
    }
    info!("Found {} source files", files.len());

    let checker = FileChecker {
        root: &root,
        analyzer: Analyzer::new(&cfg.options, cfg.rule_selection()),
        other_public: PatternSet::new(&cfg.options.other_public_patterns)?,
        fix: cfg.fix,
        max_fix_passes: cfg.max_fix_passes,
    };

    let rule_counts: DashMap<RuleId, usize> = DashMap::new();
    let fixes_applied = AtomicUsize::new(0);
    let files_analyzed = AtomicUsize::new(0);

    info!("Processing {} source files in parallel", files.len());

    let warnings: Vec<Warning> = files
        .par_iter()
        .flat_map(|file| {
            debug!("Thread {:?} processing: {}", thread::current().id(), file.display());

            let (source, violations, fixes) = match checker.check_file(file) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Skipping {}: {:#}", file.display(), e);
                    return vec![];
                }
            };
            files_analyzed.fetch_add(1, Ordering::Relaxed);
            fixes_applied.fetch_add(fixes, Ordering::Relaxed);

            for v in &violations {
                *rule_counts.entry(v.rule).or_insert(0) += 1;
            }
            checker.warnings_for(&source, &violations)
        })
        .collect();

    let rule_counts: Vec<(RuleId, usize)> = RuleId::ALL
        .into_iter()
        .filter_map(|rule| rule_counts.get(&rule).map(|count| (rule, *count)))
        .collect();

    info!("FSD import check complete. Found {} warnings", warnings.len());
    Ok(CheckResult {
        root: root.clone(),
        warnings,
        files_analyzed: files_analyzed.into_inner(),
        fixes_applied: fixes_applied.into_inner(),
        rule_counts,
    })
}

impl FileChecker<'_> {
    fn context_for(&self, file: &Path) -> FileContext {
        let rel_path = file.strip_prefix(self.root).unwrap_or(file);
        let other_public =
            self.other_public.matches_any(file) || self.other_public.matches_any(rel_path);
        FileContext::new(&rel_path.to_string_lossy(), other_public)
    }

    /// Analyzes one file and, in fix mode, rewrites it until no fixable
    /// violation remains or the pass limit is reached.
    ///
    /// Returns the final source, its remaining violations and the number
    /// of fixes applied.
    fn check_file(&self, file: &Path) -> Result<(SourceFile, Vec<Violation>, usize)> {
        let mut source = read_source(file)?;
        let context = self.context_for(file);
        trace!("{} located at {:?}", file.display(), context.location);

        let mut violations = self.analyzer.analyze(&context, &source.imports);
        if !self.fix {
            return Ok((source, violations, 0));
        }

        let mut fixes = 0;
        while fixes < self.max_fix_passes {
            let Some(fix) = violations.iter().find_map(|v| v.fix.as_ref()) else {
                break;
            };
            let Some(fixed) = fix.apply(&source.source) else {
                warn!("Fix for {} does not fit the file, stopping", file.display());
                break;
            };
            if fixed == source.source {
                break;
            }
            let imports = match parse_imports(file, &fixed) {
                Ok(imports) => imports,
                Err(e) => {
                    warn!("Fix would break {}, stopping: {}", file.display(), e);
                    break;
                }
            };

            source.source = fixed;
            source.imports = imports;
            fixes += 1;
            violations = self.analyzer.analyze(&context, &source.imports);
        }

        if fixes > 0 {
            debug!("Applied {} fixes to {}", fixes, file.display());
            fs::write(file, &source.source)
                .with_context(|| format!("Failed to write {}", file.display()))?;
        }
        Ok((source, violations, fixes))
    }

    fn warnings_for(&self, source: &SourceFile, violations: &[Violation]) -> Vec<Warning> {
        let rel_file = source
            .path
            .strip_prefix(self.root)
            .unwrap_or(&source.path)
            .to_string_lossy()
            .replace('\\', "/");

        violations
            .iter()
            .map(|v| {
                let (line, column) = line_col(&source.source, v.span.start);
                Warning {
                    file: rel_file.clone(),
                    line,
                    column,
                    rule: v.rule,
                    message: v.message.clone(),
                    import_statement: source
                        .source
                        .get(v.span.start..v.span.end)
                        .unwrap_or_default()
                        .to_string(),
                    fixable: v.fix.is_some(),
                }
            })
            .collect()
    }
}

/// 1-based line and column of a byte offset.
fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}
