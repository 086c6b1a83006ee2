use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::PathBuf;

use crate::constants::{JS_TS_EXTENSIONS, SKIPPED_DIRS};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Only keep files whose path relative to the root contains this string
    pub include: Option<String>,
}

/// Collects every JS/TS source under the root, sorted by path.
///
/// Declaration files (`*.d.ts`) are skipped: they only describe types.
pub fn collect_sources(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files");
    let mut files: Vec<PathBuf> = Vec::new();
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(true)
        .git_ignore(true)
        .filter_entry(|entry| {
            entry.file_name().to_str().is_none_or(|name| !SKIPPED_DIRS.contains(&name))
        })
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let path_str = p.to_string_lossy();
        if path_str.ends_with(".d.ts") {
            trace!("Skipping declaration file: {}", path_str);
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && JS_TS_EXTENSIONS.contains(&ext)
        {
            if let Some(include) = &cfg.include {
                let rel_path = p.strip_prefix(root).unwrap_or(p);
                if !rel_path.to_string_lossy().contains(include.as_str()) {
                    continue;
                }
                trace!("Matched source file with include '{}': {}", include, rel_path.display());
            }
            files.push(p.to_path_buf());
        }
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}
