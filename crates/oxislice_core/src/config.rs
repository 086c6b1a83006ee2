use anyhow::{Context, Result, anyhow};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    fs,
    path::{Path, PathBuf},
};

use oxislice_rules::RuleOptions;

use crate::constants::SKIPPED_DIRS;

/// Walks up from `start` to the first directory containing `.git`.
pub fn find_git_root(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root from: {:?}", start);
    for dir in start.ancestors() {
        trace!("Checking for .git in: {:?}", dir);
        if dir.join(".git").exists() {
            debug!("Found git root at: {:?}", dir);
            return Ok(dir.to_path_buf());
        }
    }
    debug!("Could not find .git directory in any parent folder");
    Err(anyhow!("Could not find .git directory in any parent folder of {}", start.display()))
}

/// Loads rule options from a JSON file.
pub fn load_rule_options(path: &Path) -> Result<RuleOptions> {
    debug!("Loading rule options from {}", path.display());
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid rule options in {}", path.display()))
}

/// Infers the path alias of a project from its tsconfig files.
///
/// The alias is the `compilerOptions.paths` key (without its `/*` suffix)
/// that maps onto the source root, e.g. `"@/*": ["./src/*"]` yields `@`.
/// Only the shallowest tsconfig that has such a mapping is considered.
pub fn read_tsconfig_alias(root: &Path) -> Option<String> {
    debug!("Reading tsconfig alias from root: {:?}", root);

    // Find all tsconfig.json files recursively
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|entry| {
            entry.file_name().to_str().is_none_or(|name| !SKIPPED_DIRS.contains(&name))
        })
        .build();

    let mut tsconfig_files: Vec<PathBuf> = walker
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_str() == Some("tsconfig.json"))
        .map(|e| e.path().to_path_buf())
        .collect();
    tsconfig_files.sort_by_key(|p| (p.components().count(), p.clone()));
    debug!("Found {} tsconfig.json files", tsconfig_files.len());

    for tsconfig_path in &tsconfig_files {
        trace!("Checking tsconfig at: {:?}", tsconfig_path);
        let Ok(content) = fs::read_to_string(tsconfig_path) else {
            continue;
        };
        // Strip comments (simple approach - removes // comments)
        let content_no_comments: String = content
            .lines()
            .map(|line| if let Some(idx) = line.find("//") { &line[..idx] } else { line })
            .collect::<Vec<_>>()
            .join("\n");

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content_no_comments)
            && let Some(paths_obj) = json
                .get("compilerOptions")
                .and_then(|c| c.get("paths"))
                .and_then(|p| p.as_object())
        {
            for (alias, targets) in paths_obj {
                let maps_to_src = targets.as_array().is_some_and(|arr| {
                    arr.iter().filter_map(|t| t.as_str()).any(|t| {
                        let dir = t.trim_end_matches("/*").trim_start_matches("./");
                        dir == "src" || dir.ends_with("/src")
                    })
                });
                if maps_to_src {
                    let alias_key = alias.trim_end_matches("/*").to_string();
                    debug!("Found source root alias '{}' in {:?}", alias_key, tsconfig_path);
                    return Some(alias_key);
                }
            }
        }
    }

    debug!("No source root alias found");
    None
}
