use anyhow::{Context, Result};
use glob::Pattern;
use log::trace;
use std::path::Path;

/// Compiled `otherPublicPatterns`: files allowed to import a slice's
/// restricted public entry.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let patterns = raw
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).with_context(|| format!("Invalid glob pattern '{p}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Matches the whole path, with `\` separators normalized to `/`.
    pub fn matches_any(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let normalized = path.to_string_lossy().replace('\\', "/");
        let matched = self.patterns.iter().any(|p| p.matches(&normalized));
        trace!("{} matches restricted entry patterns: {}", normalized, matched);
        matched
    }
}
