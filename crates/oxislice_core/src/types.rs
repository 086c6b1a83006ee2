use std::path::PathBuf;

use oxislice_rules::ParsedImports;

/// A source file read from disk together with its import declarations.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub source: String,
    pub imports: ParsedImports,
}
