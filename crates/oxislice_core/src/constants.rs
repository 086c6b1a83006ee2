//! Constants for file discovery and configuration.

/// File extensions for JavaScript/TypeScript files that should be analyzed
pub const JS_TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];

/// Directories never descended into, even when not gitignored
pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Rule options file looked up at the project root
pub const DEFAULT_CONFIG_FILE: &str = "oxislice.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_ts_extensions_includes_all_variants() {
        for ext in ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"] {
            assert!(JS_TS_EXTENSIONS.contains(&ext), "missing {ext}");
        }
        assert_eq!(JS_TS_EXTENSIONS.len(), 8);
    }

    #[test]
    fn test_style_sheets_are_not_sources() {
        assert!(!JS_TS_EXTENSIONS.contains(&"css"));
        assert!(!JS_TS_EXTENSIONS.contains(&"scss"));
    }
}
