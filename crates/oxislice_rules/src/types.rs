use std::fmt;

use serde::Serialize;

/// Byte range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBinding {
    pub imported: String,
    pub local: String,
}

impl NamedBinding {
    pub fn new(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self { imported: imported.into(), local: local.into() }
    }

    pub fn same(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { imported: name.clone(), local: name }
    }
}

/// One `import ... from '...'` declaration as seen by the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub default_binding: Option<String>,
    pub namespace_binding: Option<String>,
    /// In source order.
    pub named_bindings: Vec<NamedBinding>,
    /// The module specifier exactly as written, without quotes.
    pub target: String,
    /// The whole declaration.
    pub span: Span,
    /// The string literal holding the target, quotes included.
    pub source_span: Span,
}

impl ImportStatement {
    /// `import '<target>';` occupying `span`, with the literal assumed to end
    /// right before the trailing semicolon.
    pub fn side_effect(target: impl Into<String>, span: Span) -> Self {
        let target = target.into();
        let literal_len = target.len() + 2;
        let literal_end = span.end.saturating_sub(1);
        Self {
            default_binding: None,
            namespace_binding: None,
            named_bindings: Vec::new(),
            target,
            span,
            source_span: Span::new(literal_end.saturating_sub(literal_len), literal_end),
        }
    }
}

/// Everything the rules need to know about the imports of one file.
#[derive(Debug, Clone, Default)]
pub struct ParsedImports {
    pub statements: Vec<ImportStatement>,
    /// No other statement precedes or separates the import declarations.
    pub imports_at_top: bool,
    /// Some declaration uses `import type` or an inline `type` specifier.
    /// Regenerating such a block would drop the modifier.
    pub type_only_imports: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RuleId {
    #[serde(rename = "layer-imports")]
    LayerImports,
    #[serde(rename = "public-api")]
    PublicApi,
    #[serde(rename = "relative-path")]
    RelativePath,
    #[serde(rename = "import-order")]
    ImportOrder,
}

impl RuleId {
    pub const ALL: [RuleId; 4] =
        [RuleId::LayerImports, RuleId::PublicApi, RuleId::RelativePath, RuleId::ImportOrder];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::LayerImports => "layer-imports",
            RuleId::PublicApi => "public-api",
            RuleId::RelativePath => "relative-path",
            RuleId::ImportOrder => "import-order",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.as_str() == name)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replace the text in `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub span: Span,
    pub replacement: String,
}

impl Fix {
    /// Applies the fix to the text it was computed from.
    ///
    /// Returns `None` when the span does not fit `source` on char boundaries.
    pub fn apply(&self, source: &str) -> Option<String> {
        let before = source.get(..self.span.start)?;
        let after = source.get(self.span.end..)?;
        Some(format!("{before}{}{after}", self.replacement))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: RuleId,
    /// The offending import declaration.
    pub span: Span,
    pub message: String,
    pub fix: Option<Fix>,
}
