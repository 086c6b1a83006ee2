//! Feature-Sliced Design import rules.
//!
//! This crate holds the pure rule logic used by oxislice. It never touches the
//! filesystem and never parses source text: the host hands it the import
//! statements of one file (target string, bindings, byte spans) and gets back
//! a list of [`Violation`]s, some of which carry a textual [`Fix`].
//!
//! Four rules are provided:
//! - `layer-imports`: a layer may only import from itself and the layers below it
//! - `public-api`: imports must stop at a slice's public entry point
//! - `relative-path`: imports inside one slice must be relative
//! - `import-order`: imports must be grouped library, public layers, other, relative, styles
//!
//! # Examples
//!
//! ```
//! use oxislice_rules::{
//!     Analyzer, FileContext, ImportStatement, ParsedImports, RuleOptions, RuleSelection, Span,
//! };
//!
//! let options = RuleOptions::default();
//! let analyzer = Analyzer::new(&options, RuleSelection::all());
//! let file = FileContext::new("/project/src/features/Auth/ui/Form.tsx", false);
//!
//! let imports = ParsedImports {
//!     statements: vec![ImportStatement::side_effect("widgets/Header", Span::new(0, 25))],
//!     imports_at_top: true,
//!     type_only_imports: false,
//! };
//!
//! let violations = analyzer.analyze(&file, &imports);
//! assert_eq!(violations.len(), 1);
//! ```

mod analyzer;
mod layer;
mod layer_rule;
mod options;
mod ordering;
mod public_api;
mod relative_path;
mod serializer;
mod target;
mod types;

// Re-export public API
pub use analyzer::{Analyzer, FileContext, RuleSelection};
pub use layer::{FileLocation, Layer};
pub use layer_rule::is_forbidden;
pub use options::RuleOptions;
pub use ordering::{ImportCategory, ImportOrdering, classify};
pub use public_api::PublicApiRule;
pub use relative_path::{must_be_relative, relative_target};
pub use serializer::render_import;
pub use target::{ImportTarget, LayeredTarget, is_relative, normalize};
pub use types::{Fix, ImportStatement, NamedBinding, ParsedImports, RuleId, Span, Violation};
