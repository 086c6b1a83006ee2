//! Import grouping and ordering.
//!
//! Every import falls into one [`ImportCategory`]. Categories must appear in
//! ascending priority: third-party libraries, then the public API of each
//! layer from `shared` up to `pages`, then configured "other" roots, then
//! relative imports and finally style sheets.
//!
//! [`ImportOrdering`] is fed the statements of one file in source order. The
//! first out-of-order statement is held back until [`ImportOrdering::finish`]
//! so it can carry the rewrite of the whole import block; every later one is
//! returned straight away without a fix.

use std::fmt;

use log::{debug, trace};

use crate::{
    layer::Layer,
    serializer::render_import,
    target::ImportTarget,
    types::{Fix, ImportStatement, RuleId, Span, Violation},
};

/// Extensions of relative imports that are sorted as style sheets.
const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportCategory {
    Library,
    PublicShared,
    PublicEntities,
    PublicFeatures,
    PublicWidgets,
    PublicPages,
    PublicOther,
    Relative,
    Css,
}

impl ImportCategory {
    /// In ascending priority.
    pub const ALL: [ImportCategory; 9] = [
        ImportCategory::Library,
        ImportCategory::PublicShared,
        ImportCategory::PublicEntities,
        ImportCategory::PublicFeatures,
        ImportCategory::PublicWidgets,
        ImportCategory::PublicPages,
        ImportCategory::PublicOther,
        ImportCategory::Relative,
        ImportCategory::Css,
    ];

    pub fn priority(self) -> f32 {
        match self {
            ImportCategory::Library => 1.0,
            ImportCategory::PublicShared => 2.0,
            ImportCategory::PublicEntities => 2.1,
            ImportCategory::PublicFeatures => 2.2,
            ImportCategory::PublicWidgets => 2.3,
            ImportCategory::PublicPages => 2.4,
            ImportCategory::PublicOther => 2.5,
            ImportCategory::Relative => 3.0,
            ImportCategory::Css => 4.0,
        }
    }

    /// Name used in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            ImportCategory::Library => "LIBRARY",
            ImportCategory::PublicShared => "SHARED",
            ImportCategory::PublicEntities => "ENTITIES",
            ImportCategory::PublicFeatures => "FEATURES",
            ImportCategory::PublicWidgets => "WIDGETS",
            ImportCategory::PublicPages => "PAGE",
            ImportCategory::PublicOther => "OTHER",
            ImportCategory::Relative => "RELATIVE",
            ImportCategory::Css => "STYLE",
        }
    }

    fn for_layer(layer: Layer) -> Self {
        match layer {
            Layer::Shared => ImportCategory::PublicShared,
            Layer::Entities => ImportCategory::PublicEntities,
            Layer::Features => ImportCategory::PublicFeatures,
            Layer::Widgets => ImportCategory::PublicWidgets,
            Layer::Pages => ImportCategory::PublicPages,
            Layer::App => ImportCategory::Library,
        }
    }

    /// A blank line follows this category in a regenerated block.
    fn ends_group(self) -> bool {
        matches!(self, ImportCategory::Library | ImportCategory::PublicOther)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ImportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assigns the ordering category of an import target.
///
/// Anything that is neither relative, nor an `other_import` root, nor a
/// sliced layer counts as a library, including empty targets.
pub fn classify(target: &ImportTarget<'_>, other_import: &[String]) -> ImportCategory {
    if let ImportTarget::Relative(path) = target {
        let extension = path.rsplit('.').next().unwrap_or_default();
        return if STYLE_EXTENSIONS.contains(&extension) {
            ImportCategory::Css
        } else {
            ImportCategory::Relative
        };
    }

    let head = target.head();
    if other_import.iter().any(|root| root == head) {
        return ImportCategory::PublicOther;
    }

    match target {
        ImportTarget::Layered(t) => ImportCategory::for_layer(t.layer),
        ImportTarget::Relative(_) | ImportTarget::External(_) => ImportCategory::Library,
    }
}

/// Per-file ordering state. Build one per file and drop it after `finish`.
pub struct ImportOrdering<'o> {
    other_import: &'o [String],
    buckets: [Vec<ImportStatement>; 9],
    highest: Option<ImportCategory>,
    /// First violation, reported at the end with the block rewrite.
    pending: Option<Violation>,
    block_end: usize,
}

impl<'o> ImportOrdering<'o> {
    pub fn new(other_import: &'o [String]) -> Self {
        Self {
            other_import,
            buckets: Default::default(),
            highest: None,
            pending: None,
            block_end: 0,
        }
    }

    /// Records the next statement in source order.
    ///
    /// Returns a violation to report immediately, if any. The first
    /// violation of the file is kept for [`finish`](Self::finish) instead.
    pub fn visit(&mut self, stmt: &ImportStatement, target: &ImportTarget<'_>) -> Option<Violation> {
        let category = classify(target, self.other_import);
        trace!("'{}' classified as {}", stmt.target, category);

        self.buckets[category.index()].push(stmt.clone());
        self.block_end = self.block_end.max(stmt.span.end);

        let highest = match self.highest {
            Some(highest) if highest.priority() > category.priority() => highest,
            _ => {
                self.highest = Some(category);
                return None;
            }
        };

        debug!("'{}' ({}) comes after {}", stmt.target, category, highest);
        let violation = Violation {
            rule: RuleId::ImportOrder,
            span: stmt.span,
            message: format!("{} must come before {}", category.label(), highest.label()),
            fix: None,
        };
        if self.pending.is_none() {
            self.pending = Some(violation);
            None
        } else {
            Some(violation)
        }
    }

    /// The import block in canonical order and spacing.
    pub fn render_block(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for category in ImportCategory::ALL {
            lines.extend(self.buckets[category.index()].iter().map(render_import));
            if category.ends_group() && lines.last().is_some_and(|line| !line.is_empty()) {
                lines.push(String::new());
            }
        }
        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines.join("\n")
    }

    /// Releases the held-back violation.
    ///
    /// With `rewritable` set it carries a fix replacing everything from the
    /// start of the file to the end of the last import with the regenerated
    /// block. Callers pass `false` when other statements sit between or
    /// before the imports.
    pub fn finish(mut self, rewritable: bool) -> Option<Violation> {
        let mut violation = self.pending.take()?;
        if rewritable {
            let replacement = self.render_block();
            debug!("Regenerated import block spanning 0..{}", self.block_end);
            violation.fix = Some(Fix { span: Span::new(0, self.block_end), replacement });
        }
        Some(violation)
    }
}
