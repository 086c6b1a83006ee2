use log::{debug, trace};

use crate::{
    options::RuleOptions,
    target::{ImportTarget, LayeredTarget},
    types::{Fix, ImportStatement, RuleId, Violation},
};

pub(crate) const MESSAGE: &str = "Import must go through the slice public API";

/// Checks that imports stop at a slice's public entry point.
///
/// `other_public_file` tells whether the importing file matches one of the
/// configured `otherPublicPatterns`; only those files may reach the
/// restricted entry (`testing` by default), which sits one level below the
/// normal one.
pub struct PublicApiRule<'o> {
    options: &'o RuleOptions,
}

impl<'o> PublicApiRule<'o> {
    pub fn new(options: &'o RuleOptions) -> Self {
        Self { options }
    }

    /// `layer/slice`, plus one for plus-one layers, plus one for enclosures.
    pub fn allowed_depth(&self, target: &LayeredTarget<'_>) -> usize {
        let mut depth = 2;
        if self.options.is_plus_one(target.layer) {
            depth += 1;
        }
        if let Some(slice) = target.slice
            && self.options.enclosures(target.layer).iter().any(|s| s == slice)
        {
            depth += 1;
        }
        depth
    }

    /// The target reaches past the public entry of its slice.
    pub fn is_violation(&self, target: &ImportTarget<'_>, other_public_file: bool) -> bool {
        let Some(t) = sliced(target) else {
            return false;
        };
        if other_public_file && self.options.other_ignore_layers.contains(&t.layer) {
            trace!("Layer {} exempt from public-api depth in restricted-entry file", t.layer);
            return false;
        }

        let mut allowed = self.allowed_depth(t);
        if other_public_file && self.is_restricted_entry(t) {
            allowed += 1;
        }
        t.depth() > allowed
    }

    /// An ordinary file imports the restricted entry of a slice.
    pub fn uses_restricted_entry(&self, target: &ImportTarget<'_>, other_public_file: bool) -> bool {
        !other_public_file && sliced(target).is_some_and(|t| self.is_restricted_entry(t))
    }

    /// The target cut back to the public entry, alias kept when `raw` had it.
    ///
    /// Restricted-entry files keep their `testing` suffix on top of the
    /// normal entry. Ordinary files always lose it.
    pub fn fix_target(&self, raw: &str, t: &LayeredTarget<'_>, other_public_file: bool) -> String {
        let segments = t.segments();
        let base = self.allowed_depth(t);
        let restricted = self.is_restricted_entry(t);

        let mut kept: Vec<&str> = if restricted && !other_public_file {
            segments[..base.min(segments.len() - 1)].to_vec()
        } else {
            segments[..base.min(segments.len())].to_vec()
        };
        if restricted && other_public_file && kept.len() < segments.len() {
            kept.push(self.options.other_public_import.as_str());
        }

        let path = kept.join("/");
        let alias = &self.options.alias;
        if !alias.is_empty() && raw.strip_prefix(alias.as_str()).is_some_and(|r| r.starts_with('/'))
        {
            format!("{alias}/{path}")
        } else {
            path
        }
    }

    pub(crate) fn check(
        &self,
        stmt: &ImportStatement,
        target: &ImportTarget<'_>,
        other_public_file: bool,
    ) -> Vec<Violation> {
        let Some(t) = sliced(target) else {
            return Vec::new();
        };

        let mut violations = Vec::new();
        if self.is_violation(target, other_public_file) {
            debug!("'{}' reaches past the public API (depth {})", stmt.target, t.depth());
            violations.push(self.violation(stmt, t, other_public_file, MESSAGE.to_string()));
        }
        if self.uses_restricted_entry(target, other_public_file) {
            debug!("'{}' uses the restricted entry from an ordinary file", stmt.target);
            let message = format!(
                "Import from the {} public API is not allowed here",
                self.options.other_public_import
            );
            violations.push(self.violation(stmt, t, other_public_file, message));
        }
        violations
    }

    fn violation(
        &self,
        stmt: &ImportStatement,
        t: &LayeredTarget<'_>,
        other_public_file: bool,
        message: String,
    ) -> Violation {
        let fixed = self.fix_target(&stmt.target, t, other_public_file);
        Violation {
            rule: RuleId::PublicApi,
            span: stmt.span,
            message,
            fix: Some(Fix { span: stmt.source_span, replacement: format!("'{fixed}'") }),
        }
    }

    fn is_restricted_entry(&self, t: &LayeredTarget<'_>) -> bool {
        t.depth() > 2 && t.last_segment() == self.options.other_public_import
    }
}

/// Targets the rule looks at: a sliced layer with at least `layer/slice`.
fn sliced<'t, 'a>(target: &'t ImportTarget<'a>) -> Option<&'t LayeredTarget<'a>> {
    match target {
        ImportTarget::Layered(t) if t.layer.is_sliced() && t.slice.is_some() => Some(t),
        _ => None,
    }
}
