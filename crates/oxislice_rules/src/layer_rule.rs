use log::debug;

use crate::{
    layer::Layer,
    target::ImportTarget,
    types::{ImportStatement, RuleId, Violation},
};

pub(crate) const MESSAGE: &str = "Import from a higher FSD layer is not allowed";

/// A file on `file_layer` may not import from a layer above it.
///
/// Relative and external targets are never forbidden.
pub fn is_forbidden(file_layer: Layer, target: &ImportTarget<'_>) -> bool {
    match target {
        ImportTarget::Layered(t) => !file_layer.allows(t.layer),
        ImportTarget::Relative(_) | ImportTarget::External(_) => false,
    }
}

/// No fix is offered: moving code between layers is a structural change.
pub(crate) fn check(
    file_layer: Layer,
    stmt: &ImportStatement,
    target: &ImportTarget<'_>,
) -> Option<Violation> {
    if !is_forbidden(file_layer, target) {
        return None;
    }
    debug!("'{}' reaches above layer {}", stmt.target, file_layer);
    Some(Violation {
        rule: RuleId::LayerImports,
        span: stmt.span,
        message: MESSAGE.to_string(),
        fix: None,
    })
}
