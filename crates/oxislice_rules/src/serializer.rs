use crate::types::{ImportStatement, NamedBinding};

/// Renders an import declaration in canonical form.
///
/// ```
/// use oxislice_rules::{ImportStatement, NamedBinding, Span, render_import};
///
/// let stmt = ImportStatement {
///     default_binding: Some("Button".to_string()),
///     namespace_binding: None,
///     named_bindings: vec![NamedBinding::new("ButtonLol", "ButtonDeprecated")],
///     target: "shared/Button".to_string(),
///     span: Span::default(),
///     source_span: Span::default(),
/// };
/// assert_eq!(
///     render_import(&stmt),
///     "import Button, { ButtonLol as ButtonDeprecated } from 'shared/Button';"
/// );
/// ```
pub fn render_import(stmt: &ImportStatement) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(3);
    if let Some(default) = &stmt.default_binding {
        clauses.push(default.clone());
    }
    if let Some(namespace) = &stmt.namespace_binding {
        clauses.push(format!("* as {namespace}"));
    }
    if !stmt.named_bindings.is_empty() {
        let named: Vec<String> = stmt.named_bindings.iter().map(render_named).collect();
        clauses.push(format!("{{ {} }}", named.join(", ")));
    }

    if clauses.is_empty() {
        format!("import '{}';", stmt.target)
    } else {
        format!("import {} from '{}';", clauses.join(", "), stmt.target)
    }
}

fn render_named(binding: &NamedBinding) -> String {
    if binding.imported == binding.local {
        binding.local.clone()
    } else {
        format!("{} as {}", binding.imported, binding.local)
    }
}
