use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{fs, path::Path};

use oxislice_rules::{ImportStatement, NamedBinding, ParsedImports, Span as ByteSpan};

use crate::types::SourceFile;

/// Reads `file` and extracts its top-level import declarations.
pub fn read_source(file: &Path) -> Result<SourceFile> {
    trace!("Reading source: {}", file.display());
    let source =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let imports = parse_imports(file, &source)?;
    Ok(SourceFile { path: file.to_path_buf(), source, imports })
}

/// Extracts the import declarations of `source`, in source order.
///
/// `file` only selects the dialect (TypeScript, JSX) from its extension.
/// Sources with syntax errors are rejected: a partially recovered program
/// is not a safe base for rewriting.
pub fn parse_imports(file: &Path, source: &str) -> Result<ParsedImports> {
    let st = source_type_for(file);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, source, st).parse();

    if panicked || !errors.is_empty() {
        return Err(anyhow!("Failed to parse {}: {} syntax errors", file.display(), errors.len()));
    }

    let mut imports =
        ParsedImports { statements: Vec::new(), imports_at_top: true, type_only_imports: false };
    // Directives and the hashbang live outside `program.body` but still precede the imports.
    let mut seen_other_statement = program.hashbang.is_some() || !program.directives.is_empty();

    for stmt in &program.body {
        let Statement::ImportDeclaration(decl) = stmt else {
            seen_other_statement = true;
            continue;
        };

        if seen_other_statement {
            trace!("Import '{}' follows other code in {}", decl.source.value, file.display());
            imports.imports_at_top = false;
        }
        if decl.import_kind.is_type() {
            imports.type_only_imports = true;
        }
        imports.statements.push(import_statement(decl, &mut imports.type_only_imports));
    }

    debug!(
        "Found {} import declarations in {} (at top: {})",
        imports.statements.len(),
        file.display(),
        imports.imports_at_top
    );
    Ok(imports)
}

fn import_statement(decl: &ImportDeclaration<'_>, type_only: &mut bool) -> ImportStatement {
    let mut stmt = ImportStatement {
        default_binding: None,
        namespace_binding: None,
        named_bindings: Vec::new(),
        target: decl.source.value.to_string(),
        span: ByteSpan::new(decl.span.start as usize, decl.span.end as usize),
        source_span: ByteSpan::new(decl.source.span.start as usize, decl.source.span.end as usize),
    };

    if let Some(specifiers) = &decl.specifiers {
        for specifier in specifiers.iter() {
            match specifier {
                ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                    stmt.default_binding = Some(s.local.name.to_string());
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                    stmt.namespace_binding = Some(s.local.name.to_string());
                }
                ImportDeclarationSpecifier::ImportSpecifier(s) => {
                    // `import { type Foo }` would lose its modifier on regeneration
                    if s.import_kind.is_type() {
                        *type_only = true;
                    }
                    stmt.named_bindings
                        .push(NamedBinding::new(s.imported.name().to_string(), s.local.name.to_string()));
                }
            }
        }
    }

    stmt
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // Import declarations only parse as module code.
    SourceType::default()
        .with_module(true)
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
}
