use log::{debug, trace};

use crate::{
    layer::FileLocation,
    layer_rule,
    options::RuleOptions,
    ordering::ImportOrdering,
    public_api::PublicApiRule,
    relative_path,
    target::ImportTarget,
    types::{ParsedImports, RuleId, Violation},
};

/// Which rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSelection {
    pub layer_imports: bool,
    pub public_api: bool,
    pub relative_path: bool,
    pub import_order: bool,
}

impl RuleSelection {
    pub fn all() -> Self {
        Self { layer_imports: true, public_api: true, relative_path: true, import_order: true }
    }

    pub fn only(rules: &[RuleId]) -> Self {
        Self {
            layer_imports: rules.contains(&RuleId::LayerImports),
            public_api: rules.contains(&RuleId::PublicApi),
            relative_path: rules.contains(&RuleId::RelativePath),
            import_order: rules.contains(&RuleId::ImportOrder),
        }
    }
}

impl Default for RuleSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// What the rules know about the file being checked.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// `None` when the file is not under any layer directory.
    pub location: Option<FileLocation>,
    /// The file matches `otherPublicPatterns`.
    pub other_public: bool,
}

impl FileContext {
    pub fn new(path: &str, other_public: bool) -> Self {
        Self { location: FileLocation::from_path(path), other_public }
    }
}

pub struct Analyzer<'o> {
    options: &'o RuleOptions,
    rules: RuleSelection,
}

impl<'o> Analyzer<'o> {
    pub fn new(options: &'o RuleOptions, rules: RuleSelection) -> Self {
        Self { options, rules }
    }

    /// Runs the selected rules over the imports of one file.
    ///
    /// Violations come back in the order they were found; the import-order
    /// violation carrying the block rewrite, if any, comes last. That rewrite is
    /// only attached when the imports open the file and none of them is
    /// type-only (`import type`, `{ type X }`).
    pub fn analyze(&self, file: &FileContext, imports: &ParsedImports) -> Vec<Violation> {
        let alias = self.options.alias.as_str();
        let public_api = PublicApiRule::new(self.options);
        let mut ordering = ImportOrdering::new(&self.options.other_import);
        let mut violations = Vec::new();

        for stmt in &imports.statements {
            let target = ImportTarget::parse(&stmt.target, alias);
            trace!("Checking import '{}' as {:?}", stmt.target, target);

            if let Some(location) = &file.location {
                if self.rules.layer_imports {
                    violations.extend(layer_rule::check(location.layer, stmt, &target));
                }
                if self.rules.relative_path {
                    violations.extend(relative_path::check(location, stmt, &target, alias));
                }
            }
            if self.rules.public_api {
                violations.extend(public_api.check(stmt, &target, file.other_public));
            }
            if self.rules.import_order {
                violations.extend(ordering.visit(stmt, &target));
            }
        }

        if self.rules.import_order {
            // Type-only imports would lose their `type` modifier in the regenerated block.
            let rewritable = imports.imports_at_top && !imports.type_only_imports;
            violations.extend(ordering.finish(rewritable));
        }

        debug!("Found {} violations in {} imports", violations.len(), imports.statements.len());
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImportStatement, Span};

    fn imports(targets: &[&str]) -> ParsedImports {
        let mut offset = 0;
        let statements = targets
            .iter()
            .map(|target| {
                let len = format!("import '{target}';").len();
                let stmt = ImportStatement::side_effect(*target, Span::new(offset, offset + len));
                offset += len + 1;
                stmt
            })
            .collect();
        ParsedImports { statements, imports_at_top: true, type_only_imports: false }
    }

    fn rules_of(violations: &[Violation]) -> Vec<RuleId> {
        violations.iter().map(|v| v.rule).collect()
    }

    #[test]
    fn test_file_outside_layers_only_gets_public_api_and_order() {
        let options = RuleOptions::default();
        let analyzer = Analyzer::new(&options, RuleSelection::all());
        let file = FileContext::new("/project/src/index.tsx", false);
        let violations = analyzer.analyze(&file, &imports(&["pages/Main/ui/MainPage", "react"]));
        assert_eq!(rules_of(&violations), vec![RuleId::PublicApi, RuleId::ImportOrder]);
    }

    #[test]
    fn test_all_rules_fire_in_statement_order() {
        let options = RuleOptions { alias: "@".to_string(), ..RuleOptions::default() };
        let analyzer = Analyzer::new(&options, RuleSelection::all());
        let file = FileContext::new("/project/src/entities/Article/ui/ArticleList.tsx", false);
        let violations = analyzer.analyze(
            &file,
            &imports(&["@/widgets/Header", "@/entities/Article/model/types", "react"]),
        );
        assert_eq!(
            rules_of(&violations),
            vec![
                RuleId::LayerImports,
                RuleId::RelativePath,
                RuleId::PublicApi,
                RuleId::ImportOrder,
                RuleId::ImportOrder
            ]
        );
        // The held-back first ordering violation is the one with the rewrite.
        assert!(violations[3].fix.is_none());
        assert!(violations[4].fix.is_some());
        let relative = violations[1].fix.as_ref().unwrap();
        assert_eq!(relative.replacement, "'../model/types'");
    }

    #[test]
    fn test_rule_selection() {
        let options = RuleOptions::default();
        let analyzer = Analyzer::new(&options, RuleSelection::only(&[RuleId::LayerImports]));
        let file = FileContext::new("/project/src/shared/lib/hooks/useAuth.ts", false);
        let violations =
            analyzer.analyze(&file, &imports(&["entities/User/model/selectors", "react"]));
        assert_eq!(rules_of(&violations), vec![RuleId::LayerImports]);
    }

    #[test]
    fn test_type_only_imports_block_the_rewrite() {
        let options = RuleOptions::default();
        let analyzer = Analyzer::new(&options, RuleSelection::only(&[RuleId::ImportOrder]));
        let file = FileContext::new("/project/src/index.tsx", false);
        let mut parsed = imports(&["shared/ui", "react"]);
        assert!(analyzer.analyze(&file, &parsed)[0].fix.is_some());
        parsed.type_only_imports = true;
        assert!(analyzer.analyze(&file, &parsed)[0].fix.is_none());
    }
}
