use clap::Parser;
use oxislice_check::{CheckResult, Config, run_fsd_check};
use oxislice_rules::RuleId;
use std::{fs, path::Path};
use tempfile::TempDir;

const SIDEBAR: &str = "import { Button } from '@/shared/ui';\nimport {Lol, Kek} from 'react';\n\nexport const Sidebar = () => null;\n";

fn write(root: &Path, path: &str, content: &str) {
    let file_path = root.join(path);
    fs::create_dir_all(file_path.parent().unwrap()).unwrap();
    fs::write(file_path, content).unwrap();
}

fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, "tsconfig.json", r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "@/*": ["./src/*"] } } }"#);
    write(root, "oxislice.json", r#"{ "otherPublicPatterns": ["**/*.stories.tsx"] }"#);

    write(
        root,
        "src/features/Auth/ui/LoginForm.tsx",
        "import { Header } from '@/widgets/Header';\n\nexport const LoginForm = () => <Header />;\n",
    );
    write(
        root,
        "src/features/Auth/ui/LoginForm.stories.tsx",
        "import { userMock } from '@/entities/User/testing';\n\nexport default { args: userMock };\n",
    );
    write(
        root,
        "src/pages/Main/ui/MainPage.tsx",
        "import { getUserAuthData } from '@/entities/User/model/selectors/getUserAuthData';\n\nexport const MainPage = () => null;\n",
    );
    write(
        root,
        "src/entities/Article/ui/ArticleList.tsx",
        "import { ArticleView } from '@/entities/Article/model/types';\n\nexport const views: ArticleView[] = [];\n",
    );
    write(root, "src/widgets/Sidebar/ui/Sidebar.tsx", SIDEBAR);
    write(
        root,
        "src/widgets/Header/ui/Header.tsx",
        "import { userMock } from '@/entities/User/testing';\n\nexport const Header = () => userMock;\n",
    );
    write(root, "src/shared/types/global.d.ts", "declare const __DEV__: boolean;\n");
    write(root, "node_modules/react/index.js", "import x from 'widgets/Anything';\n");

    temp_dir
}

fn config(root: &Path, extra: &[&str]) -> Config {
    let mut args = vec!["fsd", "--root", root.to_str().unwrap()];
    args.extend_from_slice(extra);
    Config::parse_from(args)
}

fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path)).unwrap()
}

fn rules_in(result: &CheckResult, file: &str) -> Vec<RuleId> {
    result.warnings.iter().filter(|w| w.file == file).map(|w| w.rule).collect()
}

#[test]
fn test_reports_every_rule() {
    let project = create_project();
    let result = run_fsd_check(config(project.path(), &[])).unwrap();

    assert_eq!(result.files_analyzed, 6);
    assert_eq!(result.fixes_applied, 0);
    assert_eq!(result.warnings.len(), 7);
    assert_eq!(
        result.rule_counts,
        vec![
            (RuleId::LayerImports, 1),
            (RuleId::PublicApi, 4),
            (RuleId::RelativePath, 1),
            (RuleId::ImportOrder, 1)
        ]
    );

    assert_eq!(rules_in(&result, "src/features/Auth/ui/LoginForm.tsx"), vec![RuleId::LayerImports]);
    assert!(rules_in(&result, "src/features/Auth/ui/LoginForm.stories.tsx").is_empty());
    assert_eq!(rules_in(&result, "src/pages/Main/ui/MainPage.tsx"), vec![RuleId::PublicApi]);
    assert_eq!(
        rules_in(&result, "src/entities/Article/ui/ArticleList.tsx"),
        vec![RuleId::RelativePath, RuleId::PublicApi]
    );
    assert_eq!(rules_in(&result, "src/widgets/Header/ui/Header.tsx"), vec![RuleId::PublicApi, RuleId::PublicApi]);

    let order = result.warnings.iter().find(|w| w.rule == RuleId::ImportOrder).unwrap();
    assert_eq!(order.file, "src/widgets/Sidebar/ui/Sidebar.tsx");
    assert_eq!((order.line, order.column), (2, 1));
    assert_eq!(order.message, "LIBRARY must come before SHARED");
    assert_eq!(order.import_statement, "import {Lol, Kek} from 'react';");
    assert!(order.fixable);

    let layer = result.warnings.iter().find(|w| w.rule == RuleId::LayerImports).unwrap();
    assert_eq!(layer.message, "Import from a higher FSD layer is not allowed");
    assert!(!layer.fixable);

    // Reporting alone never touches the files.
    assert_eq!(read(project.path(), "src/widgets/Sidebar/ui/Sidebar.tsx"), SIDEBAR);
}

#[test]
fn test_fix_rewrites_files() {
    let project = create_project();
    let root = project.path();
    let result = run_fsd_check(config(root, &["--fix"])).unwrap();

    assert_eq!(result.fixes_applied, 4);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].rule, RuleId::LayerImports);

    assert_eq!(
        read(root, "src/widgets/Sidebar/ui/Sidebar.tsx"),
        "import { Lol, Kek } from 'react';\n\nimport { Button } from '@/shared/ui';\n\nexport const Sidebar = () => null;\n"
    );
    assert_eq!(
        read(root, "src/pages/Main/ui/MainPage.tsx"),
        "import { getUserAuthData } from '@/entities/User';\n\nexport const MainPage = () => null;\n"
    );
    assert_eq!(
        read(root, "src/entities/Article/ui/ArticleList.tsx"),
        "import { ArticleView } from '../model/types';\n\nexport const views: ArticleView[] = [];\n"
    );
    assert_eq!(
        read(root, "src/widgets/Header/ui/Header.tsx"),
        "import { userMock } from '@/entities/User';\n\nexport const Header = () => userMock;\n"
    );
    assert_eq!(
        read(root, "src/features/Auth/ui/LoginForm.stories.tsx"),
        "import { userMock } from '@/entities/User/testing';\n\nexport default { args: userMock };\n"
    );

    // A second run finds nothing left to fix.
    let again = run_fsd_check(config(root, &["--fix"])).unwrap();
    assert_eq!(again.fixes_applied, 0);
    assert_eq!(again.warnings.len(), 1);
}

#[test]
fn test_fix_keeps_leading_directive() {
    let project = create_project();
    let root = project.path();
    let menu = "'use client';\nimport { Button } from '@/shared/ui';\nimport { useState } from 'react';\n\nexport const Menu = () => useState(0);\n";
    write(root, "src/widgets/Menu/ui/Menu.tsx", menu);

    let result = run_fsd_check(config(root, &["--fix", "--include", "widgets/Menu"])).unwrap();

    assert_eq!(result.fixes_applied, 0);
    assert_eq!(read(root, "src/widgets/Menu/ui/Menu.tsx"), menu);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].rule, RuleId::ImportOrder);
    assert!(!result.warnings[0].fixable);
}

#[test]
fn test_max_fix_passes_limits_rewrites() {
    let project = create_project();
    let root = project.path();
    let result =
        run_fsd_check(config(root, &["--fix", "--max-fix-passes", "0", "--include", "widgets/"])).unwrap();

    assert_eq!(result.fixes_applied, 0);
    assert_eq!(read(root, "src/widgets/Sidebar/ui/Sidebar.tsx"), SIDEBAR);
}

#[test]
fn test_rule_subset_and_include() {
    let project = create_project();
    let result =
        run_fsd_check(config(project.path(), &["--rules", "public-api", "--include", "widgets/"])).unwrap();

    assert_eq!(result.files_analyzed, 2);
    assert_eq!(result.rule_counts, vec![(RuleId::PublicApi, 2)]);
    assert!(result.warnings.iter().all(|w| w.file == "src/widgets/Header/ui/Header.tsx"));
    assert!(result.warnings.iter().any(|w| w.message == "Import from the testing public API is not allowed here"));
}

#[test]
fn test_alias_flag_overrides_tsconfig() {
    let project = create_project();
    // With another alias the `@/` imports look like packages.
    let result = run_fsd_check(config(project.path(), &["--alias", "~"])).unwrap();

    assert_eq!(result.files_analyzed, 6);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unparsable_files_are_skipped() {
    let project = create_project();
    write(project.path(), "src/shared/ui/Broken.ts", "import { from 'x';\n");
    let result = run_fsd_check(config(project.path(), &[])).unwrap();

    assert_eq!(result.files_analyzed, 6);
}

#[test]
fn test_empty_project_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(run_fsd_check(config(temp_dir.path(), &[])).is_err());
}
