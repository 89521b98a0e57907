//! Integration tests for the full analysis pipeline
//!
//! Each test builds a small project in a temporary directory and runs the
//! engine over it.

use std::fs;
use tempfile::TempDir;
use tsdeadcode::config::Config;
use tsdeadcode::engine::{AnalysisRun, DeadCodeEngine};
use tsdeadcode::report::{HealthBand, JsonReporter, ReportEntry};
use tsdeadcode::{AnalysisWarning, ReachabilityMode};

/// Write files into a fresh temporary project
fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    dir
}

fn run(dir: &TempDir) -> AnalysisRun {
    run_with(dir, &Config::default())
}

fn run_with(dir: &TempDir, config: &Config) -> AnalysisRun {
    DeadCodeEngine::new(config).run(dir.path()).unwrap()
}

fn entry(file: &str, name: &str) -> ReportEntry {
    ReportEntry {
        file: file.to_string(),
        name: name.to_string(),
    }
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_page_util_orphan_scenario() {
    let dir = project(&[
        (
            "src/app/page.tsx",
            "import { helper } from '../util'; export default function Page(){ return helper(); }",
        ),
        (
            "src/util.ts",
            "export function helper(){ return 1; } export function unused(){ return 2; }",
        ),
        ("src/orphan.ts", "export function ghost(){ return 3; }"),
    ]);

    let report = run(&dir).report;

    assert_eq!(report.dead_files, vec!["src/orphan.ts"]);
    assert_eq!(
        report.unused_exports,
        vec![entry("src/orphan.ts", "ghost"), entry("src/util.ts", "unused")]
    );
    assert!(!report.unused_exports.contains(&entry("src/util.ts", "helper")));
    assert!(report.unused_imports.is_empty());
    assert!(report.unused_locals.is_empty());
    assert!(report.unused_types.is_empty());
    assert_eq!(report.total_issues(), 3);
    assert_eq!(report.band(), HealthBand::Good);
}

#[test]
fn test_alias_imports_keep_files_alive() {
    let dir = project(&[
        (
            "src/app/layout.tsx",
            "import { Shell } from '@/components/shell';\nexport default function Layout() { return Shell; }\n",
        ),
        ("src/components/shell.tsx", "export const Shell = 1;\n"),
    ]);

    let report = run(&dir).report;
    assert!(report.dead_files.is_empty());
    assert!(report.unused_exports.is_empty());
}

// ============================================================================
// Reachability
// ============================================================================

#[test]
fn test_roots_are_never_dead() {
    let dir = project(&[
        ("src/app/page.tsx", "export default function Page() {}\n"),
        ("src/app/about/page.tsx", "export default function About() {}\n"),
        ("src/middleware.ts", "export function middleware() {}\n"),
        ("next.config.js", "module.exports = {};\n"),
    ]);

    let report = run(&dir).report;
    assert!(report.dead_files.is_empty());
    assert!(report.unused_exports.is_empty());
}

#[test]
fn test_dead_cluster_is_found() {
    let dir = project(&[
        ("src/app/page.tsx", "export default function Page() {}\n"),
        ("src/a.ts", "import { b } from './b';\nexport const a = b;\n"),
        ("src/b.ts", "import { a } from './a';\nexport const b = () => a;\n"),
    ]);

    let transitive = run(&dir).report;
    assert_eq!(transitive.dead_files, vec!["src/a.ts", "src/b.ts"]);

    let config = Config {
        reachability: ReachabilityMode::OneHop,
        ..Config::default()
    };
    let one_hop = run_with(&dir, &config).report;
    assert!(one_hop.dead_files.is_empty());
}

#[test]
fn test_deep_chain_is_reachable() {
    let dir = project(&[
        ("src/app/page.tsx", "import './one';\n"),
        ("src/app/one.ts", "export * from './two';\n"),
        ("src/app/two.ts", "const load = () => import('./three');\nload();\n"),
        ("src/app/three.ts", "require('../four');\n"),
        ("src/four.ts", "console.log('leaf');\n"),
    ]);

    let run = run(&dir);
    assert!(run.report.dead_files.is_empty());
    assert_eq!(run.stats.reachable, 5);
}

#[test]
fn test_test_and_config_files_are_exempt() {
    let dir = project(&[
        ("src/__tests__/button.tsx", "export const b = 1;\n"),
        ("src/utils.spec.ts", "describe('x', () => {});\n"),
        ("jest.config.js", "module.exports = {};\n"),
        ("src/dead.ts", "console.log(1);\n"),
    ]);

    let report = run(&dir).report;
    assert_eq!(report.dead_files, vec!["src/dead.ts"]);
}

#[test]
fn test_excluded_directories_are_not_scanned() {
    let dir = project(&[
        ("src/app/page.tsx", "export default function Page() {}\n"),
        ("node_modules/lib/index.js", "export const hidden = 1;\n"),
        (".next/server/chunk.js", "export const chunk = 1;\n"),
        ("dist/out.js", "export const out = 1;\n"),
    ]);

    let run = run(&dir);
    assert_eq!(run.stats.files_indexed, 1);
    assert!(run.report.dead_files.is_empty());
}

// ============================================================================
// Warnings
// ============================================================================

#[test]
fn test_unresolved_and_dynamic_imports_warn() {
    let dir = project(&[
        (
            "src/app/page.tsx",
            "import { gone } from './missing';\nimport './styles.css';\nconst m = import(name);\ngone(m);\n",
        ),
        ("src/app/styles.css", "body {}\n"),
    ]);

    let run = run(&dir);
    assert_eq!(run.warnings.len(), 2);
    assert!(run
        .warnings
        .iter()
        .any(|w| matches!(w, AnalysisWarning::UnresolvedImport { specifier, .. } if specifier == "./missing")));
    assert!(run
        .warnings
        .iter()
        .any(|w| matches!(w, AnalysisWarning::UnresolvableDynamicImport { expression, .. } if expression == "name")));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_is_skipped_with_warning() {
    let dir = project(&[("src/app/page.tsx", "export default function Page() {}\n")]);
    fs::write(dir.path().join("src/binary.ts"), b"\xff\xfe\x00\x80").unwrap();

    let run = run(&dir);
    assert_eq!(run.stats.files_discovered, 2);
    assert_eq!(run.stats.files_indexed, 1);
    assert!(run
        .warnings
        .iter()
        .any(|w| matches!(w, AnalysisWarning::UnreadableFile { .. })));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_two_runs_give_identical_json() {
    let dir = project(&[
        ("src/app/page.tsx", "import { a, b } from '../lib';\nimport Unused from '../widget';\nexport default function Page() { return a + b; }\n"),
        ("src/lib.ts", "export const a = 1;\nexport const b = 2;\nexport const c = 3;\nconst tmp = 4;\ntype T = { x: number };\n"),
        ("src/widget.tsx", "export default function Widget() {}\n"),
        ("src/x.ts", "export const x1 = 1;\n"),
        ("src/y.ts", "export const y1 = 1;\n"),
        ("src/z/index.ts", "interface Z { z: string }\n"),
    ]);

    let out = TempDir::new().unwrap();
    let first = out.path().join("first.json");
    let second = out.path().join("second.json");

    JsonReporter::new(first.clone()).write(&run(&dir).report).unwrap();
    JsonReporter::new(second.clone()).write(&run(&dir).report).unwrap();

    let first = fs::read(first).unwrap();
    let second = fs::read(second).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
