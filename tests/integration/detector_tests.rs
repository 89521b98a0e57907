//! Integration tests for the symbol usage detectors
//!
//! Fixtures are written to disk and run through the whole engine so the
//! detectors see real extraction and resolution output.

use std::fs;
use tempfile::TempDir;
use tsdeadcode::config::Config;
use tsdeadcode::engine::DeadCodeEngine;
use tsdeadcode::report::{DeadCodeReport, ReportEntry};

fn analyze(files: &[(&str, &str)]) -> DeadCodeReport {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    DeadCodeEngine::new(&Config::default())
        .run(dir.path())
        .unwrap()
        .report
}

fn names(entries: &[ReportEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

// ============================================================================
// Unused exports
// ============================================================================

#[test]
fn test_substring_does_not_count_as_reference() {
    let report = analyze(&[
        ("src/app/page.tsx", "import { Form } from '../form';\nexport default function Page() { return <Form />; }\n"),
        ("src/form.tsx", "export const Form = () => <SubmitButton />;\n"),
        ("src/button.tsx", "export function Button() { return null; }\n"),
    ]);

    assert_eq!(names(&report.unused_exports), vec!["Button"]);
    assert_eq!(report.unused_exports[0].file, "src/button.tsx");
}

#[test]
fn test_export_list_and_default_exports() {
    let report = analyze(&[
        (
            "src/app/page.tsx",
            "import Card, { first } from '../lib';\nexport default function Page() { return Card(first); }\n",
        ),
        (
            "src/lib.ts",
            "function first() {}\nfunction second() {}\nexport { first, second as renamed };\nexport default class Card {}\n",
        ),
    ]);

    // the list records the local name
    assert_eq!(names(&report.unused_exports), vec!["second"]);
}

#[test]
fn test_exports_of_root_files_are_never_unused() {
    let report = analyze(&[(
        "src/app/layout.tsx",
        "export const metadata = { title: 'x' };\nexport const revalidate = 60;\nexport default function RootLayout() {}\n",
    )]);
    assert!(report.unused_exports.is_empty());
}

// ============================================================================
// Unused imports
// ============================================================================

#[test]
fn test_unused_imports_of_every_shape() {
    let report = analyze(&[
        ("src/lib.ts", "export const a = 1; export const b = 2; export default 3;\n"),
        (
            "src/app/page.tsx",
            concat!(
                "import Def, { a as alpha, b } from '../lib';\n",
                "import * as everything from '../lib';\n",
                "import type { Props } from '../lib';\n",
                "import {\n  a,\n} from '../lib';\n",
                "export default function Page() { return alpha + a; }\n",
            ),
        ),
    ]);

    let mut unused = names(&report.unused_imports);
    unused.sort();
    assert_eq!(unused, vec!["Def", "Props", "b", "everything"]);
}

#[test]
fn test_package_imports_are_not_reported() {
    let report = analyze(&[(
        "src/app/page.tsx",
        "import React, { useState } from 'react';\nexport default function Page() {}\n",
    )]);
    assert!(report.unused_imports.is_empty());
}

// ============================================================================
// Unused locals
// ============================================================================

#[test]
fn test_unused_locals() {
    let report = analyze(&[(
        "src/app/page.tsx",
        concat!(
            "const title = 'Home';\n",
            "let counter: number = 0;\n",
            "var legacy = true;\n",
            "export const shared = 1;\n",
            "export default function Page() { counter++; return title; }\n",
        ),
    )]);

    assert_eq!(names(&report.unused_locals), vec!["legacy"]);
}

// ============================================================================
// Unused types
// ============================================================================

#[test]
fn test_unused_types() {
    let report = analyze(&[
        (
            "src/types.ts",
            concat!(
                "export interface User { id: number }\n",
                "export type Role = 'admin' | 'user';\n",
                "interface Internal { a: string }\n",
                "type Alias<T> = T[];\n",
                "// the type of this thing is irrelevant\n",
            ),
        ),
        (
            "src/app/page.tsx",
            "import type { User } from '../types';\nlet u: User;\nexport default function Page() {}\n",
        ),
    ]);

    let mut unused = names(&report.unused_types);
    unused.sort();
    assert_eq!(unused, vec!["Alias", "Internal", "Role"]);
}

#[test]
fn test_type_used_locally_is_not_reported() {
    let report = analyze(&[(
        "src/shapes.ts",
        "interface Point { x: number }\nexport function origin(): Point { return { x: 0 }; }\n",
    )]);
    assert!(report.unused_types.is_empty());
}
