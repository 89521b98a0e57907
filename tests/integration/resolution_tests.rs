//! Integration tests for specifier resolution against a real file tree

use std::fs;
use tempfile::TempDir;
use tsdeadcode::config::Config;
use tsdeadcode::discovery::{FileFinder, SourceIndex};
use tsdeadcode::graph::{ModuleGraph, ModuleGraphBuilder};
use tsdeadcode::AnalysisWarning;

struct Fixture {
    _dir: TempDir,
    index: SourceIndex,
    graph: ModuleGraph,
    warnings: Vec<AnalysisWarning>,
}

impl Fixture {
    fn build(files: &[(&str, &str)], config: &Config) -> Self {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }

        let discovered = FileFinder::new(config).find_files(dir.path()).unwrap();
        let mut warnings = discovered.warnings;
        let index = SourceIndex::load(&discovered.root, &discovered.files, &mut warnings);
        let graph = ModuleGraphBuilder::new(config, &index).build(&index, &mut warnings);

        Self {
            _dir: dir,
            index,
            graph,
            warnings,
        }
    }

    /// Relative paths of the files `path` imports
    fn imports_of(&self, path: &str) -> Vec<String> {
        let id = self
            .index
            .iter()
            .find(|f| f.relative_path == path)
            .map(|f| f.id)
            .unwrap_or_else(|| panic!("{} not indexed", path));
        self.graph
            .imports_of(id)
            .into_iter()
            .map(|target| self.index.get(target).relative_path.clone())
            .collect()
    }
}

#[test]
fn test_file_wins_over_directory_index() {
    let fx = Fixture::build(
        &[
            ("src/main.ts", "import { x } from './x';\n"),
            ("src/x.ts", "export const x = 1;\n"),
            ("src/x/index.ts", "export const x = 2;\n"),
        ],
        &Config::default(),
    );
    assert_eq!(fx.imports_of("src/main.ts"), vec!["src/x.ts"]);
}

#[test]
fn test_extension_priority_follows_config_order() {
    let fx = Fixture::build(
        &[
            ("src/main.ts", "import { y } from './y';\n"),
            ("src/y.tsx", "export const y = 1;\n"),
            ("src/y.js", "export const y = 2;\n"),
        ],
        &Config::default(),
    );
    assert_eq!(fx.imports_of("src/main.ts"), vec!["src/y.tsx"]);
}

#[test]
fn test_directory_index_and_parent_paths() {
    let fx = Fixture::build(
        &[
            ("src/app/page.tsx", "import { Button } from '../components';\n"),
            ("src/components/index.tsx", "export * from './button';\n"),
            ("src/components/button.tsx", "export const Button = 1;\n"),
        ],
        &Config::default(),
    );
    assert_eq!(fx.imports_of("src/app/page.tsx"), vec!["src/components/index.tsx"]);
    assert_eq!(fx.imports_of("src/components/index.tsx"), vec!["src/components/button.tsx"]);
    assert!(fx.warnings.is_empty());
}

#[test]
fn test_explicit_extension_in_specifier() {
    let fx = Fixture::build(
        &[
            ("src/main.ts", "import data from './data.js';\n"),
            ("src/data.js", "export default {};\n"),
        ],
        &Config::default(),
    );
    assert_eq!(fx.imports_of("src/main.ts"), vec!["src/data.js"]);
}

#[test]
fn test_alias_prefix_and_custom_target() {
    let mut config = Config::default();
    config.alias.prefix = "~/".to_string();
    config.alias.target = "app".into();

    let fx = Fixture::build(
        &[
            ("app/main.ts", "import { util } from '~/lib/util';\nimport { other } from '@/lib/util';\n"),
            ("app/lib/util.ts", "export const util = 1;\n"),
        ],
        &config,
    );
    assert_eq!(fx.imports_of("app/main.ts"), vec!["app/lib/util.ts"]);
    assert!(fx.warnings.is_empty(), "'@/' is a package name under a custom prefix");
}

#[test]
fn test_files_outside_the_index_make_no_edge_and_no_warning() {
    let fx = Fixture::build(
        &[
            ("src/main.ts", "import './globals.css';\nimport data from './data.json';\n"),
            ("src/globals.css", "body {}\n"),
            ("src/data.json", "{}\n"),
        ],
        &Config::default(),
    );
    assert!(fx.imports_of("src/main.ts").is_empty());
    assert!(fx.warnings.is_empty());
}

#[test]
fn test_missing_target_warns_once_per_statement() {
    let fx = Fixture::build(
        &[("src/main.ts", "import { a } from './gone';\nimport { b } from '@/also-gone';\n")],
        &Config::default(),
    );
    assert!(fx.imports_of("src/main.ts").is_empty());
    assert_eq!(fx.warnings.len(), 2);
    assert!(fx
        .warnings
        .iter()
        .all(|w| matches!(w, AnalysisWarning::UnresolvedImport { .. })));
}
