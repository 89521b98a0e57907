use crate::analysis::ReachabilityMode;
use miette::{Diagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a configuration file
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", path.display())]
    #[diagnostic(code(tsdeadcode::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", path.display())]
    #[diagnostic(
        code(tsdeadcode::config::parse),
        help("config files may be YAML (.yml/.yaml) or TOML (.toml)")
    )]
    Parse { path: PathBuf, message: String },
}

/// Configuration for a dead code analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions to analyze, without the leading dot
    pub extensions: Vec<String>,

    /// Directory names that are never descended into
    pub excluded_dirs: Vec<String>,

    /// Relative-path substrings that keep an unreachable file out of the dead file list
    pub dead_file_exemptions: Vec<String>,

    /// Basenames of files the framework loads by convention
    pub root_basenames: Vec<String>,

    /// Import alias configuration
    pub alias: AliasConfig,

    /// Honor .gitignore files while walking the tree
    pub respect_gitignore: bool,

    /// Maximum directory depth to walk
    pub max_depth: Option<usize>,

    /// How file liveness is propagated from the roots
    pub reachability: ReachabilityMode,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Specifier prefix, e.g. "@/"
    pub prefix: String,

    /// Directory the prefix maps to, relative to the project root
    pub target: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the JSON report is written
    pub output: PathBuf,

    /// How many entries each terminal section shows
    pub max_examples: ExampleLimits,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleLimits {
    pub dead_files: usize,
    pub unused_exports: usize,
    pub unused_imports: usize,
    pub unused_locals: usize,
    pub unused_types: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: ["ts", "tsx", "js", "jsx"].map(String::from).to_vec(),
            excluded_dirs: ["node_modules", ".next", "dist"].map(String::from).to_vec(),
            dead_file_exemptions: ["test", "spec", ".config.", "__tests__"]
                .map(String::from)
                .to_vec(),
            root_basenames: [
                "page.tsx",
                "page.ts",
                "layout.tsx",
                "layout.ts",
                "middleware.ts",
                "next.config.js",
                "_app.tsx",
                "_document.tsx",
                "template.tsx",
                "loading.tsx",
                "error.tsx",
                "not-found.tsx",
                "route.ts",
            ]
            .map(String::from)
            .to_vec(),
            alias: AliasConfig::default(),
            respect_gitignore: false,
            max_depth: None,
            reachability: ReachabilityMode::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            prefix: "@/".to_string(),
            target: PathBuf::from("src"),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dead-code-report.json"),
            max_examples: ExampleLimits::default(),
        }
    }
}

impl Default for ExampleLimits {
    fn default() -> Self {
        Self {
            dead_files: 20,
            unused_exports: 15,
            unused_imports: 15,
            unused_locals: 10,
            unused_types: 10,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string())),
            "toml" => toml::from_str(&contents).map_err(|e| parse_error(e.to_string())),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".tsdeadcode.yml",
            ".tsdeadcode.yaml",
            ".tsdeadcode.toml",
            "tsdeadcode.yml",
            "tsdeadcode.yaml",
            "tsdeadcode.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                debug!("Loading config from {}", path.display());
                return Ok(Self::from_file(&path)?);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check whether a directory name is on the deny-list
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Check whether a path carries one of the analyzed extensions
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Check whether a basename marks a framework root
    pub fn is_root_basename(&self, basename: &str) -> bool {
        self.root_basenames.iter().any(|b| b == basename)
    }

    /// Absolute directory the alias prefix resolves into
    pub fn alias_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.alias.target)
    }
}
