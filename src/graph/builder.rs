use super::{
    ExportSymbol, FileSymbols, ImportEdge, ModuleGraph, Resolution, SpecifierResolver,
};
use crate::config::Config;
use crate::discovery::{SourceFile, SourceIndex};
use crate::parser::{Parser as SourceParser, TypeScriptParser};
use crate::warning::AnalysisWarning;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

/// Builder for constructing the module graph from an indexed tree
pub struct ModuleGraphBuilder {
    parser: TypeScriptParser,
    resolver: SpecifierResolver,
    progress: ProgressBar,
}

/// Per-file extraction output, merged after the parallel pass
struct ExtractedFile {
    symbols: FileSymbols,
    warnings: Vec<AnalysisWarning>,
}

impl ModuleGraphBuilder {
    pub fn new(config: &Config, index: &SourceIndex) -> Self {
        Self {
            parser: TypeScriptParser::new(config.alias.prefix.clone()),
            resolver: SpecifierResolver::new(config, index.root()),
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-file progress on the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Extract and resolve every file, then assemble the graph
    ///
    /// Files are processed in parallel; results are merged in `FileId` order
    /// so the graph and the warning list are identical from run to run.
    pub fn build(&self, index: &SourceIndex, warnings: &mut Vec<AnalysisWarning>) -> ModuleGraph {
        info!("Extracting declarations from {} files...", index.len());
        self.progress.set_length(index.len() as u64);

        let extracted: Vec<ExtractedFile> = index
            .files()
            .par_iter()
            .map(|file| {
                let result = self.extract_file(file, index);
                self.progress.inc(1);
                result
            })
            .collect();

        self.progress.finish_and_clear();

        let mut graph = ModuleGraph::new();
        let mut edges = Vec::new();

        for (file, extracted) in index.files().iter().zip(extracted) {
            for warning in extracted.warnings {
                warn!("{}", warning);
                warnings.push(warning);
            }
            for edge in &extracted.symbols.imports {
                if let Some(target) = edge.resolved {
                    edges.push((edge.from, target, edge.kind));
                }
            }
            graph.add_file(file.id, extracted.symbols);
        }

        for (from, to, kind) in edges {
            graph.add_import(from, to, kind);
        }

        info!(
            "Module graph: {} files, {} import edges",
            graph.file_count(),
            graph.edge_count()
        );
        graph
    }

    fn extract_file(&self, file: &SourceFile, index: &SourceIndex) -> ExtractedFile {
        let parsed = self.parser.parse(&file.path, &file.content);
        let mut warnings = Vec::new();

        let imports = parsed
            .imports
            .into_iter()
            .map(|stmt| {
                let resolution = self.resolver.resolve(file, &stmt.specifier, stmt.origin, index);
                let resolved = match resolution {
                    Resolution::Indexed(id) => Some(id),
                    Resolution::External => None,
                    Resolution::OutsideIndex(path) => {
                        trace!(
                            "{}: '{}' resolves outside the analyzed set ({})",
                            file.relative_path,
                            stmt.specifier,
                            path.display()
                        );
                        None
                    }
                    Resolution::Unresolved => {
                        warnings.push(AnalysisWarning::UnresolvedImport {
                            file: PathBuf::from(&file.relative_path),
                            specifier: stmt.specifier.clone(),
                        });
                        None
                    }
                };

                ImportEdge {
                    from: file.id,
                    specifier: stmt.specifier,
                    origin: stmt.origin,
                    kind: stmt.kind,
                    resolved,
                    names: stmt.names,
                }
            })
            .collect();

        for expression in parsed.dynamic_imports {
            warnings.push(AnalysisWarning::UnresolvableDynamicImport {
                file: PathBuf::from(&file.relative_path),
                expression,
            });
        }

        let exports = parsed
            .exports
            .into_iter()
            .map(|export| ExportSymbol {
                owner: file.id,
                name: export.name,
                kind: export.kind,
            })
            .collect();

        debug!("Extracted {}", file.relative_path);

        ExtractedFile {
            symbols: FileSymbols {
                imports,
                exports,
                locals: parsed.locals,
                types: parsed.types,
                import_spans: parsed.import_spans,
            },
            warnings,
        }
    }
}
