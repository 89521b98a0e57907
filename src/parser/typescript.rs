use super::common::{is_identifier, push_unique, ParseResult, Parser};
use crate::graph::{ExportKind, ExportedName, ImportKind, ImportStatement, SpecifierOrigin};
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::path::Path;
use tracing::trace;

/// Words that can follow `export default` or sit in an export list without
/// naming a local binding
const NON_BINDING_WORDS: &[&str] = &[
    "default", "null", "true", "false", "undefined", "this", "new", "function", "class",
    "async", "await", "extends", "void", "typeof",
];

/// Declaration extractor for TypeScript and JavaScript sources
///
/// Works on the raw text with regular expressions. Comments and string
/// contents are not skipped, so a commented-out declaration still counts.
pub struct TypeScriptParser {
    alias_prefix: String,
    static_import: Regex,
    side_effect_import: Regex,
    re_export: Regex,
    dynamic_import: Regex,
    export_declaration: Regex,
    export_list: Regex,
    export_default: Regex,
    local_binding: Regex,
    type_declaration: Regex,
    as_separator: Regex,
    comment: Regex,
}

impl TypeScriptParser {
    pub fn new(alias_prefix: impl Into<String>) -> Self {
        // Each pattern opens with `(?:^|[^\w$.])` so keywords are only matched
        // at an identifier boundary and never as `obj.import`.
        let static_import = Regex::new(
            r#"(?:^|[^\w$.])(?P<stmt>import\s+(?:type\s+)?(?:\{(?P<named>[^}]*)\}|\*\s*as\s+(?P<ns>[A-Za-z_$][\w$]*)|(?P<default>[A-Za-z_$][\w$]*)(?:\s*,\s*(?:\{(?P<extra>[^}]*)\}|\*\s*as\s+(?P<ns2>[A-Za-z_$][\w$]*)))?)\s*from\s*['"](?P<spec>[^'"\n]+)['"])"#,
        )
        .expect("valid static import pattern");

        let side_effect_import = Regex::new(
            r#"(?:^|[^\w$.])(?P<stmt>import\s*['"](?P<spec>[^'"\n]+)['"])"#,
        )
        .expect("valid side-effect import pattern");

        let re_export = Regex::new(
            r#"(?:^|[^\w$.])export\s+(?:type\s+)?(?:\*(?:\s*as\s+[A-Za-z_$][\w$]*)?|\{[^}]*\})\s*from\s*['"](?P<spec>[^'"\n]+)['"]"#,
        )
        .expect("valid re-export pattern");

        let dynamic_import = Regex::new(
            r#"(?:^|[^\w$.])(?:import|require)\s*\(\s*(?P<arg>[^)]*?)\s*\)"#,
        )
        .expect("valid dynamic import pattern");

        let export_declaration = Regex::new(
            r#"(?:^|[^\w$.])export\s+(?:declare\s+)?(?:async\s+)?(?:abstract\s+)?(?:function\s*\*\s*|function\s+|(?:const\s+enum|const|let|var|class|interface|type|enum|namespace)\s+)(?P<name>[A-Za-z_$][\w$]*)"#,
        )
        .expect("valid export declaration pattern");

        let export_list = Regex::new(
            r#"(?:^|[^\w$.])export\s+(?:type\s+)?\{(?P<list>[^}]*)\}"#,
        )
        .expect("valid export list pattern");

        let export_default = Regex::new(
            r#"(?m)(?:^|[^\w$.])export\s+default\s+(?:async\s+)?(?:(?:function\s*\*\s*|function\s+|class\s+)(?P<decl>[A-Za-z_$][\w$]*)|(?P<ident>[A-Za-z_$][\w$]*)[ \t]*(?:;|//|/\*|[})]|$))"#,
        )
        .expect("valid default export pattern");

        let local_binding = Regex::new(
            r#"(?:^|[^\w$.])(?:const|let|var)\s+(?P<name>[A-Za-z_$][\w$]*)\s*(?::[^=;\n]+)?="#,
        )
        .expect("valid local binding pattern");

        let type_declaration = Regex::new(
            r#"(?:^|[^\w$.])(?:interface|type)\s+(?P<name>[A-Za-z_$][\w$]*)\s*(?:[=<{]|extends\b)"#,
        )
        .expect("valid type declaration pattern");

        let as_separator = Regex::new(r"\s+as\s+").expect("valid alias separator");
        let comment = Regex::new(r"//[^\n]*|/\*(?s:.*?)\*/").expect("valid comment pattern");

        Self {
            alias_prefix: alias_prefix.into(),
            static_import,
            side_effect_import,
            re_export,
            dynamic_import,
            export_declaration,
            export_list,
            export_default,
            local_binding,
            type_declaration,
            as_separator,
            comment,
        }
    }

    /// Classify a specifier as relative, aliased or external
    pub fn origin_of(&self, specifier: &str) -> SpecifierOrigin {
        if specifier.starts_with("./")
            || specifier.starts_with("../")
            || specifier == "."
            || specifier == ".."
        {
            SpecifierOrigin::Relative
        } else if !self.alias_prefix.is_empty() && specifier.starts_with(&self.alias_prefix) {
            SpecifierOrigin::Alias
        } else {
            SpecifierOrigin::External
        }
    }

    fn extract_imports(&self, contents: &str, result: &mut ParseResult) {
        // (position, statement) so the merged list follows source order
        let mut found: Vec<(usize, ImportStatement)> = Vec::new();

        for caps in self.static_import.captures_iter(contents) {
            let Some(stmt) = caps.name("stmt") else { continue };
            let specifier = &caps["spec"];
            let mut names = Vec::new();
            let mut seen = HashSet::new();

            let kind = if let Some(named) = caps.name("named") {
                for name in self.binding_names(named.as_str()) {
                    push_unique(&mut names, &mut seen, &name);
                }
                ImportKind::Named
            } else if let Some(ns) = caps.name("ns") {
                push_unique(&mut names, &mut seen, ns.as_str());
                ImportKind::Namespace
            } else {
                // Default binding, possibly followed by `{...}` or `* as`
                if let Some(default) = caps.name("default") {
                    push_unique(&mut names, &mut seen, default.as_str());
                }
                if let Some(extra) = caps.name("extra") {
                    for name in self.binding_names(extra.as_str()) {
                        push_unique(&mut names, &mut seen, &name);
                    }
                    ImportKind::DefaultAndNamed
                } else if let Some(ns) = caps.name("ns2") {
                    push_unique(&mut names, &mut seen, ns.as_str());
                    ImportKind::DefaultAndNamed
                } else {
                    ImportKind::Default
                }
            };

            result.import_spans.push(stmt.range());
            found.push((
                stmt.start(),
                ImportStatement {
                    specifier: specifier.to_string(),
                    origin: self.origin_of(specifier),
                    kind,
                    names,
                },
            ));
        }

        for caps in self.side_effect_import.captures_iter(contents) {
            let Some(stmt) = caps.name("stmt") else { continue };
            let specifier = &caps["spec"];
            result.import_spans.push(stmt.range());
            found.push((stmt.start(), self.unbound_import(specifier, ImportKind::SideEffect)));
        }

        for caps in self.re_export.captures_iter(contents) {
            let Some(whole) = caps.get(0) else { continue };
            found.push((whole.start(), self.unbound_import(&caps["spec"], ImportKind::ReExport)));
        }

        for caps in self.dynamic_import.captures_iter(contents) {
            let Some(whole) = caps.get(0) else { continue };
            let raw = caps["arg"].trim();
            // Bundler hints such as `/* webpackChunkName: "x" */` sit beside the literal
            let arg = self.comment.replace_all(raw, "");
            let arg = arg.trim();
            if arg.is_empty() {
                continue;
            }
            match string_literal(arg) {
                Some(specifier) => {
                    found.push((whole.start(), self.unbound_import(specifier, ImportKind::Dynamic)));
                }
                None => result.dynamic_imports.push(raw.to_string()),
            }
        }

        found.sort_by_key(|(position, _)| *position);
        result.imports = found.into_iter().map(|(_, stmt)| stmt).collect();
        result.import_spans.sort_by_key(|span| span.start);
    }

    fn unbound_import(&self, specifier: &str, kind: ImportKind) -> ImportStatement {
        ImportStatement {
            specifier: specifier.to_string(),
            origin: self.origin_of(specifier),
            kind,
            names: Vec::new(),
        }
    }

    /// Local names bound by a `{ a, b as c, type D }` import list
    fn binding_names(&self, list: &str) -> Vec<String> {
        let list = self.comment.replace_all(list, "");
        list.split(',')
            .filter_map(|entry| {
                let entry = entry.trim();
                let entry = entry.strip_prefix("type ").map(str::trim).unwrap_or(entry);
                // `a as b` binds `b` in this file
                let local = self.as_separator.split(entry).last()?.trim();
                is_identifier(local).then(|| local.to_string())
            })
            .collect()
    }

    fn extract_exports(&self, contents: &str, result: &mut ParseResult) {
        let mut found: Vec<(usize, ExportedName)> = Vec::new();

        for caps in self.export_declaration.captures_iter(contents) {
            push_export(&mut found, &caps, &caps["name"], ExportKind::Named);
        }

        for caps in self.export_list.captures_iter(contents) {
            let list = self.comment.replace_all(&caps["list"], "");
            for entry in list.split(',') {
                let entry = entry.trim();
                let entry = entry.strip_prefix("type ").map(str::trim).unwrap_or(entry);
                let mut parts = self.as_separator.split(entry);
                let Some(local) = parts.next().map(str::trim) else { continue };
                let public = parts.next().map(str::trim).unwrap_or(local);
                if !is_identifier(local) || NON_BINDING_WORDS.contains(&local) {
                    continue;
                }
                let kind = if public == "default" {
                    ExportKind::Default
                } else {
                    ExportKind::Named
                };
                push_export(&mut found, &caps, local, kind);
            }
        }

        for caps in self.export_default.captures_iter(contents) {
            let name = caps.name("decl").or_else(|| caps.name("ident"));
            if let Some(name) = name {
                if !NON_BINDING_WORDS.contains(&name.as_str()) {
                    push_export(&mut found, &caps, name.as_str(), ExportKind::Default);
                }
            }
        }

        found.sort_by_key(|(position, _)| *position);
        let mut seen = HashSet::new();
        result.exports = found
            .into_iter()
            .filter(|(_, export)| seen.insert(export.name.clone()))
            .map(|(_, export)| export)
            .collect();
    }

    fn extract_declarations(&self, contents: &str, result: &mut ParseResult) {
        let mut seen = HashSet::new();
        for caps in self.local_binding.captures_iter(contents) {
            push_unique(&mut result.locals, &mut seen, &caps["name"]);
        }

        let mut seen = HashSet::new();
        for caps in self.type_declaration.captures_iter(contents) {
            push_unique(&mut result.types, &mut seen, &caps["name"]);
        }
    }
}

impl Parser for TypeScriptParser {
    fn parse(&self, path: &Path, contents: &str) -> ParseResult {
        let mut result = ParseResult::default();

        self.extract_imports(contents, &mut result);
        self.extract_exports(contents, &mut result);
        self.extract_declarations(contents, &mut result);

        trace!(
            "{}: {} imports, {} exports, {} locals, {} types",
            path.display(),
            result.imports.len(),
            result.exports.len(),
            result.locals.len(),
            result.types.len()
        );

        result
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new("@/")
    }
}

fn push_export(found: &mut Vec<(usize, ExportedName)>, caps: &Captures, name: &str, kind: ExportKind) {
    let position = caps.get(0).map_or(0, |m| m.start());
    found.push((
        position,
        ExportedName {
            name: name.to_string(),
            kind,
        },
    ));
}

/// Contents of a quoted string literal, or of a template literal without
/// interpolation
fn string_literal(arg: &str) -> Option<&str> {
    let quote = arg.chars().next()?;
    if !matches!(quote, '\'' | '"' | '`') || arg.len() < 2 || !arg.ends_with(quote) {
        return None;
    }
    let inner = &arg[1..arg.len() - 1];
    if inner.contains(quote) || inner.contains('\n') || (quote == '`' && inner.contains("${")) {
        return None;
    }
    Some(inner)
}
