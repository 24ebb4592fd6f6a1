//! Python import extraction.
//!
//! Parses a Python source file and collects the top-level name of every
//! module it imports. `import a.b.c` and `from a.b import c` both
//! contribute `a`. The walk covers nested statement bodies, so imports
//! inside functions, classes, conditionals, and `try` blocks are found.
//!
//! Duplicates are collapsed while discovery order is preserved.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rustpython_parser::ast;

use crate::error::{PydepError, Result};

/// Ordered set of top-level module names.
#[derive(Debug, Default)]
struct ModuleSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ModuleSet {
    /// Record the first dot-segment of an import path.
    fn insert_root(&mut self, import_path: &str) {
        let Some(root) = import_path.split('.').next().filter(|root| !root.is_empty()) else {
            return;
        };
        if self.seen.insert(root.to_string()) {
            self.names.push(root.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Collect the top-level modules imported by the Python file at `path`.
pub fn imported_modules(path: &Path) -> Result<Vec<String>> {
    let source = fs::read_to_string(path)?;
    imported_modules_in_source(&source, path)
}

/// Collect the top-level modules imported by already-loaded Python source.
///
/// `path` is only used for parse diagnostics.
pub fn imported_modules_in_source(source: &str, path: &Path) -> Result<Vec<String>> {
    let source_path = path.display().to_string();
    let parsed = rustpython_parser::parse(source, rustpython_parser::Mode::Module, &source_path)
        .map_err(|e| PydepError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut found = ModuleSet::default();
    if let ast::Mod::Module(module) = &parsed {
        collect_from_body(&module.body, &mut found);
    }

    tracing::debug!(
        "{} imported module(s) in {}",
        found.names.len(),
        path.display()
    );
    Ok(found.into_vec())
}

fn collect_from_body(body: &[ast::Stmt], found: &mut ModuleSet) {
    for stmt in body {
        collect_from_stmt(stmt, found);
    }
}

fn collect_from_stmt(stmt: &ast::Stmt, found: &mut ModuleSet) {
    match stmt {
        ast::Stmt::Import(import) => {
            for alias in &import.names {
                found.insert_root(alias.name.as_str());
            }
        }
        ast::Stmt::ImportFrom(import_from) => match &import_from.module {
            Some(module) => found.insert_root(module.as_str()),
            // `from . import x` names no module; there is nothing
            // installable to record.
            None => tracing::debug!("skipping relative import with no module path"),
        },
        ast::Stmt::FunctionDef(func_def) => collect_from_body(&func_def.body, found),
        ast::Stmt::AsyncFunctionDef(func_def) => collect_from_body(&func_def.body, found),
        ast::Stmt::ClassDef(class_def) => collect_from_body(&class_def.body, found),
        ast::Stmt::If(if_stmt) => {
            collect_from_body(&if_stmt.body, found);
            collect_from_body(&if_stmt.orelse, found);
        }
        ast::Stmt::While(while_stmt) => {
            collect_from_body(&while_stmt.body, found);
            collect_from_body(&while_stmt.orelse, found);
        }
        ast::Stmt::For(for_stmt) => {
            collect_from_body(&for_stmt.body, found);
            collect_from_body(&for_stmt.orelse, found);
        }
        ast::Stmt::AsyncFor(for_stmt) => {
            collect_from_body(&for_stmt.body, found);
            collect_from_body(&for_stmt.orelse, found);
        }
        ast::Stmt::With(with_stmt) => collect_from_body(&with_stmt.body, found),
        ast::Stmt::AsyncWith(with_stmt) => collect_from_body(&with_stmt.body, found),
        ast::Stmt::Try(try_stmt) => {
            collect_from_body(&try_stmt.body, found);
            for handler in &try_stmt.handlers {
                match handler {
                    ast::ExceptHandler::ExceptHandler(handler) => {
                        collect_from_body(&handler.body, found);
                    }
                }
            }
            collect_from_body(&try_stmt.orelse, found);
            collect_from_body(&try_stmt.finalbody, found);
        }
        ast::Stmt::TryStar(try_stmt) => {
            collect_from_body(&try_stmt.body, found);
            for handler in &try_stmt.handlers {
                match handler {
                    ast::ExceptHandler::ExceptHandler(handler) => {
                        collect_from_body(&handler.body, found);
                    }
                }
            }
            collect_from_body(&try_stmt.orelse, found);
            collect_from_body(&try_stmt.finalbody, found);
        }
        ast::Stmt::Match(match_stmt) => {
            for case in &match_stmt.cases {
                collect_from_body(&case.body, found);
            }
        }
        _ => {}
    }
}
