//! Escape-missing-components transform.
//!
//! Generated markup programs pull custom-tag implementations out of the
//! reserved `_components` object; evaluating one throws when the caller
//! supplies no implementation for a tag, because the destructured value is
//! `undefined` and immediately called. This stage rewrites the tree after
//! code generation so that tags accepted by the configured test fall back
//! to a component that renders nothing, while rejected tags keep their
//! original (required-tag) behavior.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_ast::AstBuilder;
use oxc_ast_visit::VisitMut;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inject::inject_empty_component;
use crate::matcher::ComponentMatcher;
use crate::rewrite::DefaultRewriter;

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_GENERATED_CODE_PARSE: &str = "E-ESC-PARSE";
pub const ERR_TEST_SHAPE: &str = "E-ESC-TEST-SHAPE";

/// Failure at the string/bridge boundary. The tree-to-tree transform
/// itself is total over well-formed input and raises nothing; this error
/// only reports a violated producer contract (unparseable generated code)
/// or a malformed test option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscapeError {
    pub code: String,
    pub message: String,
}

impl EscapeError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for EscapeError {}

// ═══════════════════════════════════════════════════════════════════════════════
// TRANSFORM
// ═══════════════════════════════════════════════════════════════════════════════

/// The configured transform: built once from a [`ComponentMatcher`], then
/// applied to any number of trees.
#[derive(Debug, Default)]
pub struct EscapeMissingComponents {
    matcher: ComponentMatcher,
}

impl EscapeMissingComponents {
    pub fn new(matcher: ComponentMatcher) -> Self {
        Self { matcher }
    }

    /// Apply both steps to `program` in place: declare the fallback ahead
    /// of its first use, then default every matching destructured binding.
    /// Synchronous, pure, and safe to re-run on the same tree.
    pub fn transform<'a>(&self, allocator: &'a Allocator, program: &mut Program<'a>) {
        let ast = AstBuilder::new(allocator);
        inject_empty_component(&ast, program);
        let mut rewriter = DefaultRewriter::new(allocator, &self.matcher);
        rewriter.visit_program(program);
    }

    /// String-to-string pipeline over generated code: parse as an ESM/JSX
    /// module, transform, re-print. Unparseable input indicates a
    /// mismatched producer and fails fast instead of silently no-opping.
    pub fn escape_in_code(&self, code: &str) -> Result<String, EscapeError> {
        let allocator = Allocator::default();
        let source_type = SourceType::default().with_module(true).with_jsx(true);
        let mut ret = Parser::new(&allocator, code, source_type).parse();
        if ret.panicked || !ret.errors.is_empty() {
            return Err(EscapeError::new(
                ERR_GENERATED_CODE_PARSE,
                format!("generated code failed to parse: {:?}", ret.errors),
            ));
        }
        self.transform(&allocator, &mut ret.program);
        Ok(Codegen::new().build(&ret.program).code)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI BRIDGE
// ═══════════════════════════════════════════════════════════════════════════════

/// Bridge entry for the JS build tooling. `test_json` carries the data
/// shapes of the test option (`null`, a string, or an array of strings);
/// callables cannot cross the bridge.
#[cfg(feature = "napi")]
#[napi]
pub fn escape_missing_components_native(
    code: String,
    test_json: Option<String>,
) -> napi::Result<String> {
    let test_value = match &test_json {
        Some(raw) => serde_json::from_str::<serde_json::Value>(raw)
            .map_err(|e| napi::Error::from_reason(format!("Test option parse error: {}", e)))?,
        None => serde_json::Value::Null,
    };
    let matcher = ComponentMatcher::from_json(&test_value)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;

    EscapeMissingComponents::new(matcher)
        .escape_in_code(&code)
        .map_err(|e| {
            eprintln!("[EscapeComponents] {}", e);
            napi::Error::from_reason(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_in_code_rejects_unparseable_input() {
        let transform = EscapeMissingComponents::default();
        let err = transform.escape_in_code("function {").unwrap_err();
        assert_eq!(err.code, ERR_GENERATED_CODE_PARSE);
    }

    #[test]
    fn escape_in_code_round_trips() {
        let transform = EscapeMissingComponents::default();
        let out = transform
            .escape_in_code("function render() {\n  const { Alpha } = _components;\n}")
            .unwrap();
        assert!(out.contains("Alpha = _EmptyComponent"));
        assert!(out.contains("const _EmptyComponent = () => null"));
    }
}
