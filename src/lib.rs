//! # Escape Missing Components
//!
//! A late compiler stage over the syntax tree a markup-to-program compiler
//! emits. The generated program destructures custom-tag implementations
//! from the reserved `_components` object; when the caller omits one, the
//! destructured value is `undefined` and evaluation throws on the first
//! call. This crate rewrites the tree so that omitted implementations fall
//! back to a component that renders nothing:
//!
//! ```text
//! const _EmptyComponent = () => null;          // injected at top level
//! ...
//! const { Alpha = _EmptyComponent, Beta = _EmptyComponent } = _components;
//! ```
//!
//! Which tags receive the fallback is decided by a [`ComponentMatcher`]:
//! absent (all tags), one name, a set of names, or a custom callable.
//! Unmatched tags keep their original required-tag behavior.
//!
//! The transform is a total function from (tree, test) to tree: no I/O, no
//! external state, and re-running it on an already-rewritten tree changes
//! nothing.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod fallback;
mod inject;
mod matcher;
mod rewrite;
mod transform;


pub use fallback::{COMPONENTS_IDENT, EMPTY_COMPONENT_IDENT};
pub use inject::inject_empty_component;
pub use matcher::{ComponentMatcher, MatchFn};
pub use rewrite::DefaultRewriter;
pub use transform::{
    EscapeError, EscapeMissingComponents, ERR_GENERATED_CODE_PARSE, ERR_TEST_SHAPE,
};

#[cfg(feature = "napi")]
pub use transform::escape_missing_components_native;

#[cfg(feature = "napi")]
#[napi]
pub fn escape_bridge() -> String {
    "Escape Components Native Bridge Connected".to_string()
}
