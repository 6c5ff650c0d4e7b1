//! Destructuring default rewriter.
//!
//! Walks the generated program and attaches the fallback as the default of
//! every component binding destructured from `_components`:
//!
//! ```text
//! const { Alpha, Beta } = _components;
//!   ->
//! const { Alpha = _EmptyComponent, Beta = _EmptyComponent } = _components;
//! ```
//!
//! Bindings that already carry a default keep it, the rest element is never
//! touched, and a renamed binding (`{ Alpha: Local }`) is not eligible: the
//! property key must equal the bound identifier.

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_ast_visit::walk_mut::walk_variable_declarator;
use oxc_ast_visit::VisitMut;
use oxc_span::SPAN;

use crate::fallback::{empty_component_reference, COMPONENTS_IDENT};
use crate::matcher::ComponentMatcher;

pub struct DefaultRewriter<'a, 'm> {
    ast: AstBuilder<'a>,
    matcher: &'m ComponentMatcher,
    /// Bindings rewritten so far.
    pub rewritten: usize,
}

impl<'a, 'm> DefaultRewriter<'a, 'm> {
    pub fn new(allocator: &'a Allocator, matcher: &'m ComponentMatcher) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            matcher,
            rewritten: 0,
        }
    }

    fn is_components_init(init: Option<&Expression<'a>>) -> bool {
        matches!(init, Some(Expression::Identifier(id)) if id.name == COMPONENTS_IDENT)
    }

    fn rewrite_pattern(&mut self, pattern: &mut ObjectPattern<'a>) {
        for property in pattern.properties.iter_mut() {
            let PropertyKey::StaticIdentifier(key) = &property.key else {
                continue;
            };
            // Only a bare identifier value qualifies; an AssignmentPattern
            // here means the binding already has a default.
            let BindingPattern::BindingIdentifier(value) = &property.value else {
                continue;
            };
            if key.name != value.name {
                continue;
            }
            let name = value.name;
            if !self.matcher.matches(name.as_str()) {
                continue;
            }
            property.value = self.ast.binding_pattern_assignment_pattern(
                SPAN,
                self.ast.binding_pattern_binding_identifier(SPAN, name),
                empty_component_reference(&self.ast),
            );
            self.rewritten += 1;
        }
        // pattern.rest is structurally separate and stays as parsed
    }
}

impl<'a, 'm> VisitMut<'a> for DefaultRewriter<'a, 'm> {
    fn visit_variable_declarator(&mut self, declarator: &mut VariableDeclarator<'a>) {
        if Self::is_components_init(declarator.init.as_ref()) {
            if let BindingPattern::ObjectPattern(pattern) = &mut declarator.id {
                self.rewrite_pattern(pattern);
                // A components destructure holds no nested declarators;
                // do not re-enter the subtree that was just rewritten.
                return;
            }
        }
        walk_variable_declarator(self, declarator);
    }
}
