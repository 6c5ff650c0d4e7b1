//! Fallback value construction.
//!
//! Both transform steps share these builders: the injector declares the
//! fallback once at top level, the rewriter references it by name at every
//! defaulted binding. The single shared declaration is the only strategy in
//! use; inline duplicates of the literal are never emitted.

use oxc_allocator::Box as oxc_box;
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_span::SPAN;

/// Reserved identifier the generated program destructures component
/// implementations from.
pub const COMPONENTS_IDENT: &str = "_components";

/// Reserved name of the shared fallback binding.
pub const EMPTY_COMPONENT_IDENT: &str = "_EmptyComponent";

/// `() => null`, a niladic component that renders nothing.
pub fn empty_component_literal<'a>(ast: &AstBuilder<'a>) -> Expression<'a> {
    let params = ast.formal_parameters(
        SPAN,
        FormalParameterKind::ArrowFormalParameters,
        ast.vec(),
        None::<oxc_box<FormalParameterRest>>,
    );
    let body = ast.function_body(
        SPAN,
        ast.vec(),
        ast.vec1(ast.statement_expression(SPAN, ast.expression_null_literal(SPAN))),
    );
    ast.expression_arrow_function(
        SPAN,
        true,
        false,
        None::<oxc_box<TSTypeParameterDeclaration>>,
        params,
        None::<oxc_box<TSTypeAnnotation>>,
        body,
    )
}

/// `const _EmptyComponent = () => null;`
pub fn empty_component_declaration<'a>(ast: &AstBuilder<'a>) -> Statement<'a> {
    let declarator = ast.variable_declarator(
        SPAN,
        VariableDeclarationKind::Const,
        ast.binding_pattern_binding_identifier(SPAN, EMPTY_COMPONENT_IDENT),
        None::<oxc_box<TSTypeAnnotation>>,
        Some(empty_component_literal(ast)),
        false,
    );
    Statement::from(ast.declaration_variable(
        SPAN,
        VariableDeclarationKind::Const,
        ast.vec1(declarator),
        false,
    ))
}

/// `_EmptyComponent`, for use as a binding default.
pub fn empty_component_reference<'a>(ast: &AstBuilder<'a>) -> Expression<'a> {
    ast.expression_identifier(SPAN, EMPTY_COMPONENT_IDENT)
}
