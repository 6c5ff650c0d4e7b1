//! Fallback definition injection.
//!
//! Splices `const _EmptyComponent = () => null;` into the program's
//! top-level statement list so the rewritten destructuring defaults have a
//! declaration to reference.

use oxc_ast::ast::*;
use oxc_ast::AstBuilder;

use crate::fallback::{empty_component_declaration, EMPTY_COMPONENT_IDENT};

/// Insert the fallback declaration immediately before the first top-level
/// function declaration, leaving the relative order of every existing
/// statement intact. Scans direct children of the program only, and stops
/// at the first decision point: an existing `_EmptyComponent` declaration
/// means a previous run already inserted it, and a program with no
/// top-level function declaration has no use site, so nothing is inserted.
///
/// Returns whether a declaration was inserted.
pub fn inject_empty_component<'a>(ast: &AstBuilder<'a>, program: &mut Program<'a>) -> bool {
    let mut insert_at = None;
    for (index, stmt) in program.body.iter().enumerate() {
        if declares_empty_component(stmt) {
            return false;
        }
        if matches!(stmt, Statement::FunctionDeclaration(_)) {
            insert_at = Some(index);
            break;
        }
    }

    if let Some(index) = insert_at {
        program.body.insert(index, empty_component_declaration(ast));
        return true;
    }
    false
}

fn declares_empty_component(stmt: &Statement) -> bool {
    let Statement::VariableDeclaration(decl) = stmt else {
        return false;
    };
    decl.declarations.iter().any(|declarator| {
        matches!(
            &declarator.id,
            BindingPattern::BindingIdentifier(id) if id.name == EMPTY_COMPONENT_IDENT
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_codegen::Codegen;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn inject(code: &str) -> (bool, String) {
        let allocator = Allocator::default();
        let source_type = SourceType::default().with_module(true);
        let mut ret = Parser::new(&allocator, code, source_type).parse();
        assert!(ret.errors.is_empty(), "fixture must parse: {:?}", ret.errors);
        let ast = AstBuilder::new(&allocator);
        let inserted = inject_empty_component(&ast, &mut ret.program);
        (inserted, Codegen::new().build(&ret.program).code)
    }

    #[test]
    fn inserts_before_first_function_declaration() {
        let (inserted, code) = inject("const a = 1;\nfunction first() {}\nfunction second() {}");
        assert!(inserted);
        let decl_at = code.find("const _EmptyComponent = () => null").unwrap();
        assert!(decl_at > code.find("const a = 1").unwrap());
        assert!(decl_at < code.find("function first").unwrap());
        assert_eq!(code.matches("_EmptyComponent").count(), 1);
    }

    #[test]
    fn skips_program_without_function_declaration() {
        let (inserted, code) = inject("const a = 1;\nexport default a;");
        assert!(!inserted);
        assert!(!code.contains("_EmptyComponent"));
    }

    #[test]
    fn skips_when_already_declared() {
        let (inserted, code) =
            inject("const _EmptyComponent = () => null;\nfunction render() {}");
        assert!(!inserted);
        assert_eq!(code.matches("_EmptyComponent").count(), 1);
    }

    #[test]
    fn ignores_nested_function_declarations() {
        let (inserted, _) = inject("const run = () => { function inner() {} };");
        assert!(!inserted);
    }
}
