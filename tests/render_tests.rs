use parsetree::ast::{
    AssignStmt, Block, CompoundStmt, Expr, FloatLit, Ident, IfStmt, IntLit, Negate, Nested, Node,
    Not, Program, Read, Term, WhileStmt, Write,
};
use parsetree::config::TreeConfig;
use parsetree::errors::TreeResult;
use parsetree::token::{AddOp, MulOp, TOK_ADD_OP};

fn int_term(depth: usize, value: i64) -> Term {
    Term::new(depth, IntLit::new(depth + 1, value))
}

#[test]
fn test_expr_with_single_addition() -> TreeResult<()> {
    let expr = Expr::new(0, int_term(1, 3)).with(TOK_ADD_OP, int_term(1, 4));
    let expected = "\
(expr
| (term
| | (INTLIT: 3)
| term)
+
| (term
| | (INTLIT: 4)
| term)
expr)
";
    let out = expr.render()?;
    assert_eq!(out, expected);
    assert!(!out.contains('-'));
    assert!(!out.contains('*'));
    assert!(!out.contains('/'));
    Ok(())
}

#[test]
fn test_if_without_else_omits_else_section() -> TreeResult<()> {
    let stmt = IfStmt::new(
        0,
        Ident::new(1, "x"),
        Write::new(1, IntLit::new(2, 1)),
        None,
    );
    let expected = "\
(IF
| (IDENT: x)
THEN
| (WRITE
| | (INTLIT: 1)
| WRITE)
IF)
";
    let out = stmt.render()?;
    assert_eq!(out, expected);
    assert!(!out.contains("ELSE"));
    Ok(())
}

#[test]
fn test_if_with_else_renders_both_branches_in_order() -> TreeResult<()> {
    let stmt = IfStmt::new(
        0,
        Ident::new(1, "x"),
        Write::new(1, IntLit::new(2, 1)),
        Some(Write::new(1, IntLit::new(2, 2)).into()),
    );
    let expected = "\
(IF
| (IDENT: x)
THEN
| (WRITE
| | (INTLIT: 1)
| WRITE)
ELSE
| (WRITE
| | (INTLIT: 2)
| WRITE)
IF)
";
    assert_eq!(stmt.render()?, expected);
    Ok(())
}

#[test]
fn test_term_operators_render_in_supplied_order() -> TreeResult<()> {
    let term = Term::new(0, Ident::new(1, "a"))
        .with(MulOp::Mul, IntLit::new(1, 2))
        .with(MulOp::Div, FloatLit::new(1, 0.5));
    let expected = "\
(term
| (IDENT: a)
*
| (INTLIT: 2)
/
| (FLOATLIT: 0.5)
term)
";
    assert_eq!(term.render()?, expected);
    Ok(())
}

#[test]
fn test_expr_operators_render_in_supplied_order() -> TreeResult<()> {
    let expr = Expr::new(0, int_term(1, 1))
        .with(AddOp::Add, int_term(1, 2))
        .with(AddOp::Sub, int_term(1, 3));
    let out = expr.render()?;
    let operators: Vec<&str> = out
        .lines()
        .filter(|line| *line == "+" || *line == "-")
        .collect();
    assert_eq!(operators, vec!["+", "-"]);
    let plus = out.find("\n+\n").unwrap();
    let two = out.find("(INTLIT: 2)").unwrap();
    let minus = out.find("\n-\n").unwrap();
    let three = out.find("(INTLIT: 3)").unwrap();
    assert!(plus < two && two < minus && minus < three);
    Ok(())
}

#[test]
fn test_nested_expression_is_transparent() -> TreeResult<()> {
    let nested = Nested::new(1, Expr::new(1, Term::new(2, Ident::new(3, "y"))));
    let expected = "\
| (expr
| | (term
| | | (IDENT: y)
| | term)
| expr)
";
    assert_eq!(nested.render()?, expected);
    Ok(())
}

#[test]
fn test_unary_wrappers() -> TreeResult<()> {
    let not = Not::new(0, Negate::new(1, IntLit::new(2, 5)));
    let expected = "\
(NOT
| (MINUS
| | (INTLIT: 5)
| MINUS)
NOT)
";
    assert_eq!(not.render()?, expected);
    Ok(())
}

#[test]
fn test_assignment() -> TreeResult<()> {
    let stmt = AssignStmt::new(1, Ident::new(2, "x"), IntLit::new(2, 0));
    let expected = "\
| (ASSIGNMENT
| | (IDENT: x)
| =
| | (INTLIT: 0)
| ASSIGNMENT)
";
    assert_eq!(stmt.render()?, expected);
    Ok(())
}

#[test]
fn test_while_with_read_body() -> TreeResult<()> {
    let stmt = WhileStmt::new(0, Ident::new(1, "c"), Read::new(1, Ident::new(2, "c")));
    let expected = "\
(WHILE
| (IDENT: c)
DO
| (READ
| | (IDENT: c)
| READ)
WHILE)
";
    assert_eq!(stmt.render()?, expected);
    Ok(())
}

#[test]
fn test_program_and_block_pass_through() -> TreeResult<()> {
    let compound = CompoundStmt::new(0).with(Write::new(1, IntLit::new(2, 7)));
    let program = Program::new(0, Block::new(0, compound.clone()));
    let expected = "\
(COMPOUND
| (WRITE
| | (INTLIT: 7)
| WRITE)
COMPOUND)
";
    assert_eq!(program.render()?, expected);
    assert_eq!(program.block().render()?, compound.render()?);
    Ok(())
}

#[test]
fn test_empty_compound() -> TreeResult<()> {
    let compound = CompoundStmt::new(2);
    assert!(compound.is_empty());
    assert_eq!(compound.render()?, "| | (COMPOUND\n| | COMPOUND)\n");
    Ok(())
}

#[test]
fn test_float_literal_uses_six_significant_digits() -> TreeResult<()> {
    assert_eq!(FloatLit::new(0, 2.0).render()?, "(FLOATLIT: 2)\n");
    assert_eq!(FloatLit::new(0, 1.25).render()?, "(FLOATLIT: 1.25)\n");
    assert_eq!(FloatLit::new(0, 1234567.0).render()?, "(FLOATLIT: 1.23457e+06)\n");
    assert_eq!(FloatLit::new(0, 1e20).render()?, "(FLOATLIT: 1e+20)\n");
    assert_eq!(FloatLit::new(0, 1e-7).render()?, "(FLOATLIT: 1e-07)\n");
    assert_eq!(FloatLit::new(0, 0.1 + 0.2).render()?, "(FLOATLIT: 0.3)\n");
    assert_eq!(IntLit::new(0, -12).render()?, "(INTLIT: -12)\n");
    Ok(())
}

#[test]
fn test_float_precision_is_a_render_option() -> TreeResult<()> {
    let config = TreeConfig::default().with_float_precision(10);
    let literal = FloatLit::new(0, 1234567.0);
    assert_eq!(literal.render_with(&config)?, "(FLOATLIT: 1234567)\n");
    Ok(())
}

#[test]
fn test_compound_len_tracks_appends() -> TreeResult<()> {
    let mut compound = CompoundStmt::new(0);
    assert_eq!(compound.len(), 0);
    compound.push(Read::new(1, Ident::new(2, "a")));
    compound.push(Write::new(1, Ident::new(2, "a")));
    assert_eq!(compound.len(), 2);
    assert_eq!(compound.statements().len(), compound.len());
    Ok(())
}

#[test]
fn test_print_writes_to_stdout() -> TreeResult<()> {
    Write::new(0, IntLit::new(1, 1)).print()
}

#[test]
fn test_render_is_deterministic() -> TreeResult<()> {
    let mut body = CompoundStmt::new(1);
    body.push(AssignStmt::new(
        2,
        Ident::new(3, "n"),
        Expr::new(3, Term::new(4, Ident::new(5, "n"))).with(AddOp::Sub, int_term(4, 1)),
    ));
    body.push(Write::new(2, Ident::new(3, "n")));
    let program = Program::new(
        0,
        Block::new(
            0,
            CompoundStmt::new(0)
                .with(Read::new(1, Ident::new(2, "n")))
                .with(WhileStmt::new(1, Ident::new(2, "n"), body)),
        ),
    );
    let first = program.render()?;
    let second = program.render()?;
    assert_eq!(first, second);
    assert_eq!(program.clone().render()?, first);
    Ok(())
}

#[test]
fn test_print_to_writes_into_any_sink() -> TreeResult<()> {
    let mut sink: Vec<u8> = Vec::new();
    let ident = Ident::new(1, "z");
    ident.print_to(&mut sink, &Default::default())?;
    assert_eq!(String::from_utf8(sink).unwrap(), "| (IDENT: z)\n");
    Ok(())
}

#[test]
fn test_leaf_indentation_matches_depth() -> TreeResult<()> {
    let term = Term::new(3, Ident::new(4, "deep"));
    let out = term.render()?;
    let leaf = out.lines().find(|line| line.contains("IDENT")).unwrap();
    assert_eq!(leaf.matches("| ").count(), 4);
    let open = out.lines().next().unwrap();
    assert_eq!(open.matches("| ").count(), 3);
    Ok(())
}
