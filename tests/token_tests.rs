use parsetree::ast::{Expr, IntLit, Node, Term};
use parsetree::errors::TreeResult;
use parsetree::token::{AddOp, MulOp, TOK_ADD_OP, TOK_DIV_OP, TOK_MULT_OP, TOK_SUB_OP};

#[test]
fn test_designated_codes() {
    assert_eq!(AddOp::from_code(TOK_ADD_OP), AddOp::Add);
    assert_eq!(AddOp::from_code(TOK_SUB_OP), AddOp::Sub);
    assert_eq!(MulOp::from_code(TOK_MULT_OP), MulOp::Mul);
    assert_eq!(MulOp::from_code(TOK_DIV_OP), MulOp::Div);
    assert_eq!(AddOp::Sub.code(), TOK_SUB_OP);
    assert_eq!(MulOp::Mul.code(), TOK_MULT_OP);
}

// Unrecognized codes fall through to the second operator of each pair.
#[test]
fn test_unknown_codes_fall_through() {
    assert_eq!(AddOp::from(9999), AddOp::Sub);
    assert_eq!(AddOp::from(TOK_MULT_OP), AddOp::Sub);
    assert_eq!(MulOp::from(0), MulOp::Div);
    assert_eq!(MulOp::from(TOK_ADD_OP), MulOp::Div);
}

#[test]
fn test_symbols() {
    assert_eq!(AddOp::Add.to_string(), "+");
    assert_eq!(AddOp::Sub.to_string(), "-");
    assert_eq!(MulOp::Mul.to_string(), "*");
    assert_eq!(MulOp::Div.to_string(), "/");
}

#[test]
fn test_unknown_codes_render_as_fallback_operator() -> TreeResult<()> {
    let term = Term::new(1, IntLit::new(2, 8)).with(-1_i32, IntLit::new(2, 2));
    let expr = Expr::new(0, term).with(42_i32, Term::new(1, IntLit::new(2, 3)));
    let out = expr.render()?;
    assert!(out.contains("\n| /\n"));
    assert!(out.contains("\n-\n"));
    assert!(!out.contains('+'));
    assert!(!out.contains('*'));
    Ok(())
}
