use crate::ast::{FloatLit, Ident, IntLit, Node, NodeKind, Teardown};
use crate::errors::TreeResult;
use crate::teardown::TeardownTrace;
use crate::token::{AddOp, MulOp};
use crate::visiters::ASTVisitor;

/// Any node that can stand where an expression is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Ident),
    IntLiteral(IntLit),
    FloatLiteral(FloatLit),
    Nested(Nested),
    Not(Not),
    Negate(Negate),
    Term(Term),
    Expr(Expr),
}

impl Node for Expression {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_expression(self)
    }

    fn depth(&self) -> usize {
        match self {
            Expression::Identifier(node) => node.depth,
            Expression::IntLiteral(node) => node.depth,
            Expression::FloatLiteral(node) => node.depth,
            Expression::Nested(node) => node.depth,
            Expression::Not(node) => node.depth,
            Expression::Negate(node) => node.depth,
            Expression::Term(node) => node.depth,
            Expression::Expr(node) => node.depth,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Expression::Identifier(_) => NodeKind::Identifier,
            Expression::IntLiteral(_) => NodeKind::IntLiteral,
            Expression::FloatLiteral(_) => NodeKind::FloatLiteral,
            Expression::Nested(_) => NodeKind::Nested,
            Expression::Not(_) => NodeKind::Not,
            Expression::Negate(_) => NodeKind::Negate,
            Expression::Term(_) => NodeKind::Term,
            Expression::Expr(_) => NodeKind::Expr,
        }
    }
}

impl Teardown for Expression {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        match self {
            Expression::Identifier(node) => node.teardown(trace),
            Expression::IntLiteral(node) => node.teardown(trace),
            Expression::FloatLiteral(node) => node.teardown(trace),
            Expression::Nested(node) => node.teardown(trace),
            Expression::Not(node) => node.teardown(trace),
            Expression::Negate(node) => node.teardown(trace),
            Expression::Term(node) => node.teardown(trace),
            Expression::Expr(node) => node.teardown(trace),
        }
    }
}

impl From<Ident> for Expression {
    fn from(node: Ident) -> Self {
        Expression::Identifier(node)
    }
}

impl From<IntLit> for Expression {
    fn from(node: IntLit) -> Self {
        Expression::IntLiteral(node)
    }
}

impl From<FloatLit> for Expression {
    fn from(node: FloatLit) -> Self {
        Expression::FloatLiteral(node)
    }
}

impl From<Nested> for Expression {
    fn from(node: Nested) -> Self {
        Expression::Nested(node)
    }
}

impl From<Not> for Expression {
    fn from(node: Not) -> Self {
        Expression::Not(node)
    }
}

impl From<Negate> for Expression {
    fn from(node: Negate) -> Self {
        Expression::Negate(node)
    }
}

impl From<Term> for Expression {
    fn from(node: Term) -> Self {
        Expression::Term(node)
    }
}

impl From<Expr> for Expression {
    fn from(node: Expr) -> Self {
        Expression::Expr(node)
    }
}

/// Parenthesized sub-expression. Renders exactly as its inner expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Nested {
    pub inner: Box<Expression>,
    pub depth: usize,
}

impl Nested {
    pub fn new(depth: usize, inner: impl Into<Expression>) -> Self {
        Self {
            inner: Box::new(inner.into()),
            depth,
        }
    }
}

impl Node for Nested {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_nested(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Nested
    }
}

impl Teardown for Nested {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Nested, self.depth);
        self.inner.teardown(trace);
    }
}

/// Logical negation.
#[derive(Debug, Clone, PartialEq)]
pub struct Not {
    pub operand: Box<Expression>,
    pub depth: usize,
}

impl Not {
    pub fn new(depth: usize, operand: impl Into<Expression>) -> Self {
        Self {
            operand: Box::new(operand.into()),
            depth,
        }
    }
}

impl Node for Not {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_not(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Not
    }
}

impl Teardown for Not {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Not, self.depth);
        self.operand.teardown(trace);
    }
}

/// Arithmetic negation.
#[derive(Debug, Clone, PartialEq)]
pub struct Negate {
    pub operand: Box<Expression>,
    pub depth: usize,
}

impl Negate {
    pub fn new(depth: usize, operand: impl Into<Expression>) -> Self {
        Self {
            operand: Box::new(operand.into()),
            depth,
        }
    }
}

impl Node for Negate {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_negate(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Negate
    }
}

impl Teardown for Negate {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Negate, self.depth);
        self.operand.teardown(trace);
    }
}

/// `factor { ( "*" | "/" ) factor }`
///
/// Operands and operators are stored as pairs so an operator can never be
/// left without its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub depth: usize,
    first: Box<Expression>,
    rest: Vec<(MulOp, Expression)>,
}

impl Term {
    pub fn new(depth: usize, first: impl Into<Expression>) -> Self {
        Self {
            depth,
            first: Box::new(first.into()),
            rest: Vec::new(),
        }
    }

    /// Appends an operator and its operand. Accepts a `MulOp` or a raw lexer code.
    pub fn push(&mut self, op: impl Into<MulOp>, operand: impl Into<Expression>) {
        self.rest.push((op.into(), operand.into()));
    }

    pub fn with(mut self, op: impl Into<MulOp>, operand: impl Into<Expression>) -> Self {
        self.push(op, operand);
        self
    }

    pub fn first(&self) -> &Expression {
        &self.first
    }

    pub fn rest(&self) -> &[(MulOp, Expression)] {
        &self.rest
    }

    pub fn operators(&self) -> impl Iterator<Item = MulOp> + '_ {
        self.rest.iter().map(|(op, _)| *op)
    }
}

impl Node for Term {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_term(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Term
    }
}

impl Teardown for Term {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Term, self.depth);
        self.first.teardown(trace);
        for (_, operand) in self.rest {
            operand.teardown(trace);
        }
    }
}

/// `term { ( "+" | "-" ) term }`
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub depth: usize,
    first: Term,
    rest: Vec<(AddOp, Term)>,
}

impl Expr {
    pub fn new(depth: usize, first: Term) -> Self {
        Self {
            depth,
            first,
            rest: Vec::new(),
        }
    }

    /// Appends an operator and its term. Accepts an `AddOp` or a raw lexer code.
    pub fn push(&mut self, op: impl Into<AddOp>, term: Term) {
        self.rest.push((op.into(), term));
    }

    pub fn with(mut self, op: impl Into<AddOp>, term: Term) -> Self {
        self.push(op, term);
        self
    }

    pub fn first(&self) -> &Term {
        &self.first
    }

    pub fn rest(&self) -> &[(AddOp, Term)] {
        &self.rest
    }

    pub fn operators(&self) -> impl Iterator<Item = AddOp> + '_ {
        self.rest.iter().map(|(op, _)| *op)
    }
}

impl Node for Expr {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_expr(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Expr
    }
}

impl Teardown for Expr {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Expr, self.depth);
        self.first.teardown(trace);
        for (_, term) in self.rest {
            term.teardown(trace);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{TOK_ADD_OP, TOK_DIV_OP, TOK_MULT_OP};

    #[test]
    fn term_keeps_operators_paired_with_operands() {
        let term = Term::new(1, IntLit::new(2, 6))
            .with(TOK_MULT_OP, IntLit::new(2, 7))
            .with(TOK_DIV_OP, Ident::new(2, "k"));
        assert_eq!(term.rest().len(), 2);
        assert_eq!(term.operators().collect::<Vec<_>>(), vec![MulOp::Mul, MulOp::Div]);
        assert_eq!(term.rest()[1].1, Expression::from(Ident::new(2, "k")));
    }

    #[test]
    fn expr_accepts_enum_and_code_operators() {
        let expr = Expr::new(0, Term::new(1, IntLit::new(2, 1)))
            .with(AddOp::Sub, Term::new(1, IntLit::new(2, 2)))
            .with(TOK_ADD_OP, Term::new(1, IntLit::new(2, 3)));
        assert_eq!(expr.operators().collect::<Vec<_>>(), vec![AddOp::Sub, AddOp::Add]);
        assert_eq!(expr.first().depth, 1);
    }

    #[test]
    fn expression_reports_variant_depth_and_kind() {
        let inner = Expr::new(3, Term::new(4, IntLit::new(5, 0)));
        let nested: Expression = Nested::new(3, inner).into();
        assert_eq!(nested.depth(), 3);
        assert_eq!(nested.kind(), NodeKind::Nested);
    }
}
