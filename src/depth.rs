use crate::ast::{
    AssignStmt, Block, CompoundStmt, Expr, FloatLit, Ident, IfStmt, IntLit, Negate, Nested,
    NodeKind, Not, Program, Read, Term, WhileStmt, Write,
};
use crate::errors::{TreeError, TreeResult};
use crate::visiters::{
    walk_assign, walk_block, walk_compound, walk_expr, walk_if, walk_program, walk_term,
    walk_while, ASTVisitor,
};

// Depth added between a node and its children.
const NESTING_STEP: usize = 1;
const TRANSPARENT_STEP: usize = 0;

/// Verifies that every child sits one level below its parent, or at the
/// same level below `Program`, `Block` and `Nested`.
#[derive(Debug, Default)]
pub struct DepthChecker {
    expected: Option<usize>,
}

impl DepthChecker {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, kind: NodeKind, depth: usize) -> TreeResult<()> {
        match self.expected {
            Some(expected) if expected != depth => {
                Err(TreeError::depth_mismatch(kind.name(), expected, depth))
            }
            _ => Ok(()),
        }
    }

    fn descend<F>(&mut self, kind: NodeKind, depth: usize, step: usize, body: F) -> TreeResult<()>
    where
        F: FnOnce(&mut Self) -> TreeResult<()>,
    {
        self.check(kind, depth)?;
        let saved = self.expected.replace(depth + step);
        let result = body(self);
        self.expected = saved;
        result
    }
}

impl ASTVisitor for DepthChecker {
    fn visit_program(&mut self, program: &Program) -> TreeResult<()> {
        self.descend(NodeKind::Program, program.depth, TRANSPARENT_STEP, |c| {
            walk_program(c, program)
        })
    }
    fn visit_block(&mut self, block: &Block) -> TreeResult<()> {
        self.descend(NodeKind::Block, block.depth, TRANSPARENT_STEP, |c| walk_block(c, block))
    }
    fn visit_assign(&mut self, stmt: &AssignStmt) -> TreeResult<()> {
        self.descend(NodeKind::Assignment, stmt.depth, NESTING_STEP, |c| walk_assign(c, stmt))
    }
    fn visit_compound(&mut self, stmt: &CompoundStmt) -> TreeResult<()> {
        self.descend(NodeKind::Compound, stmt.depth, NESTING_STEP, |c| walk_compound(c, stmt))
    }
    fn visit_if(&mut self, stmt: &IfStmt) -> TreeResult<()> {
        self.descend(NodeKind::If, stmt.depth, NESTING_STEP, |c| walk_if(c, stmt))
    }
    fn visit_while_statement(&mut self, stmt: &WhileStmt) -> TreeResult<()> {
        self.descend(NodeKind::While, stmt.depth, NESTING_STEP, |c| walk_while(c, stmt))
    }
    fn visit_read(&mut self, stmt: &Read) -> TreeResult<()> {
        self.descend(NodeKind::Read, stmt.depth, NESTING_STEP, |c| c.visit_ident(&stmt.target))
    }
    fn visit_write(&mut self, stmt: &Write) -> TreeResult<()> {
        self.descend(NodeKind::Write, stmt.depth, NESTING_STEP, |c| c.visit_expression(&stmt.value))
    }
    fn visit_ident(&mut self, ident: &Ident) -> TreeResult<()> {
        self.check(NodeKind::Identifier, ident.depth)
    }
    fn visit_int_literal(&mut self, literal: &IntLit) -> TreeResult<()> {
        self.check(NodeKind::IntLiteral, literal.depth)
    }
    fn visit_float_literal(&mut self, literal: &FloatLit) -> TreeResult<()> {
        self.check(NodeKind::FloatLiteral, literal.depth)
    }
    fn visit_nested(&mut self, nested: &Nested) -> TreeResult<()> {
        self.descend(NodeKind::Nested, nested.depth, TRANSPARENT_STEP, |c| {
            c.visit_expression(&nested.inner)
        })
    }
    fn visit_not(&mut self, not: &Not) -> TreeResult<()> {
        self.descend(NodeKind::Not, not.depth, NESTING_STEP, |c| c.visit_expression(&not.operand))
    }
    fn visit_negate(&mut self, negate: &Negate) -> TreeResult<()> {
        self.descend(NodeKind::Negate, negate.depth, NESTING_STEP, |c| {
            c.visit_expression(&negate.operand)
        })
    }
    fn visit_term(&mut self, term: &Term) -> TreeResult<()> {
        self.descend(NodeKind::Term, term.depth, NESTING_STEP, |c| walk_term(c, term))
    }
    fn visit_expr(&mut self, expr: &Expr) -> TreeResult<()> {
        self.descend(NodeKind::Expr, expr.depth, NESTING_STEP, |c| walk_expr(c, expr))
    }
}
