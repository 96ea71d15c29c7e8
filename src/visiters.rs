use crate::ast::{
    AssignStmt, Block, CompoundStmt, Expr, Expression, FloatLit, Ident, IfStmt, IntLit, Negate,
    Nested, Not, Program, Read, Statement, Term, WhileStmt, Write,
};
use crate::errors::TreeResult;

/// Tree visitor. Every method defaults to walking the node's children in
/// field order, so implementors only override the nodes they care about.
pub trait ASTVisitor {
    fn visit_program(&mut self, program: &Program) -> TreeResult<()> {
        walk_program(self, program)
    }
    fn visit_block(&mut self, block: &Block) -> TreeResult<()> {
        walk_block(self, block)
    }

    fn visit_statement(&mut self, stmt: &Statement) -> TreeResult<()> {
        walk_statement(self, stmt)
    }
    fn visit_assign(&mut self, stmt: &AssignStmt) -> TreeResult<()> {
        walk_assign(self, stmt)
    }
    fn visit_compound(&mut self, stmt: &CompoundStmt) -> TreeResult<()> {
        walk_compound(self, stmt)
    }
    fn visit_if(&mut self, stmt: &IfStmt) -> TreeResult<()> {
        walk_if(self, stmt)
    }
    fn visit_while_statement(&mut self, stmt: &WhileStmt) -> TreeResult<()> {
        walk_while(self, stmt)
    }
    fn visit_read(&mut self, stmt: &Read) -> TreeResult<()> {
        self.visit_ident(&stmt.target)
    }
    fn visit_write(&mut self, stmt: &Write) -> TreeResult<()> {
        self.visit_expression(&stmt.value)
    }

    fn visit_expression(&mut self, expr: &Expression) -> TreeResult<()> {
        walk_expression(self, expr)
    }
    fn visit_ident(&mut self, _ident: &Ident) -> TreeResult<()> {
        Ok(())
    }
    fn visit_int_literal(&mut self, _literal: &IntLit) -> TreeResult<()> {
        Ok(())
    }
    fn visit_float_literal(&mut self, _literal: &FloatLit) -> TreeResult<()> {
        Ok(())
    }
    fn visit_nested(&mut self, nested: &Nested) -> TreeResult<()> {
        self.visit_expression(&nested.inner)
    }
    fn visit_not(&mut self, not: &Not) -> TreeResult<()> {
        self.visit_expression(&not.operand)
    }
    fn visit_negate(&mut self, negate: &Negate) -> TreeResult<()> {
        self.visit_expression(&negate.operand)
    }
    fn visit_term(&mut self, term: &Term) -> TreeResult<()> {
        walk_term(self, term)
    }
    fn visit_expr(&mut self, expr: &Expr) -> TreeResult<()> {
        walk_expr(self, expr)
    }
}

pub fn walk_program<V: ASTVisitor + ?Sized>(visitor: &mut V, program: &Program) -> TreeResult<()> {
    visitor.visit_block(program.block())
}

pub fn walk_block<V: ASTVisitor + ?Sized>(visitor: &mut V, block: &Block) -> TreeResult<()> {
    visitor.visit_compound(block.compound())
}

// Single dispatch point for the statement family.
pub fn walk_statement<V: ASTVisitor + ?Sized>(visitor: &mut V, stmt: &Statement) -> TreeResult<()> {
    match stmt {
        Statement::Assignment(stmt) => visitor.visit_assign(stmt),
        Statement::Compound(stmt) => visitor.visit_compound(stmt),
        Statement::If(stmt) => visitor.visit_if(stmt),
        Statement::While(stmt) => visitor.visit_while_statement(stmt),
        Statement::Read(stmt) => visitor.visit_read(stmt),
        Statement::Write(stmt) => visitor.visit_write(stmt),
    }
}

pub fn walk_assign<V: ASTVisitor + ?Sized>(visitor: &mut V, stmt: &AssignStmt) -> TreeResult<()> {
    visitor.visit_ident(&stmt.target)?;
    visitor.visit_expression(&stmt.value)
}

pub fn walk_compound<V: ASTVisitor + ?Sized>(
    visitor: &mut V,
    stmt: &CompoundStmt,
) -> TreeResult<()> {
    for child in stmt.statements() {
        visitor.visit_statement(child)?;
    }
    Ok(())
}

pub fn walk_if<V: ASTVisitor + ?Sized>(visitor: &mut V, stmt: &IfStmt) -> TreeResult<()> {
    visitor.visit_expression(&stmt.condition)?;
    visitor.visit_statement(&stmt.then_branch)?;
    if let Some(else_branch) = &stmt.else_branch {
        visitor.visit_statement(else_branch)?;
    }
    Ok(())
}

pub fn walk_while<V: ASTVisitor + ?Sized>(visitor: &mut V, stmt: &WhileStmt) -> TreeResult<()> {
    visitor.visit_expression(&stmt.condition)?;
    visitor.visit_statement(&stmt.body)
}

// Single dispatch point for the expression family.
pub fn walk_expression<V: ASTVisitor + ?Sized>(
    visitor: &mut V,
    expr: &Expression,
) -> TreeResult<()> {
    match expr {
        Expression::Identifier(node) => visitor.visit_ident(node),
        Expression::IntLiteral(node) => visitor.visit_int_literal(node),
        Expression::FloatLiteral(node) => visitor.visit_float_literal(node),
        Expression::Nested(node) => visitor.visit_nested(node),
        Expression::Not(node) => visitor.visit_not(node),
        Expression::Negate(node) => visitor.visit_negate(node),
        Expression::Term(node) => visitor.visit_term(node),
        Expression::Expr(node) => visitor.visit_expr(node),
    }
}

pub fn walk_term<V: ASTVisitor + ?Sized>(visitor: &mut V, term: &Term) -> TreeResult<()> {
    visitor.visit_expression(term.first())?;
    for (_, operand) in term.rest() {
        visitor.visit_expression(operand)?;
    }
    Ok(())
}

pub fn walk_expr<V: ASTVisitor + ?Sized>(visitor: &mut V, expr: &Expr) -> TreeResult<()> {
    visitor.visit_term(expr.first())?;
    for (_, term) in expr.rest() {
        visitor.visit_term(term)?;
    }
    Ok(())
}
