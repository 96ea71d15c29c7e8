use crate::ast::{
    AssignStmt, Block, CompoundStmt, Expr, FloatLit, Ident, IfStmt, IntLit, Negate, Nested,
    NodeKind, Not, Program, Read, Term, WhileStmt, Write,
};
use crate::errors::TreeResult;
use crate::visiters::{
    walk_assign, walk_block, walk_compound, walk_expr, walk_if, walk_program, walk_term,
    walk_while, ASTVisitor,
};
use std::collections::BTreeMap;
use std::fmt;

/// Per-kind node tally for one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStats {
    counts: BTreeMap<NodeKind, usize>,
}

impl NodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: NodeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn statements(&self) -> usize {
        self.sum_where(NodeKind::is_statement)
    }

    pub fn expressions(&self) -> usize {
        self.sum_where(NodeKind::is_expression)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    fn sum_where(&self, pred: fn(NodeKind) -> bool) -> usize {
        self.counts
            .iter()
            .filter(|(kind, _)| pred(**kind))
            .map(|(_, count)| *count)
            .sum()
    }
}

impl fmt::Display for NodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, count) in self.iter() {
            writeln!(f, "{:<16} {}", kind.name(), count)?;
        }
        write!(f, "{:<16} {}", "total", self.total())
    }
}

/// Counts every node reachable from the visited root.
#[derive(Debug, Default)]
pub struct NodeCounter {
    stats: NodeStats,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_stats(self) -> NodeStats {
        self.stats
    }
}

impl ASTVisitor for NodeCounter {
    fn visit_program(&mut self, program: &Program) -> TreeResult<()> {
        self.stats.record(NodeKind::Program);
        walk_program(self, program)
    }
    fn visit_block(&mut self, block: &Block) -> TreeResult<()> {
        self.stats.record(NodeKind::Block);
        walk_block(self, block)
    }
    fn visit_assign(&mut self, stmt: &AssignStmt) -> TreeResult<()> {
        self.stats.record(NodeKind::Assignment);
        walk_assign(self, stmt)
    }
    fn visit_compound(&mut self, stmt: &CompoundStmt) -> TreeResult<()> {
        self.stats.record(NodeKind::Compound);
        walk_compound(self, stmt)
    }
    fn visit_if(&mut self, stmt: &IfStmt) -> TreeResult<()> {
        self.stats.record(NodeKind::If);
        walk_if(self, stmt)
    }
    fn visit_while_statement(&mut self, stmt: &WhileStmt) -> TreeResult<()> {
        self.stats.record(NodeKind::While);
        walk_while(self, stmt)
    }
    fn visit_read(&mut self, stmt: &Read) -> TreeResult<()> {
        self.stats.record(NodeKind::Read);
        self.visit_ident(&stmt.target)
    }
    fn visit_write(&mut self, stmt: &Write) -> TreeResult<()> {
        self.stats.record(NodeKind::Write);
        self.visit_expression(&stmt.value)
    }
    fn visit_ident(&mut self, _ident: &Ident) -> TreeResult<()> {
        self.stats.record(NodeKind::Identifier);
        Ok(())
    }
    fn visit_int_literal(&mut self, _literal: &IntLit) -> TreeResult<()> {
        self.stats.record(NodeKind::IntLiteral);
        Ok(())
    }
    fn visit_float_literal(&mut self, _literal: &FloatLit) -> TreeResult<()> {
        self.stats.record(NodeKind::FloatLiteral);
        Ok(())
    }
    fn visit_nested(&mut self, nested: &Nested) -> TreeResult<()> {
        self.stats.record(NodeKind::Nested);
        self.visit_expression(&nested.inner)
    }
    fn visit_not(&mut self, not: &Not) -> TreeResult<()> {
        self.stats.record(NodeKind::Not);
        self.visit_expression(&not.operand)
    }
    fn visit_negate(&mut self, negate: &Negate) -> TreeResult<()> {
        self.stats.record(NodeKind::Negate);
        self.visit_expression(&negate.operand)
    }
    fn visit_term(&mut self, term: &Term) -> TreeResult<()> {
        self.stats.record(NodeKind::Term);
        walk_term(self, term)
    }
    fn visit_expr(&mut self, expr: &Expr) -> TreeResult<()> {
        self.stats.record(NodeKind::Expr);
        walk_expr(self, expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_kinds_then_total() {
        let mut stats = NodeStats::new();
        stats.record(NodeKind::Write);
        stats.record(NodeKind::IntLiteral);
        stats.record(NodeKind::IntLiteral);
        assert_eq!(stats.to_string(), "WriteNode        1\nIntLitNode       2\ntotal            3");
        assert_eq!(stats.statements(), 1);
        assert_eq!(stats.expressions(), 2);
    }
}
