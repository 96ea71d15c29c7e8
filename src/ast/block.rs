use crate::ast::{CompoundStmt, Node, NodeKind, Teardown};
use crate::errors::TreeResult;
use crate::teardown::TeardownTrace;
use crate::visiters::ASTVisitor;

/// Owns the compound statement of a program. Once a compound is handed to a
/// block it is only reachable through a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub depth: usize,
    compound: CompoundStmt,
}

impl Block {
    pub fn new(depth: usize, compound: CompoundStmt) -> Self {
        Self { depth, compound }
    }

    pub fn compound(&self) -> &CompoundStmt {
        &self.compound
    }
}

impl Node for Block {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_block(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Block
    }
}

impl Teardown for Block {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Block, self.depth);
        self.compound.teardown(trace);
    }
}
