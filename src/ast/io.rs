use crate::ast::{Expression, Ident, Node, NodeKind, Teardown};
use crate::errors::TreeResult;
use crate::teardown::TeardownTrace;
use crate::visiters::ASTVisitor;

#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub value: Expression,
    pub depth: usize,
}

impl Write {
    pub fn new(depth: usize, value: impl Into<Expression>) -> Self {
        Self {
            value: value.into(),
            depth,
        }
    }
}

impl Node for Write {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_write(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Write
    }
}

impl Teardown for Write {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Write, self.depth);
        self.value.teardown(trace);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub target: Ident,
    pub depth: usize,
}

impl Read {
    pub fn new(depth: usize, target: Ident) -> Self {
        Self { target, depth }
    }
}

impl Node for Read {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_read(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Read
    }
}

impl Teardown for Read {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Read, self.depth);
        self.target.teardown(trace);
    }
}
