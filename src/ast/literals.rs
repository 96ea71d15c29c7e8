use crate::ast::{Node, NodeKind, Teardown};
use crate::errors::TreeResult;
use crate::teardown::TeardownTrace;
use crate::visiters::ASTVisitor;

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub depth: usize,
}

impl Ident {
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depth,
        }
    }
}

impl Node for Ident {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_ident(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
}

impl Teardown for Ident {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Identifier, self.depth);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntLit {
    pub value: i64,
    pub depth: usize,
}

impl IntLit {
    pub fn new(depth: usize, value: i64) -> Self {
        Self { value, depth }
    }
}

impl Node for IntLit {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_int_literal(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::IntLiteral
    }
}

impl Teardown for IntLit {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        // Nothing owned beyond the value itself
        trace.released(NodeKind::IntLiteral, self.depth);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLit {
    pub value: f64,
    pub depth: usize,
}

impl FloatLit {
    pub fn new(depth: usize, value: f64) -> Self {
        Self { value, depth }
    }
}

impl Node for FloatLit {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_float_literal(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::FloatLiteral
    }
}

impl Teardown for FloatLit {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::FloatLiteral, self.depth);
    }
}
