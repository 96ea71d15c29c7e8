use crate::ast::{Block, Node, NodeKind, Teardown};
use crate::config::TreeConfig;
use crate::errors::TreeResult;
use crate::teardown::{LogTrace, SilentTrace, TeardownTrace};
use crate::visiters::ASTVisitor;

/// Root of the tree and the only externally owned node.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub depth: usize,
    block: Block,
}

impl Program {
    pub fn new(depth: usize, block: Block) -> Self {
        Self { depth, block }
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Tears the whole tree down, tracing each released node through the
    /// `log` facade when `config.trace_teardown` is set.
    pub fn dispose(self, config: &TreeConfig) {
        if config.trace_teardown {
            let mut trace = LogTrace::new(config.trace_level);
            self.teardown(&mut trace);
        } else {
            self.teardown(&mut SilentTrace);
        }
    }
}

impl Node for Program {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_program(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

impl Teardown for Program {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Program, self.depth);
        self.block.teardown(trace);
    }
}
