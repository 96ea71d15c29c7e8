/*
*                    parsetree -- parse tree for a small imperative language.
*
* program    = block ;
* block      = compound ;
* statement  = ident "=" expr
*            | "{" { statement } "}"
*            | "if" "(" expr ")" statement [ "else" statement ]
*            | "while" "(" expr ")" statement
*            | "read" ident
*            | "write" expr ;
* expr       = term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = ident | intlit | floatlit | "(" expr ")" | "not" factor | "-" factor ;
*/

use crate::config::TreeConfig;
use crate::depth::DepthChecker;
use crate::errors::TreeResult;
use crate::printer::TreePrinter;
use crate::stats::{NodeCounter, NodeStats};
use crate::teardown::TeardownTrace;
use crate::visiters::ASTVisitor;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Program,
    Block,
    Compound,
    Assignment,
    If,
    While,
    Read,
    Write,
    Identifier,
    IntLiteral,
    FloatLiteral,
    Nested,
    Not,
    Negate,
    Term,
    Expr,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "ProgramNode",
            NodeKind::Block => "BlockNode",
            NodeKind::Compound => "CompoundNode",
            NodeKind::Assignment => "AssignmentNode",
            NodeKind::If => "IfNode",
            NodeKind::While => "WhileNode",
            NodeKind::Read => "ReadNode",
            NodeKind::Write => "WriteNode",
            NodeKind::Identifier => "IdNode",
            NodeKind::IntLiteral => "IntLitNode",
            NodeKind::FloatLiteral => "FloatLitNode",
            NodeKind::Nested => "NestedExprNode",
            NodeKind::Not => "NotNode",
            NodeKind::Negate => "MinusNode",
            NodeKind::Term => "TermNode",
            NodeKind::Expr => "ExprNode",
        }
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::Compound
                | NodeKind::Assignment
                | NodeKind::If
                | NodeKind::While
                | NodeKind::Read
                | NodeKind::Write
        )
    }

    pub fn is_expression(self) -> bool {
        !self.is_statement() && !matches!(self, NodeKind::Program | NodeKind::Block)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub trait Node {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()>;
    fn depth(&self) -> usize;
    fn kind(&self) -> NodeKind;

    /// Writes the indentation-nested trace of this subtree to `out`.
    fn print_to(&self, out: &mut dyn io::Write, config: &TreeConfig) -> TreeResult<()> {
        let mut printer = TreePrinter::new(out, config);
        log::trace!(
            target: crate::config::trace::RENDER_TARGET,
            "rendering {} at depth {}",
            self.kind(),
            self.depth()
        );
        self.accept(&mut printer)?;
        printer.flush()
    }

    fn print(&self) -> TreeResult<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock, &TreeConfig::default())
    }

    fn render_with(&self, config: &TreeConfig) -> TreeResult<String> {
        let mut buffer = Vec::new();
        self.print_to(&mut buffer, config)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn render(&self) -> TreeResult<String> {
        self.render_with(&TreeConfig::default())
    }

    fn stats(&self) -> TreeResult<NodeStats> {
        let mut counter = NodeCounter::new();
        self.accept(&mut counter)?;
        Ok(counter.into_stats())
    }

    fn check_depths(&self) -> TreeResult<()> {
        let mut checker = DepthChecker::new();
        self.accept(&mut checker)
    }
}

/// Consuming release of a node and everything it owns.
///
/// Implementors report themselves to `trace` before tearing down their
/// children in field order, so each owned node is reported exactly once.
///
/// Plain `drop` releases the same set of nodes: each impl moves out exactly
/// the `Box`/`Vec`/`Option` fields that the compiler's drop glue would drop,
/// and no node type implements `Drop` itself.
pub trait Teardown {
    fn teardown(self, trace: &mut dyn TeardownTrace);
}

impl<T: Teardown> Teardown for Box<T> {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        (*self).teardown(trace)
    }
}
