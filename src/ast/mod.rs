// Parse tree definitions.
// This module contains all node types and the capabilities they share.

mod traits;
pub use traits::{Node, NodeKind, Teardown};

// Node modules
mod block;
mod expressions;
mod io;
mod literals;
mod program;
mod statements;

pub use block::Block;
pub use expressions::{Expr, Expression, Negate, Nested, Not, Term};
pub use io::{Read, Write};
pub use literals::{FloatLit, Ident, IntLit};
pub use program::Program;
pub use statements::{AssignStmt, CompoundStmt, IfStmt, Statement, WhileStmt};
