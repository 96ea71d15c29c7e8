use crate::ast::{Expression, Ident, Node, NodeKind, Read, Teardown, Write};
use crate::errors::TreeResult;
use crate::teardown::TeardownTrace;
use crate::visiters::ASTVisitor;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignStmt),
    Compound(CompoundStmt),
    If(IfStmt),
    While(WhileStmt),
    Read(Read),
    Write(Write),
}

impl Node for Statement {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_statement(self)
    }

    fn depth(&self) -> usize {
        match self {
            Statement::Assignment(stmt) => stmt.depth,
            Statement::Compound(stmt) => stmt.depth,
            Statement::If(stmt) => stmt.depth,
            Statement::While(stmt) => stmt.depth,
            Statement::Read(stmt) => stmt.depth,
            Statement::Write(stmt) => stmt.depth,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Statement::Assignment(_) => NodeKind::Assignment,
            Statement::Compound(_) => NodeKind::Compound,
            Statement::If(_) => NodeKind::If,
            Statement::While(_) => NodeKind::While,
            Statement::Read(_) => NodeKind::Read,
            Statement::Write(_) => NodeKind::Write,
        }
    }
}

impl Teardown for Statement {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        match self {
            Statement::Assignment(stmt) => stmt.teardown(trace),
            Statement::Compound(stmt) => stmt.teardown(trace),
            Statement::If(stmt) => stmt.teardown(trace),
            Statement::While(stmt) => stmt.teardown(trace),
            Statement::Read(stmt) => stmt.teardown(trace),
            Statement::Write(stmt) => stmt.teardown(trace),
        }
    }
}

impl From<AssignStmt> for Statement {
    fn from(stmt: AssignStmt) -> Self {
        Statement::Assignment(stmt)
    }
}

impl From<CompoundStmt> for Statement {
    fn from(stmt: CompoundStmt) -> Self {
        Statement::Compound(stmt)
    }
}

impl From<IfStmt> for Statement {
    fn from(stmt: IfStmt) -> Self {
        Statement::If(stmt)
    }
}

impl From<WhileStmt> for Statement {
    fn from(stmt: WhileStmt) -> Self {
        Statement::While(stmt)
    }
}

impl From<Read> for Statement {
    fn from(stmt: Read) -> Self {
        Statement::Read(stmt)
    }
}

impl From<Write> for Statement {
    fn from(stmt: Write) -> Self {
        Statement::Write(stmt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Ident,
    pub value: Expression,
    pub depth: usize,
}

impl AssignStmt {
    pub fn new(depth: usize, target: Ident, value: impl Into<Expression>) -> Self {
        Self {
            target,
            value: value.into(),
            depth,
        }
    }
}

impl Node for AssignStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_assign(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Assignment
    }
}

impl Teardown for AssignStmt {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Assignment, self.depth);
        self.target.teardown(trace);
        self.value.teardown(trace);
    }
}

/// Ordered statement list. Statements are appended while the parser is
/// still assembling it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    pub depth: usize,
    statements: Vec<Statement>,
}

impl CompoundStmt {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            statements: Vec::new(),
        }
    }

    pub fn from_statements(depth: usize, statements: Vec<Statement>) -> Self {
        Self { depth, statements }
    }

    pub fn push(&mut self, stmt: impl Into<Statement>) {
        self.statements.push(stmt.into());
    }

    pub fn with(mut self, stmt: impl Into<Statement>) -> Self {
        self.push(stmt);
        self
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for CompoundStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_compound(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Compound
    }
}

impl Teardown for CompoundStmt {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::Compound, self.depth);
        for stmt in self.statements {
            stmt.teardown(trace);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub depth: usize,
}

impl IfStmt {
    pub fn new(
        depth: usize,
        condition: impl Into<Expression>,
        then_branch: impl Into<Statement>,
        else_branch: Option<Statement>,
    ) -> Self {
        Self {
            condition: condition.into(),
            then_branch: Box::new(then_branch.into()),
            else_branch: else_branch.map(Box::new),
            depth,
        }
    }
}

impl Node for IfStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_if(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::If
    }
}

impl Teardown for IfStmt {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::If, self.depth);
        self.condition.teardown(trace);
        self.then_branch.teardown(trace);
        if let Some(else_branch) = self.else_branch {
            else_branch.teardown(trace);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub depth: usize,
}

impl WhileStmt {
    pub fn new(depth: usize, condition: impl Into<Expression>, body: impl Into<Statement>) -> Self {
        Self {
            condition: condition.into(),
            body: Box::new(body.into()),
            depth,
        }
    }
}

impl Node for WhileStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> TreeResult<()> {
        visitor.visit_while_statement(self)
    }
    fn depth(&self) -> usize {
        self.depth
    }
    fn kind(&self) -> NodeKind {
        NodeKind::While
    }
}

impl Teardown for WhileStmt {
    fn teardown(self, trace: &mut dyn TeardownTrace) {
        trace.released(NodeKind::While, self.depth);
        self.condition.teardown(trace);
        self.body.teardown(trace);
    }
}
