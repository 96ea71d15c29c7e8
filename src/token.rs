use std::fmt;

// Operator codes handed over by the lexer.
pub const TOK_ADD_OP: i32 = 3001;
pub const TOK_SUB_OP: i32 = 3002;
pub const TOK_MULT_OP: i32 = 3003;
pub const TOK_DIV_OP: i32 = 3004;

/// Operator joining the terms of an `Expr` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Sub,
}

/// Operator joining the operands of a `Term` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
}

impl AddOp {
    /// Anything other than `TOK_ADD_OP` is a subtraction.
    pub fn from_code(code: i32) -> Self {
        if code == TOK_ADD_OP {
            AddOp::Add
        } else {
            AddOp::Sub
        }
    }

    pub fn code(self) -> i32 {
        match self {
            AddOp::Add => TOK_ADD_OP,
            AddOp::Sub => TOK_SUB_OP,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AddOp::Add => "+",
            AddOp::Sub => "-",
        }
    }
}

impl MulOp {
    /// Anything other than `TOK_MULT_OP` is a division.
    pub fn from_code(code: i32) -> Self {
        if code == TOK_MULT_OP {
            MulOp::Mul
        } else {
            MulOp::Div
        }
    }

    pub fn code(self) -> i32 {
        match self {
            MulOp::Mul => TOK_MULT_OP,
            MulOp::Div => TOK_DIV_OP,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MulOp::Mul => "*",
            MulOp::Div => "/",
        }
    }
}

impl From<i32> for AddOp {
    fn from(code: i32) -> Self {
        AddOp::from_code(code)
    }
}

impl From<i32> for MulOp {
    fn from(code: i32) -> Self {
        MulOp::from_code(code)
    }
}

impl fmt::Display for AddOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
