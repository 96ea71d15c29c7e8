use log::Level;

// Rendering constants
pub mod render {
    // One unit per nesting level
    pub const INDENT_UNIT: &str = "| ";
    // Significant digits for float literals, as printed by `%g`
    pub const FLOAT_PRECISION: usize = 6;
}

// Markers written by the tree printer
pub mod markers {
    pub const IDENT_PREFIX: &str = "IDENT: ";
    pub const INTLIT_PREFIX: &str = "INTLIT: ";
    pub const FLOATLIT_PREFIX: &str = "FLOATLIT: ";

    pub const NOT: &str = "NOT";
    pub const MINUS: &str = "MINUS";
    pub const TERM: &str = "term";
    pub const EXPR: &str = "expr";

    pub const ASSIGNMENT: &str = "ASSIGNMENT";
    pub const ASSIGN_SEPARATOR: &str = "=";
    pub const COMPOUND: &str = "COMPOUND";
    pub const IF: &str = "IF";
    pub const THEN: &str = "THEN";
    pub const ELSE: &str = "ELSE";
    pub const WHILE: &str = "WHILE";
    pub const DO: &str = "DO";
    pub const READ: &str = "READ";
    pub const WRITE: &str = "WRITE";

    pub fn open(name: &str) -> String {
        format!("({}", name)
    }

    pub fn close(name: &str) -> String {
        format!("{})", name)
    }

    pub fn leaf(prefix: &str, value: impl std::fmt::Display) -> String {
        format!("({}{})", prefix, value)
    }
}

// Log targets
pub mod trace {
    pub const TEARDOWN_TARGET: &str = "teardown";
    pub const RENDER_TARGET: &str = "render";
}

/// Caller-supplied options for rendering and teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    pub indent_unit: String,
    pub float_precision: usize,
    pub trace_teardown: bool,
    pub trace_level: Level,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            indent_unit: render::INDENT_UNIT.to_string(),
            float_precision: render::FLOAT_PRECISION,
            trace_teardown: false,
            trace_level: Level::Debug,
        }
    }
}

impl TreeConfig {
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }

    pub fn with_trace(mut self, level: Level) -> Self {
        self.trace_teardown = true;
        self.trace_level = level;
        self
    }

    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }
}
