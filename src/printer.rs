use crate::ast::{
    AssignStmt, CompoundStmt, Expr, FloatLit, Ident, IfStmt, IntLit, Negate, Not, Read, Term,
    WhileStmt, Write,
};
use crate::config::markers;
use crate::config::TreeConfig;
use crate::errors::TreeResult;
use crate::utils::format_general;
use crate::visiters::{walk_compound, ASTVisitor};
use std::io;

/// Renders a tree as a newline-separated trace, one marker per line, each
/// line indented by the depth of the node that emitted it.
///
/// `Program`, `Block` and `Nested` keep the default walking behaviour and
/// therefore add no lines of their own.
pub struct TreePrinter<'a, W: io::Write + ?Sized> {
    out: &'a mut W,
    config: &'a TreeConfig,
}

impl<'a, W: io::Write + ?Sized> TreePrinter<'a, W> {
    pub fn new(out: &'a mut W, config: &'a TreeConfig) -> Self {
        Self { out, config }
    }

    pub fn flush(&mut self) -> TreeResult<()> {
        self.out.flush()?;
        Ok(())
    }

    fn line(&mut self, depth: usize, text: &str) -> TreeResult<()> {
        writeln!(self.out, "{}{}", self.config.indent(depth), text)?;
        Ok(())
    }

    fn wrapped<F>(&mut self, depth: usize, name: &str, body: F) -> TreeResult<()>
    where
        F: FnOnce(&mut Self) -> TreeResult<()>,
    {
        self.line(depth, &markers::open(name))?;
        body(self)?;
        self.line(depth, &markers::close(name))
    }
}

impl<W: io::Write + ?Sized> ASTVisitor for TreePrinter<'_, W> {
    fn visit_assign(&mut self, stmt: &AssignStmt) -> TreeResult<()> {
        self.wrapped(stmt.depth, markers::ASSIGNMENT, |p| {
            p.visit_ident(&stmt.target)?;
            p.line(stmt.depth, markers::ASSIGN_SEPARATOR)?;
            p.visit_expression(&stmt.value)
        })
    }

    fn visit_compound(&mut self, stmt: &CompoundStmt) -> TreeResult<()> {
        self.wrapped(stmt.depth, markers::COMPOUND, |p| walk_compound(p, stmt))
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> TreeResult<()> {
        self.wrapped(stmt.depth, markers::IF, |p| {
            p.visit_expression(&stmt.condition)?;
            p.line(stmt.depth, markers::THEN)?;
            p.visit_statement(&stmt.then_branch)?;
            if let Some(else_branch) = &stmt.else_branch {
                p.line(stmt.depth, markers::ELSE)?;
                p.visit_statement(else_branch)?;
            }
            Ok(())
        })
    }

    fn visit_while_statement(&mut self, stmt: &WhileStmt) -> TreeResult<()> {
        self.wrapped(stmt.depth, markers::WHILE, |p| {
            p.visit_expression(&stmt.condition)?;
            p.line(stmt.depth, markers::DO)?;
            p.visit_statement(&stmt.body)
        })
    }

    fn visit_read(&mut self, stmt: &Read) -> TreeResult<()> {
        self.wrapped(stmt.depth, markers::READ, |p| p.visit_ident(&stmt.target))
    }

    fn visit_write(&mut self, stmt: &Write) -> TreeResult<()> {
        self.wrapped(stmt.depth, markers::WRITE, |p| p.visit_expression(&stmt.value))
    }

    fn visit_ident(&mut self, ident: &Ident) -> TreeResult<()> {
        self.line(ident.depth, &markers::leaf(markers::IDENT_PREFIX, &ident.name))
    }

    fn visit_int_literal(&mut self, literal: &IntLit) -> TreeResult<()> {
        self.line(literal.depth, &markers::leaf(markers::INTLIT_PREFIX, literal.value))
    }

    fn visit_float_literal(&mut self, literal: &FloatLit) -> TreeResult<()> {
        let value = format_general(literal.value, self.config.float_precision);
        self.line(literal.depth, &markers::leaf(markers::FLOATLIT_PREFIX, value))
    }

    fn visit_not(&mut self, not: &Not) -> TreeResult<()> {
        self.wrapped(not.depth, markers::NOT, |p| p.visit_expression(&not.operand))
    }

    fn visit_negate(&mut self, negate: &Negate) -> TreeResult<()> {
        self.wrapped(negate.depth, markers::MINUS, |p| p.visit_expression(&negate.operand))
    }

    fn visit_term(&mut self, term: &Term) -> TreeResult<()> {
        self.wrapped(term.depth, markers::TERM, |p| {
            p.visit_expression(term.first())?;
            for (op, operand) in term.rest() {
                p.line(term.depth, op.symbol())?;
                p.visit_expression(operand)?;
            }
            Ok(())
        })
    }

    fn visit_expr(&mut self, expr: &Expr) -> TreeResult<()> {
        self.wrapped(expr.depth, markers::EXPR, |p| {
            p.visit_term(expr.first())?;
            for (op, term) in expr.rest() {
                p.line(expr.depth, op.symbol())?;
                p.visit_term(term)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    struct FailingSink;

    impl io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failures_surface_as_io_errors() {
        let ident = Ident::new(0, "x");
        let result = ident.print_to(&mut FailingSink, &TreeConfig::default());
        assert!(matches!(result, Err(crate::errors::TreeError::IoError(_))));
    }

    #[test]
    fn custom_indent_unit_is_used_per_level() -> TreeResult<()> {
        let config = TreeConfig::default().with_indent_unit("..");
        let out = IntLit::new(2, 9).render_with(&config)?;
        assert_eq!(out, "....(INTLIT: 9)\n");
        Ok(())
    }

    #[test]
    fn float_precision_comes_from_config() -> TreeResult<()> {
        let config = TreeConfig::default().with_float_precision(3);
        let out = FloatLit::new(1, 1.23456).render_with(&config)?;
        assert_eq!(out, "| (FLOATLIT: 1.23)\n");
        Ok(())
    }
}
