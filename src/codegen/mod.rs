//! Retargetable code generator.
//!
//! A single traversal renders any AST as source text; every target-specific
//! choice (operator and literal spelling, block layout, compound assignment
//! support) comes from the [`Dialect`] handed to the [`Generator`].

pub mod dialect;

pub use dialect::{BlockKind, BlockStyle, Dialect, BUILTIN_DIALECTS};

use crate::ast::{
    BinaryOp, Node, UnaryOp, ATOM_PRECEDENCE, POSTFIX_PRECEDENCE, UNARY_PRECEDENCE,
};
use crate::diagnostics::VersaError;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Renders top-level statements in the given dialect.
pub fn render(ast: &[Node], dialect: &Dialect) -> Result<String, VersaError> {
    Generator::new(dialect).render_block(ast)
}

/// Stateless printer bound to one dialect. Never mutates the AST, so one
/// tree may be rendered by several generators at once.
pub struct Generator<'d> {
    dialect: &'d Dialect,
}

impl<'d> Generator<'d> {
    pub fn new(dialect: &'d Dialect) -> Self {
        Self { dialect }
    }

    // ========================================================================
    // STATEMENTS
    // ========================================================================

    /// Renders a statement sequence, one statement per line, with blank
    /// lines grouping declarations and separating compound statements.
    pub fn render_block(&self, nodes: &[Node]) -> Result<String, VersaError> {
        let mut out = String::new();
        let mut prev: Option<&Node> = None;

        for node in nodes {
            let text = self.render_statement(node)?;
            if let Some(prev) = prev {
                out.push('\n');
                if needs_blank_line(prev, node) {
                    out.push('\n');
                }
            }
            out.push_str(&text);
            prev = Some(node);
        }

        Ok(out)
    }

    pub fn render_statement(&self, node: &Node) -> Result<String, VersaError> {
        let terminator = &self.dialect.statement_terminator;
        match node {
            Node::VarDecl { name, init } => {
                let init = self.render_expr(init, 0)?;
                Ok(match &self.dialect.var_keyword {
                    Some(keyword) => format!("{} {} = {}{}", keyword, name, init, terminator),
                    None => format!("{} = {}{}", name, init, terminator),
                })
            }
            Node::FunctionDecl { name, params, body } => {
                let header = self.dialect.block_style.header(
                    &self.dialect.function_keyword,
                    BlockKind::Function,
                    &format!("{}({})", name, params.join(", ")),
                );
                self.render_compound(header, body, None)
            }
            Node::If {
                test,
                then,
                otherwise,
            } => {
                let header =
                    self.dialect
                        .block_style
                        .header("if", BlockKind::If, &self.render_expr(test, 0)?);
                self.render_compound(header, then, otherwise.as_deref())
            }
            Node::While { test, body } => {
                let header = self.dialect.block_style.header(
                    "while",
                    BlockKind::While,
                    &self.render_expr(test, 0)?,
                );
                self.render_compound(header, body, None)
            }
            Node::Return { argument: None } => Ok(format!("return{}", terminator)),
            Node::Return {
                argument: Some(argument),
            } => Ok(format!(
                "return {}{}",
                self.render_expr(argument, 0)?,
                terminator
            )),
            Node::Comment { text } => Ok(self.render_comment(text)),
            expr => Ok(format!("{}{}", self.render_expr(expr, 0)?, terminator)),
        }
    }

    /// Header, indented body, optional else branch and closing line.
    fn render_compound(
        &self,
        header: String,
        body: &[Node],
        otherwise: Option<&[Node]>,
    ) -> Result<String, VersaError> {
        let style = self.dialect.block_style;
        let mut lines = vec![header];
        self.push_body(&mut lines, body)?;
        if let Some(otherwise) = otherwise {
            lines.push(style.else_line().to_string());
            self.push_body(&mut lines, otherwise)?;
        }
        if let Some(close) = style.close_line() {
            lines.push(close.to_string());
        }
        Ok(lines.join("\n"))
    }

    fn push_body(&self, lines: &mut Vec<String>, body: &[Node]) -> Result<(), VersaError> {
        let indent = &self.dialect.indent_unit;
        let rendered = self.render_block(body)?;

        if rendered.is_empty() {
            if let Some(filler) = &self.dialect.empty_block {
                lines.push(format!("{}{}", indent, filler));
            }
            return Ok(());
        }

        for line in rendered.lines() {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{}", indent, line));
            }
        }
        Ok(())
    }

    fn render_comment(&self, text: &str) -> String {
        format!("{} {}", self.dialect.comment_marker, text)
            .trim_end()
            .to_string()
    }

    // ========================================================================
    // EXPRESSIONS
    // ========================================================================

    /// Renders `node`, parenthesized when it binds looser than `min_precedence`.
    pub fn render_expr(&self, node: &Node, min_precedence: u8) -> Result<String, VersaError> {
        let text = match node {
            Node::Boolean { value: true } => self.dialect.bool_true.clone(),
            Node::Boolean { value: false } => self.dialect.bool_false.clone(),
            Node::Number { value } => value.clone(),
            Node::String { value } => {
                serde_json::to_string(value).map_err(|source| VersaError::Serialize { source })?
            }
            Node::Identifier { name } => name.clone(),
            Node::Comment { text } => self.render_comment(text),
            Node::Binary {
                operator,
                left,
                right,
            } => return self.render_binary(*operator, left, right, min_precedence),
            Node::Unary { operator, operand } => {
                let op = match operator {
                    UnaryOp::Not => self.dialect.not_op.as_str(),
                    other => other.symbol(),
                };
                let operand = self.render_expr(operand, UNARY_PRECEDENCE)?;
                // `- -x` must not fuse into `--x`
                let fuses = op.ends_with(is_sign) && operand.starts_with(is_sign);
                format!("{}{}{}", op, if fuses { " " } else { "" }, operand)
            }
            Node::Postfix { operator, operand } => {
                format!("{}{}", self.render_expr(operand, POSTFIX_PRECEDENCE)?, operator)
            }
            Node::Call { callee, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.render_expr(arg, 0))
                    .collect::<Result<Vec<_>, _>>()?;
                format!(
                    "{}({})",
                    self.render_expr(callee, POSTFIX_PRECEDENCE)?,
                    args.join(", ")
                )
            }
            Node::Member { object, property } => format!(
                "{}.{}",
                self.render_expr(object, POSTFIX_PRECEDENCE)?,
                self.render_expr(property, ATOM_PRECEDENCE)?
            ),
            Node::VarDecl { .. }
            | Node::FunctionDecl { .. }
            | Node::Return { .. }
            | Node::If { .. }
            | Node::While { .. } => {
                return Err(VersaError::UnknownExpression {
                    kind: node.kind_name().to_string(),
                })
            }
        };

        Ok(parenthesize(text, node.precedence(), min_precedence))
    }

    fn render_binary(
        &self,
        operator: BinaryOp,
        left: &Node,
        right: &Node,
        min_precedence: u8,
    ) -> Result<String, VersaError> {
        if let Some(base) = operator.compound_base() {
            if !self.dialect.supports_compound_assignment {
                return self.render_desugared(operator, base, left, right, min_precedence);
            }
        }

        let precedence = operator.precedence();
        let (left_min, right_min) = if operator.is_right_associative() {
            (precedence + 1, precedence)
        } else {
            (precedence, precedence + 1)
        };

        let text = format!(
            "{} {} {}",
            self.render_expr(left, left_min)?,
            self.binary_symbol(operator),
            self.render_expr(right, right_min)?
        );
        Ok(parenthesize(text, precedence, min_precedence))
    }

    /// `x op= y` as `x = x op y`, for dialects without compound assignment.
    fn render_desugared(
        &self,
        operator: BinaryOp,
        base: BinaryOp,
        left: &Node,
        right: &Node,
        min_precedence: u8,
    ) -> Result<String, VersaError> {
        let Node::Identifier { name } = left else {
            return Err(VersaError::CompoundTarget {
                operator: operator.symbol().to_string(),
                dialect: self.dialect.name.clone(),
            });
        };

        let value = self.render_expr(right, base.precedence() + 1)?;
        let text = format!("{} = {} {} {}", name, name, self.binary_symbol(base), value);
        Ok(parenthesize(
            text,
            BinaryOp::Assign.precedence(),
            min_precedence,
        ))
    }

    fn binary_symbol(&self, operator: BinaryOp) -> &str {
        match operator {
            BinaryOp::And => &self.dialect.and_op,
            BinaryOp::Or => &self.dialect.or_op,
            BinaryOp::Ne => &self.dialect.ne_op,
            other => other.symbol(),
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn parenthesize(text: String, precedence: u8, min_precedence: u8) -> String {
    if precedence < min_precedence {
        format!("({})", text)
    } else {
        text
    }
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Adjacent declarations group together; compound statements, other
/// declarations and comments stand apart.
fn needs_blank_line(prev: &Node, next: &Node) -> bool {
    match (prev, next) {
        (Node::VarDecl { .. }, Node::VarDecl { .. }) => false,
        (
            Node::VarDecl { .. } | Node::FunctionDecl { .. } | Node::If { .. } | Node::While { .. },
            _,
        ) => true,
        (_, Node::VarDecl { .. } | Node::Comment { .. }) => true,
        _ => false,
    }
}
