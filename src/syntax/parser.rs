//! Versa Parser - single-pass recursive descent with precedence climbing
//!
//! Converts a token sequence into top-level AST nodes. The only state is a
//! read cursor that never moves backwards; there is no error recovery, the
//! first mismatch aborts the parse.
//!
//! Newline handling: newlines separate statements. They are skipped between
//! statements, before every prefix or primary operand, and before `)` and
//! `,` inside argument and parameter lists. They are never skipped before a
//! binary or postfix operator, so a newline ends an expression statement.
//!
//! Nesting is capped at [`MAX_NESTING_DEPTH`]. Blocks, prefix operators,
//! parentheses, folded binary operators and postfix links each count one
//! level, which bounds the depth of every tree the parser returns.

use crate::ast::{BinaryOp, Node, PostfixOp, UnaryOp};
use crate::diagnostics::VersaError;
use crate::syntax::token::{Token, TokenKind};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a token sequence into top-level statements.
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, VersaError> {
    Parser::new(tokens).parse_program()
}

/// Deepest nesting the parser accepts before failing with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn parse_program(&mut self) -> Result<Vec<Node>, VersaError> {
        let mut program = Vec::new();
        loop {
            self.skip_newlines();
            if self.is_at_end() {
                return Ok(program);
            }
            program.push(self.parse_statement()?);
        }
    }

    // ========================================================================
    // STATEMENTS
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Node, VersaError> {
        let keyword = match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword => token.text.as_str(),
            _ => return self.parse_expression(0),
        };

        match keyword {
            "var" => self.parse_var_declaration(),
            "function" => self.parse_function_declaration(),
            "if" => self.parse_if_statement(),
            "while" => self.parse_while_statement(),
            "return" => self.parse_return_statement(),
            other => Err(VersaError::UnexpectedKeyword {
                keyword: other.to_string(),
            }),
        }
    }

    fn parse_var_declaration(&mut self) -> Result<Node, VersaError> {
        self.expect(TokenKind::Keyword, Some("var"))?;
        let name = self.expect(TokenKind::Identifier, None)?.text.clone();
        self.expect(TokenKind::Operator, Some("="))?;
        let init = self.parse_expression(0)?;
        Ok(Node::VarDecl {
            name,
            init: Box::new(init),
        })
    }

    fn parse_function_declaration(&mut self) -> Result<Node, VersaError> {
        self.expect(TokenKind::Keyword, Some("function"))?;
        let name = self.expect(TokenKind::Identifier, None)?.text.clone();
        self.expect(TokenKind::Punctuation, Some("("))?;

        let mut params = Vec::new();
        self.skip_newlines();
        if !self.check(TokenKind::Punctuation, Some(")")) {
            loop {
                self.skip_newlines();
                params.push(self.expect(TokenKind::Identifier, None)?.text.clone());
                self.skip_newlines();
                if !self.eat(TokenKind::Punctuation, Some(",")) {
                    break;
                }
            }
        }
        self.expect(TokenKind::Punctuation, Some(")"))?;

        let body = self.parse_block()?;
        Ok(Node::FunctionDecl { name, params, body })
    }

    fn parse_if_statement(&mut self) -> Result<Node, VersaError> {
        self.expect(TokenKind::Keyword, Some("if"))?;
        let test = self.parse_condition()?;
        let then = self.parse_block()?;
        let otherwise = if self.eat(TokenKind::Keyword, Some("else")) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Node::If {
            test: Box::new(test),
            then,
            otherwise,
        })
    }

    fn parse_while_statement(&mut self) -> Result<Node, VersaError> {
        self.expect(TokenKind::Keyword, Some("while"))?;
        let test = self.parse_condition()?;
        let body = self.parse_block()?;
        Ok(Node::While {
            test: Box::new(test),
            body,
        })
    }

    /// A bare `return` when the next token is a newline or the input ends.
    fn parse_return_statement(&mut self) -> Result<Node, VersaError> {
        self.expect(TokenKind::Keyword, Some("return"))?;
        let argument = if self.is_at_end() || self.check(TokenKind::Newline, None) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };
        Ok(Node::Return { argument })
    }

    /// `( expr )` after `if` / `while`.
    fn parse_condition(&mut self) -> Result<Node, VersaError> {
        self.expect(TokenKind::Punctuation, Some("("))?;
        let test = self.parse_expression(0)?;
        self.expect(TokenKind::Punctuation, Some(")"))?;
        Ok(test)
    }

    /// `{ stmt* }`
    fn parse_block(&mut self) -> Result<Vec<Node>, VersaError> {
        self.expect(TokenKind::Punctuation, Some("{"))?;
        self.enter()?;
        let mut body = Vec::new();
        loop {
            self.skip_newlines();
            if self.is_at_end() || self.check(TokenKind::Punctuation, Some("}")) {
                break;
            }
            body.push(self.parse_statement()?);
        }
        self.expect(TokenKind::Punctuation, Some("}"))?;
        self.leave(1);
        Ok(body)
    }

    // ========================================================================
    // EXPRESSIONS
    // ========================================================================

    /// Precedence climbing: folds binary operators binding at least `min_precedence`.
    fn parse_expression(&mut self, min_precedence: u8) -> Result<Node, VersaError> {
        let mut left = self.parse_unary()?;
        let mut folded = 0;

        while let Some(operator) = self.peek_binary_operator() {
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            self.pos += 1;
            self.enter()?;
            folded += 1;
            let next_min = if operator.is_right_associative() {
                precedence
            } else {
                precedence + 1
            };
            let right = self.parse_expression(next_min)?;
            left = Node::binary(operator, left, right);
        }

        self.leave(folded);
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Node, VersaError> {
        self.skip_newlines();
        let operator = self
            .peek()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| UnaryOp::from_symbol(&token.text));

        match operator {
            Some(operator) => {
                self.pos += 1;
                self.enter()?;
                let operand = self.parse_unary()?;
                self.leave(1);
                Ok(Node::unary(operator, operand))
            }
            None => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Node, VersaError> {
        self.skip_newlines();
        let token = self.advance("expression")?;

        let node = match token.kind {
            TokenKind::Comment => Node::Comment {
                text: token.text.clone(),
            },
            TokenKind::Number => Node::number(token.text.clone()),
            TokenKind::String => Node::string(token.text.clone()),
            TokenKind::Identifier => match token.text.as_str() {
                "true" => Node::Boolean { value: true },
                "false" => Node::Boolean { value: false },
                name => Node::identifier(name),
            },
            TokenKind::Punctuation if token.text == "(" => {
                self.enter()?;
                let inner = self.parse_expression(0)?;
                self.expect(TokenKind::Punctuation, Some(")"))?;
                self.leave(1);
                inner
            }
            _ => {
                return Err(VersaError::UnexpectedToken {
                    found: token.to_string(),
                })
            }
        };

        self.parse_postfix(node)
    }

    /// Greedy chain of `++`/`--`, calls and member accesses.
    fn parse_postfix(&mut self, mut expr: Node) -> Result<Node, VersaError> {
        let mut links = 0;
        loop {
            if let Some(operator) = self
                .peek()
                .filter(|token| token.kind == TokenKind::Operator)
                .and_then(|token| PostfixOp::from_symbol(&token.text))
            {
                self.pos += 1;
                self.enter()?;
                expr = Node::postfix(operator, expr);
            } else if self.eat(TokenKind::Punctuation, Some("(")) {
                self.enter()?;
                let args = self.parse_arguments()?;
                expr = Node::call(expr, args);
            } else if self.eat(TokenKind::Punctuation, Some(".")) {
                self.enter()?;
                let property = self.expect(TokenKind::Identifier, None)?.text.clone();
                expr = Node::member(expr, property);
            } else {
                self.leave(links);
                return Ok(expr);
            }
            links += 1;
        }
    }

    /// Comma-separated arguments after an already consumed `(`.
    fn parse_arguments(&mut self) -> Result<Vec<Node>, VersaError> {
        let mut args = Vec::new();
        self.skip_newlines();
        if !self.check(TokenKind::Punctuation, Some(")")) {
            loop {
                args.push(self.parse_expression(0)?);
                self.skip_newlines();
                if !self.eat(TokenKind::Punctuation, Some(",")) {
                    break;
                }
            }
        }
        self.expect(TokenKind::Punctuation, Some(")"))?;
        Ok(args)
    }

    fn peek_binary_operator(&self) -> Option<BinaryOp> {
        self.peek()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| BinaryOp::from_symbol(&token.text))
    }

    // ========================================================================
    // CURSOR
    // ========================================================================

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Takes the next token; `expected` describes what was required if there is none.
    fn advance(&mut self, expected: &str) -> Result<&'a Token, VersaError> {
        let token = self.tokens.get(self.pos).ok_or_else(|| VersaError::UnexpectedEof {
            expected: expected.to_string(),
        })?;
        self.pos += 1;
        Ok(token)
    }

    fn check(&self, kind: TokenKind, text: Option<&str>) -> bool {
        self.peek().is_some_and(|token| token.is(kind, text))
    }

    fn eat(&mut self, kind: TokenKind, text: Option<&str>) -> bool {
        let matched = self.check(kind, text);
        if matched {
            self.pos += 1;
        }
        matched
    }

    fn expect(&mut self, kind: TokenKind, text: Option<&str>) -> Result<&'a Token, VersaError> {
        let expected = describe(kind, text);
        match self.peek() {
            None => Err(VersaError::UnexpectedEof { expected }),
            Some(token) if token.is(kind, text) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(VersaError::Expected {
                expected,
                found: token.to_string(),
            }),
        }
    }

    fn enter(&mut self) -> Result<(), VersaError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(VersaError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn skip_newlines(&mut self) {
        while self.eat(TokenKind::Newline, None) {}
    }
}

fn describe(kind: TokenKind, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("{} '{}'", kind, text),
        None => kind.to_string(),
    }
}
