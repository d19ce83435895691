//! Versa lexer: source text to an ordered token sequence.
//!
//! Scanning is a single left-to-right pass with no backtracking. Only the
//! space character is insignificant; a newline is a statement separator
//! and is emitted as its own token.

use crate::diagnostics::VersaError;
use crate::syntax::token::{
    Token, TokenKind, KEYWORDS, ONE_CHAR_OPERATORS, PUNCTUATION, TWO_CHAR_OPERATORS,
};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Tokenizes Versa source code.
pub fn tokenize(source: &str) -> Result<Vec<Token>, VersaError> {
    Lexer::new(source).tokenize()
}

/// Character cursor over one source string. Offsets are byte offsets.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, VersaError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                ' ' => {
                    self.pos += 1;
                }
                '\n' => {
                    self.pos += 1;
                    tokens.push(Token::newline());
                }
                '#' => tokens.push(self.lex_comment()),
                '0'..='9' => tokens.push(self.lex_number()),
                '"' => tokens.push(self.lex_string()?),
                'a'..='z' | 'A'..='Z' | '_' => tokens.push(self.lex_word()),
                _ => tokens.push(self.lex_symbol(ch)?),
            }
        }

        Ok(tokens)
    }

    // ========================================================================
    // CURSOR
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek().filter(|&c| pred(c)) {
            text.push(c);
            self.pos += 1;
        }
        text
    }

    // ========================================================================
    // TOKEN CLASSES
    // ========================================================================

    fn lex_comment(&mut self) -> Token {
        self.pos += 1; // '#'
        let text = self.take_while(|c| c != '\n');
        Token::new(TokenKind::Comment, text.trim())
    }

    /// Digits and dots, taken as written. `1.2.3` is one token.
    fn lex_number(&mut self) -> Token {
        let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
        Token::new(TokenKind::Number, text)
    }

    fn lex_string(&mut self) -> Result<Token, VersaError> {
        let start = self.offset();
        self.pos += 1; // opening quote

        let mut text = String::new();
        loop {
            match self.peek() {
                None => return Err(VersaError::unterminated_string(self.source, start)),
                Some('"') => {
                    self.pos += 1;
                    return Ok(Token::new(TokenKind::String, text));
                }
                Some('\\') if self.peek_at(1) == Some('"') => {
                    text.push('"');
                    self.pos += 2;
                }
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn lex_word(&mut self) -> Token {
        let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let kind = if KEYWORDS.contains(&word.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, word)
    }

    /// Operators (longest match first) and punctuation.
    fn lex_symbol(&mut self, ch: char) -> Result<Token, VersaError> {
        if let Some(next) = self.peek_at(1) {
            let pair: String = [ch, next].iter().collect();
            if TWO_CHAR_OPERATORS.contains(&pair.as_str()) {
                self.pos += 2;
                return Ok(Token::new(TokenKind::Operator, pair));
            }
        }

        let kind = if ONE_CHAR_OPERATORS.contains(&ch) {
            TokenKind::Operator
        } else if PUNCTUATION.contains(&ch) {
            TokenKind::Punctuation
        } else {
            return Err(VersaError::unexpected_character(
                self.source,
                ch,
                self.offset(),
            ));
        };

        self.pos += 1;
        Ok(Token::new(kind, ch.to_string()))
    }
}
