use crate::errors::errors::{LexError, LexErrorKind};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

const TAB_SIZE: u32 = 4;

/// On-demand scanner over the whole source text.
///
/// The only mutable state is the cursor: byte position, line, and
/// column. `peek_token` snapshots and restores exactly that, so probing
/// never has side effects on the real stream.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    col: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(offset)
    }

    /// Consumes one character, keeping line/column in sync: a newline
    /// starts the next line at column 1, a tab advances the column to
    /// the next multiple-of-4 stop, anything else advances it by one.
    /// Columns count characters, the same unit the caret renderer walks.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();

        match c {
            '\n' => {
                self.line += 1;
                self.col = 1;
            }
            '\t' => {
                self.col += TAB_SIZE - ((self.col - 1) % TAB_SIZE);
            }
            _ => {
                self.col += 1;
            }
        }

        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Full text of the given 1-based source line, for caret rendering.
    fn line_text(&self, line: u32) -> String {
        self.source
            .lines()
            .nth(line.saturating_sub(1) as usize)
            .unwrap_or("")
            .to_string()
    }

    fn error_at(&self, kind: LexErrorKind, line: u32, col: u32) -> LexError {
        LexError::new(kind, line, col, self.line_text(line))
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while self.peek().is_some() && self.peek() != Some('\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    self.advance();
                    self.advance();
                    loop {
                        if self.peek().is_none() {
                            return Err(self.error_at(
                                LexErrorKind::UnterminatedBlockComment,
                                self.line,
                                self.col,
                            ));
                        }
                        if self.peek() == Some('*') && self.peek_at(1) == Some('/') {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.pos;
        let (line, col) = (self.line, self.col);

        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }
        let text = &self.source[start..self.pos];

        match RESERVED_LOOKUP.get(text) {
            Some(kind) => Token::new(*kind, text, line, col),
            None => Token::new(TokenKind::Identifier, text, line, col),
        }
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        let (line, col) = (self.line, self.col);
        let mut is_float = false;

        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        // Only a dot followed by a digit continues the number.
        if self.peek() == Some('.') && matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, &self.source[start..self.pos], line, col)
    }

    /// Scans one escape sequence. An invalid escape is reported at the
    /// backslash; end of input here means the enclosing literal never
    /// closed, reported at its opening quote like the other
    /// unterminated cases.
    fn escape(&mut self, closing: char, line: u32, col: u32) -> Result<char, LexError> {
        let (esc_line, esc_col) = (self.line, self.col);
        self.advance(); // the backslash

        match self.advance() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('\\') => Ok('\\'),
            Some(c) if c == closing => Ok(c),
            Some(c) => Err(self.error_at(LexErrorKind::InvalidEscape(c), esc_line, esc_col)),
            None => {
                let kind = if closing == '"' {
                    LexErrorKind::UnterminatedString
                } else {
                    LexErrorKind::UnterminatedChar
                };
                Err(self.error_at(kind, line, col))
            }
        }
    }

    fn string(&mut self, line: u32, col: u32) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                None => {
                    return Err(self.error_at(LexErrorKind::UnterminatedString, line, col));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => value.push(self.escape('"', line, col)?),
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        Ok(Token::new(TokenKind::String, value, line, col))
    }

    fn char_literal(&mut self, line: u32, col: u32) -> Result<Token, LexError> {
        self.advance(); // opening quote

        // An immediately closed literal carries an empty lexeme; the
        // parser rejects it.
        if self.match_char('\'') {
            return Ok(Token::new(TokenKind::Char, "", line, col));
        }

        let value = match self.peek() {
            None => return Err(self.error_at(LexErrorKind::UnterminatedChar, line, col)),
            Some('\\') => self.escape('\'', line, col)?,
            Some(c) => {
                self.advance();
                c
            }
        };

        if !self.match_char('\'') {
            return Err(self.error_at(LexErrorKind::UnterminatedChar, line, col));
        }

        Ok(Token::new(TokenKind::Char, value.to_string(), line, col))
    }

    /// Consumes and returns the next token. Multi-character operators
    /// are matched greedily, one extra lookahead character at a time.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        let (line, col) = (self.line, self.col);
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::new(TokenKind::Eof, "", line, col)),
        };

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.identifier_or_keyword());
        }
        if c.is_ascii_digit() {
            return Ok(self.number());
        }
        if c == '"' {
            return self.string(line, col);
        }
        if c == '\'' {
            return self.char_literal(line, col);
        }

        self.advance();
        let (kind, lexeme) = match c {
            '(' => (TokenKind::OpenParen, "("),
            ')' => (TokenKind::CloseParen, ")"),
            '{' => (TokenKind::OpenCurly, "{"),
            '}' => (TokenKind::CloseCurly, "}"),
            ',' => (TokenKind::Comma, ","),
            ':' => (TokenKind::Colon, ":"),
            ';' => (TokenKind::Semicolon, ";"),

            '+' => {
                if self.match_char('=') {
                    (TokenKind::PlusEquals, "+=")
                } else {
                    (TokenKind::Plus, "+")
                }
            }
            '-' => {
                if self.match_char('>') {
                    (TokenKind::Arrow, "->")
                } else if self.match_char('=') {
                    (TokenKind::MinusEquals, "-=")
                } else {
                    (TokenKind::Dash, "-")
                }
            }
            '*' => {
                if self.match_char('=') {
                    (TokenKind::StarEquals, "*=")
                } else {
                    (TokenKind::Star, "*")
                }
            }
            '/' => {
                if self.match_char('=') {
                    (TokenKind::SlashEquals, "/=")
                } else {
                    (TokenKind::Slash, "/")
                }
            }

            '=' => {
                if self.match_char('=') {
                    (TokenKind::Equals, "==")
                } else {
                    (TokenKind::Assignment, "=")
                }
            }
            '!' => {
                if self.match_char('=') {
                    (TokenKind::NotEquals, "!=")
                } else {
                    (TokenKind::Not, "!")
                }
            }
            '<' => {
                if self.match_char('=') {
                    (TokenKind::LessEquals, "<=")
                } else {
                    (TokenKind::Less, "<")
                }
            }
            '>' => {
                if self.match_char('=') {
                    (TokenKind::GreaterEquals, ">=")
                } else {
                    (TokenKind::Greater, ">")
                }
            }

            _ => {
                return Err(self.error_at(LexErrorKind::UnexpectedCharacter(c), line, col));
            }
        };

        Ok(Token::new(kind, lexeme, line, col))
    }

    /// Returns the next token without consuming it. Implemented by
    /// snapshotting the cursor around `next_token` and restoring it, so
    /// the scanning logic is never duplicated.
    pub fn peek_token(&mut self) -> Result<Token, LexError> {
        let (saved_pos, saved_line, saved_col) = (self.pos, self.line, self.col);
        let token = self.next_token();
        self.pos = saved_pos;
        self.line = saved_line;
        self.col = saved_col;
        token
    }
}
