//! Recursive-descent parser that evaluates as it goes.
//!
//! Values are folded inside the precedence loops, so a long flat chain such
//! as `1+1+…+1` never recurses. Only parentheses and prefix signs recurse,
//! and those are capped at [`MAX_DEPTH`].

use super::ParseError;
use super::lexer::{Spanned, Token};

/// Maximum nesting of parentheses and prefix signs.
pub const MAX_DEPTH: usize = 256;

/// Parse and evaluate a token stream. The result is not checked for
/// finiteness; that is the caller's job.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first syntax problem found.
pub fn parse(tokens: &[Spanned]) -> Result<f64, ParseError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expression()?;
    match parser.peek() {
        None => Ok(value),
        Some(Spanned {
            token: Token::RParen,
            position,
        }) => Err(ParseError::UnbalancedParenthesis { position }),
        Some(Spanned { token, position }) => Err(ParseError::UnexpectedToken {
            position,
            found: token,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Spanned> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn nested<F>(&mut self, f: F) -> Result<f64, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<f64, ParseError>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        self.depth += 1;
        let value = f(self);
        self.depth -= 1;
        value
    }

    fn expression(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.term()?;
        loop {
            match self.peek().map(|s| s.token) {
                Some(Token::Plus) => {
                    self.advance();
                    acc += self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek().map(|s| s.token) {
                Some(Token::Star) => {
                    self.advance();
                    acc *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    acc /= self.unary()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, ParseError> {
        match self.peek().map(|s| s.token) {
            Some(Token::Plus) => {
                self.advance();
                self.nested(Self::unary)
            }
            Some(Token::Minus) => {
                self.advance();
                self.nested(Self::unary).map(|v| -v)
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, ParseError> {
        match self.advance() {
            Some(Spanned {
                token: Token::Number(value),
                ..
            }) => Ok(value),
            Some(Spanned {
                token: Token::LParen,
                position,
            }) => {
                let value = self.nested(Self::expression)?;
                match self.advance() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => Ok(value),
                    Some(Spanned { token, position }) => {
                        Err(ParseError::UnexpectedToken { position, found: token })
                    }
                    None => Err(ParseError::UnbalancedParenthesis { position }),
                }
            }
            Some(Spanned { token, position }) => {
                Err(ParseError::UnexpectedToken { position, found: token })
            }
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
