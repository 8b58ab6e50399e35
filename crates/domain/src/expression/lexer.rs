//! Tokenizer for arithmetic expressions.

use super::ParseError;

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
        }
    }
}

/// A token together with its byte offset in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Split `input` into tokens. Whitespace is not part of the alphabet.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedCharacter`] for anything that is not a
/// digit, `.`, operator or parenthesis, and [`ParseError::MalformedNumber`]
/// for literals with more than one `.` or no digits at all.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let token = match bytes[pos] {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'0'..=b'9' | b'.' => {
                let start = pos;
                while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                    pos += 1;
                }
                tokens.push(Spanned {
                    token: Token::Number(number_literal(&input[start..pos], start)?),
                    position: start,
                });
                continue;
            }
            _ => {
                let found = input[pos..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { position: pos, found });
            }
        };
        tokens.push(Spanned {
            token,
            position: pos,
        });
        pos += 1;
    }

    Ok(tokens)
}

fn number_literal(literal: &str, position: usize) -> Result<f64, ParseError> {
    let dots = literal.bytes().filter(|b| *b == b'.').count();
    let has_digit = literal.bytes().any(|b| b.is_ascii_digit());
    if dots > 1 || !has_digit {
        return Err(ParseError::MalformedNumber { position });
    }
    literal
        .parse()
        .map_err(|_| ParseError::MalformedNumber { position })
}
