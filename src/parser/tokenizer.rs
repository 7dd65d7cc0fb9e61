use winnow::combinator::alt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::any;

use super::model::{Pattern, Token, TokenKind, TokenValue};

type PResult<T> = Result<T, ErrMode<ContextError>>;

/// Split a format string into tokens in one left-to-right pass.
///
/// Total: every character lands in exactly one token. A backslash escapes
/// the following character; characters outside the token alphabet come back
/// as literals. A trailing lone backslash is itself a literal.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let mut input = pattern;
    let mut tokens = Vec::new();
    while let Ok(token) = next_token.parse_next(&mut input) {
        tokens.push(token);
    }
    tokens
}

pub fn parse_pattern(pattern: &str) -> Pattern {
    Pattern {
        pattern: pattern.to_string(),
        tokens: tokenize(pattern),
    }
}

fn next_token(input: &mut &str) -> PResult<Token> {
    alt((escaped_parser, format_char_parser, literal_parser)).parse_next(input)
}

// Parsers using winnow combinators

fn escaped_parser(input: &mut &str) -> PResult<Token> {
    let start = *input;
    '\\'.parse_next(input)?;
    let next = any.parse_next(input)?;
    let len = 1 + next.len_utf8();
    let raw = &start[..len];
    Ok(Token::new(TokenKind::Escaped, raw, TokenValue::Char(next)))
}

fn format_char_parser(input: &mut &str) -> PResult<Token> {
    let (ch, kind) = any
        .verify_map(|c: char| TokenKind::from_char(c).map(|kind| (c, kind)))
        .parse_next(input)?;
    Ok(Token::new(kind, ch.to_string(), TokenValue::None))
}

fn literal_parser(input: &mut &str) -> PResult<Token> {
    let ch = any.parse_next(input)?;
    Ok(Token::new(
        TokenKind::Literal,
        ch.to_string(),
        TokenValue::Char(ch),
    ))
}
