//! Tokenizer for the expression language
//!
//! One regular expression recognizes every token kind. Text between two
//! matches may only be whitespace; anything else is reported instead of being
//! skipped.

use super::error::ParseError;
use super::Operator;
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Groups: 1 = (negated) identifier, 2 = (negated) constant, 3 = implication,
/// 4 = single-character operator or parenthesis
const TOKEN_PATTERN: &str = r"(!?[A-Za-z]+)|(!?[01])|(->)|([*+^!()])";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A variable name, with the negation of a leading `!` folded in
    Identifier { name: Arc<str>, negated: bool },
    /// `0` or `1`, already complemented when written `!0` / `!1`
    Constant(bool),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl TokenKind {
    pub(crate) fn is_operand(&self) -> bool {
        matches!(self, TokenKind::Identifier { .. } | TokenKind::Constant(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// Byte offset of the first character of the token
    pub(crate) position: usize,
}

/// Split `input` into tokens
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in token_regex().captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        check_gap(input, cursor, whole.start())?;
        cursor = whole.end();

        let kind = if let Some(ident) = caps.get(1) {
            let (negated, name) = strip_negation(ident.as_str());
            TokenKind::Identifier {
                name: Arc::from(name),
                negated,
            }
        } else if let Some(constant) = caps.get(2) {
            let (negated, digit) = strip_negation(constant.as_str());
            TokenKind::Constant((digit == "1") != negated)
        } else if caps.get(3).is_some() {
            TokenKind::Operator(Operator::Implies)
        } else {
            match whole.as_str() {
                "(" => TokenKind::OpenParen,
                ")" => TokenKind::CloseParen,
                symbol => match Operator::from_symbol(symbol) {
                    Some(op) => TokenKind::Operator(op),
                    None => return Err(unexpected(input, whole.start(), symbol)),
                },
            }
        };

        tokens.push(Token {
            kind,
            position: whole.start(),
        });
    }
    check_gap(input, cursor, input.len())?;

    Ok(tokens)
}

fn strip_negation(text: &str) -> (bool, &str) {
    match text.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

/// Fail if `input[start..end]` holds anything but whitespace
fn check_gap(input: &str, start: usize, end: usize) -> Result<(), ParseError> {
    let gap = &input[start..end];
    match gap.find(|c: char| !c.is_whitespace()) {
        None => Ok(()),
        Some(offset) => Err(unexpected(input, start + offset, gap.trim())),
    }
}

fn unexpected(input: &str, position: usize, fragment: &str) -> ParseError {
    ParseError::UnexpectedCharacter {
        input: Arc::from(input),
        position,
        fragment: Arc::from(fragment),
    }
}
