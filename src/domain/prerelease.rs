//! Prerelease identifiers and the dot-separated prerelease sublanguage
//!
//! A prerelease is a non-empty, dot-separated list of identifiers. Each
//! identifier is either numeric (no leading zero unless it is exactly `0`) or
//! alphanumeric over `[0-9A-Za-z-]`. The numeric alternative is always tried
//! first, so `01` reads as `0` followed by unconsumed input.
//!
//! The [`Scanner`] defined here is shared with the full version grammar in
//! [`crate::domain::version`].

use crate::error::ParseError;
use std::cmp::Ordering;
use std::fmt;

/// A single prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Numeric identifier, compared numerically
    Numeric(u64),
    /// Alphanumeric identifier, compared lexicographically
    Alphanumeric(String),
}

impl Identifier {
    /// Shorthand for an alphanumeric identifier
    pub fn alpha(s: impl Into<String>) -> Self {
        Identifier::Alphanumeric(s.into())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alphanumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a complete prerelease string such as `alpha.1` or `MY-NAME`
///
/// The whole input must be consumed.
///
/// # Returns
/// * `Ok(Vec<Identifier>)` - The non-empty identifier list
/// * `Err(ParseError)` - Offset of the first character that could not be consumed
pub fn parse_prerelease(s: &str) -> Result<Vec<Identifier>, ParseError> {
    let mut scanner = Scanner::new(s);
    scanner
        .prerelease()
        .and_then(|ids| scanner.end().map(|_| ids))
        .map_err(|offset| ParseError::new(s, offset))
}

/// Render identifiers joined with `.`
pub fn render_prerelease(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Compare two prerelease lists by precedence.
///
/// An empty list (no prerelease) sorts above any non-empty one. Otherwise
/// identifiers are compared pairwise and a strict prefix sorts lower.
pub fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

/// Failure position produced by a [`Scanner`] step
pub(crate) type Step<T> = std::result::Result<T, usize>;

pub(crate) fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Byte cursor implementing the version grammar as ordered choice.
///
/// Every step either advances and succeeds, or leaves the cursor where it
/// failed and returns that offset. Callers that treat a step as optional
/// reset the cursor to their mark.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn literal(&mut self, expected: u8) -> Step<()> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.pos)
        }
    }

    /// `'0' | [1-9][0-9]*`
    pub(crate) fn numeric(&mut self) -> Step<u64> {
        let start = self.pos;
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(0)
            }
            Some(b'1'..=b'9') => {
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
                self.input[start..self.pos].parse::<u64>().map_err(|_| {
                    self.pos = start;
                    start
                })
            }
            _ => Err(start),
        }
    }

    /// `[0-9A-Za-z-]+`
    pub(crate) fn alphanumeric(&mut self) -> Step<&'a str> {
        let start = self.pos;
        while self.peek().is_some_and(is_identifier_byte) {
            self.pos += 1;
        }
        if self.pos == start {
            Err(start)
        } else {
            Ok(&self.input[start..self.pos])
        }
    }

    /// `numeric | alphanumeric`
    pub(crate) fn identifier(&mut self) -> Step<Identifier> {
        let start = self.pos;
        match self.numeric() {
            Ok(n) => Ok(Identifier::Numeric(n)),
            // a digit run that does not fit in u64
            Err(at) if self.peek().is_some_and(|b| b.is_ascii_digit()) => Err(at),
            Err(_) => {
                self.reset(start);
                self.alphanumeric()
                    .map(|s| Identifier::Alphanumeric(s.to_string()))
            }
        }
    }

    /// `identifier ('.' identifier)*`
    pub(crate) fn prerelease(&mut self) -> Step<Vec<Identifier>> {
        let mut identifiers = vec![self.identifier()?];
        loop {
            let mark = self.pos;
            match self.literal(b'.').and_then(|_| self.identifier()) {
                Ok(id) => identifiers.push(id),
                Err(_) => {
                    self.reset(mark);
                    break;
                }
            }
        }
        Ok(identifiers)
    }

    pub(crate) fn end(&self) -> Step<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.pos)
        }
    }
}
