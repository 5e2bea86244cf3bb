use super::{Error, ErrorCode};
use crate::buffer::Buffer;
use crate::mach::Register;
use std::convert::TryFrom;

/// Every token produced by one lexing pass, in source order.
pub type TokenList = Buffer<Token>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `.NAME`, the dot is not part of the text.
    Command,
    /// One of the letters `A` to `F`.
    Register,
    Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, line: usize) -> Token {
        Token { kind, text, line }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn register(&self) -> Option<Register> {
        match self.kind {
            TokenKind::Register => self.text.chars().next().and_then(Register::from_letter),
            _ => None,
        }
    }

    /// Numbers wider than a machine word have no value.
    pub fn number(&self) -> Option<u16> {
        match self.kind {
            TokenKind::Number => self.text.parse::<u16>().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::Command => write!(f, ".{}", self.text),
            TokenKind::Register | TokenKind::Number => write!(f, "{}", self.text),
        }
    }
}

impl TryFrom<&Token> for Register {
    type Error = Error;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        token
            .register()
            .ok_or_else(|| Error::new(ErrorCode::InvalidRegister).in_line_number(Some(token.line)))
    }
}

/// Tokens sharing a line are separated by one space. Each line change
/// becomes as many newlines as the line numbers differ, so blank lines
/// survive. Comments are gone by this point.
impl std::fmt::Display for TokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut line = 1;
        let mut first_on_line = true;
        for token in self.iter() {
            while line < token.line {
                writeln!(f)?;
                line += 1;
                first_on_line = true;
            }
            if !first_on_line {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            first_on_line = false;
        }
        Ok(())
    }
}
