use super::token::{Token, TokenKind, TokenList};
use super::Error;
use crate::buffer::Buffer;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Lex a whole source text, stopping at the first error.
pub fn lex(s: &str) -> Result<TokenList> {
    let mut lexer = Lexer::new(Buffer::from_text(s)?);
    lexer.run()?;
    Ok(lexer.into_tokens())
}

fn is_command_char(ch: u8) -> bool {
    ch.is_ascii_uppercase()
}

fn is_number_char(ch: u8) -> bool {
    ch.is_ascii_digit()
}

fn is_register_char(ch: u8) -> bool {
    (b'A'..=b'F').contains(&ch)
}

fn is_terminator(ch: u8) -> bool {
    ch == b' ' || ch == b'\r' || ch == b'\n'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Command,
    Comment,
    Number,
}

/// ## Two phase lexer
///
/// [`advance`](Lexer::advance) looks at one character and picks a state,
/// then [`collect`](Lexer::collect) reads the rest of the token for that
/// state and returns to `Idle`. Registers are one character long and are
/// emitted by `advance` directly.
///
/// ```
/// use llic::buffer::Buffer;
/// use llic::lang::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new(Buffer::from_text(".PUSH 0 99").unwrap());
/// lexer.run().unwrap();
/// let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Command, TokenKind::Number, TokenKind::Number]);
/// ```
pub struct Lexer {
    source: Buffer<u8>,
    tokens: TokenList,
    cursor: usize,
    line: usize,
    start: usize,
    state: State,
}

impl Lexer {
    pub fn new(source: Buffer<u8>) -> Lexer {
        Lexer {
            source,
            tokens: TokenList::new(),
            cursor: 0,
            line: 1,
            start: 0,
            state: State::Idle,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn source(&self) -> &Buffer<u8> {
        &self.source
    }

    /// Tokens emitted so far, including those before a failure.
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn into_tokens(self) -> TokenList {
        self.tokens
    }

    pub fn run(&mut self) -> Result<()> {
        debug!(len = self.source.len(), "lexing");
        while self.advance()? {
            self.collect()?;
        }
        debug!(tokens = self.tokens.len(), lines = self.line, "lexed");
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.cursor).copied()
    }

    /// Returns `false` once the source is exhausted.
    pub fn advance(&mut self) -> Result<bool> {
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(false),
        };
        self.start = self.cursor;
        match ch {
            b'\n' => {
                self.line += 1;
                self.cursor += 1;
            }
            b'.' => {
                self.state = State::Command;
                self.cursor += 1;
            }
            b'#' => {
                self.state = State::Comment;
                self.cursor += 1;
            }
            ch if is_number_char(ch) => {
                // the digit belongs to the token, collect reads it again
                self.state = State::Number;
            }
            ch if is_register_char(ch) => {
                self.emit(TokenKind::Register, char::from(ch).to_string())?;
                self.cursor += 1;
            }
            _ => self.cursor += 1,
        }
        Ok(true)
    }

    /// Always leaves the lexer `Idle`, whether or not collection succeeded.
    pub fn collect(&mut self) -> Result<()> {
        let result = match self.state {
            State::Idle => Ok(()),
            State::Command => self.body(TokenKind::Command, is_command_char),
            State::Comment => {
                self.comment();
                Ok(())
            }
            State::Number => self.body(TokenKind::Number, is_number_char),
        };
        self.state = State::Idle;
        result
    }

    fn body(&mut self, kind: TokenKind, accept: fn(u8) -> bool) -> Result<()> {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if accept(ch) {
                text.push(char::from(ch));
                self.cursor += 1;
            } else if is_terminator(ch) {
                break;
            } else {
                let column = self.start..self.cursor + 1;
                return Err(match kind {
                    TokenKind::Number => {
                        error!(LexicalError, Some(self.line), ..&column; "INVALID CHARACTER IN NUMBER")
                    }
                    _ => {
                        error!(LexicalError, Some(self.line), ..&column; "INVALID CHARACTER IN COMMAND")
                    }
                });
            }
        }
        if text.is_empty() {
            let column = self.start..self.cursor;
            return Err(error!(LexicalError, Some(self.line), ..&column; "EMPTY TOKEN"));
        }
        self.emit(kind, text)
    }

    fn comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.cursor += 1;
            if ch == b'\n' {
                self.line += 1;
                break;
            }
        }
    }

    fn emit(&mut self, kind: TokenKind, text: String) -> Result<()> {
        trace!(?kind, text = %text, line = self.line, "token");
        self.tokens.append(Token::new(kind, text, self.line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexer(s: &str) -> Lexer {
        Lexer::new(Buffer::from_text(s).unwrap())
    }

    #[test]
    fn test_digit_is_not_consumed() {
        let mut l = lexer("42");
        assert!(l.advance().unwrap());
        assert_eq!(l.state(), State::Number);
        assert_eq!(l.cursor(), 0);
        l.collect().unwrap();
        assert_eq!(l.state(), State::Idle);
        assert_eq!(l.cursor(), 2);
        assert_eq!(l.tokens()[0].text(), "42");
    }

    #[test]
    fn test_dot_and_hash_are_consumed() {
        let mut l = lexer(".#");
        l.advance().unwrap();
        assert_eq!(l.state(), State::Command);
        assert_eq!(l.cursor(), 1);
        let mut l = lexer("#.");
        l.advance().unwrap();
        assert_eq!(l.state(), State::Comment);
        assert_eq!(l.cursor(), 1);
    }

    #[test]
    fn test_newline_keeps_state() {
        let mut l = lexer("\n\n");
        assert!(l.advance().unwrap());
        assert!(l.advance().unwrap());
        assert!(!l.advance().unwrap());
        assert_eq!(l.line(), 3);
        assert_eq!(l.state(), State::Idle);
    }

    #[test]
    fn test_end_of_source_is_done() {
        let mut l = lexer("");
        assert!(!l.advance().unwrap());
        assert_eq!(l.cursor(), 0);
        assert_eq!(l.line(), 1);
    }

    #[test]
    fn test_register_emitted_by_advance() {
        let mut l = lexer("F9");
        l.advance().unwrap();
        assert_eq!(l.state(), State::Idle);
        assert_eq!(l.cursor(), 1);
        assert_eq!(l.tokens().len(), 1);
        assert_eq!(l.tokens()[0].kind(), TokenKind::Register);
    }

    #[test]
    fn test_ignored_characters() {
        let mut l = lexer("gZ\t,");
        while l.advance().unwrap() {
            assert_eq!(l.state(), State::Idle);
        }
        assert_eq!(l.cursor(), 4);
        assert!(l.tokens().is_empty());
    }

    #[test]
    fn test_failure_resets_state() {
        let mut l = lexer(".ab");
        l.advance().unwrap();
        let e = l.collect().unwrap_err();
        assert!(e.is_lexical());
        assert_eq!(e.column(), 0..2);
        assert_eq!(l.state(), State::Idle);
        assert!(l.tokens().is_empty());
    }

    #[test]
    fn test_empty_command() {
        let mut l = lexer(". ");
        l.advance().unwrap();
        let e = l.collect().unwrap_err();
        assert_eq!(e.to_string(), "LEXICAL ERROR IN 1 (0..1); EMPTY TOKEN");
    }

    #[test]
    fn test_terminator_left_for_advance() {
        let mut l = lexer(".NOP\n");
        l.advance().unwrap();
        l.collect().unwrap();
        assert_eq!(l.cursor(), 4);
        assert_eq!(l.line(), 1);
        l.advance().unwrap();
        assert_eq!(l.line(), 2);
    }

    #[test]
    fn test_number_rejects_letters() {
        let mut l = lexer("12A");
        l.advance().unwrap();
        let e = l.collect().unwrap_err();
        assert_eq!(
            e.to_string(),
            "LEXICAL ERROR IN 1 (0..3); INVALID CHARACTER IN NUMBER"
        );
    }

    #[test]
    fn test_comment_to_end_of_source() {
        let mut l = lexer("# no newline");
        l.advance().unwrap();
        l.collect().unwrap();
        assert_eq!(l.cursor(), 12);
        assert_eq!(l.line(), 1);
        assert!(!l.advance().unwrap());
    }
}
