/*!
# Rust Language Module

This Rust module provides lexical analysis of the assembly language.

A source text is a flat run of tokens. Commands start with a dot and are
spelled in capitals, registers are the letters `A` to `F`, numbers are
decimal digits, and `#` comments out the rest of the line.

```text
.PUSH 0 99   # push a word
.POP A
```

*/

pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use lex::State;
pub use token::Token;
pub use token::TokenKind;
pub use token::TokenList;
