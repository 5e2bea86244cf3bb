use llic::buffer::Buffer;
use llic::lang::{lex, Error, TokenKind};
use llic::mach::{Config, Event, Runtime};

pub fn tokens(s: &str) -> Vec<(TokenKind, String)> {
    lex(s)
        .unwrap()
        .iter()
        .map(|t| (t.kind(), t.text().to_string()))
        .collect()
}

pub fn command(s: &str) -> (TokenKind, String) {
    (TokenKind::Command, s.to_string())
}

pub fn register(s: &str) -> (TokenKind, String) {
    (TokenKind::Register, s.to_string())
}

pub fn number(s: &str) -> (TokenKind, String) {
    (TokenKind::Number, s.to_string())
}

pub fn runtime(bytes: &[u8], config: Config) -> Runtime<Vec<Event>> {
    Runtime::with_device(Buffer::from_slice(bytes).unwrap(), config, Vec::new())
}

pub fn exec(bytes: &[u8], config: Config) -> (Runtime<Vec<Event>>, Result<(), Error>) {
    let mut r = runtime(bytes, config);
    let result = r.run();
    (r, result)
}
