use crate::{diag, lex_err::LexErr, parse_err::ParseErr};
use thiserror::Error;

/// Shared behaviour for every error the front end can produce. Each error knows the byte
/// offset into the source where it was detected, and can render itself against that source.
pub trait RccErr {
    /// Byte offset into the source buffer where the error was found.
    fn pos(&self) -> usize;

    fn to_msg(&self) -> String;

    /// Write the diagnostic for this error to stderr.
    fn emit(&self, src: &str) {
        eprint!("{}", diag::render(src, self.pos(), &self.to_msg()));
    }
}

/// The single terminal error channel out of lexing and parsing. Callers that drive a
/// whole translation get one of these back and decide how to exit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontendErr {
    #[error("lexical error: {0}")]
    Lex(#[from] LexErr),

    #[error("syntax error: {0}")]
    Parse(#[from] ParseErr),
}

impl RccErr for FrontendErr {
    fn pos(&self) -> usize {
        match self {
            FrontendErr::Lex(e) => e.pos(),
            FrontendErr::Parse(e) => e.pos(),
        }
    }

    fn to_msg(&self) -> String {
        match self {
            FrontendErr::Lex(e) => e.to_msg(),
            FrontendErr::Parse(e) => e.to_msg(),
        }
    }
}
