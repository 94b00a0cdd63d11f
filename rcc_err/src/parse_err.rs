use crate::err::RccErr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrTy {
    /// A specific punctuator was required: (expected, found).
    #[error("expected '{0}', but found '{1}'")]
    TknMismatch(String, String),

    /// A number, identifier or parenthesized expression was required.
    #[error("expected a number, identifier or '(', but found '{0}'")]
    ExpectedOperand(String),

    /// Parenthesized or chained assignment expressions went deeper than the parser allows.
    #[error("expression nested too deeply (limit is {0})")]
    NestingTooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[Offset {pos}] {ty}")]
pub struct ParseErr {
    pub pos: usize,
    pub ty: ParseErrTy,
}

impl ParseErr {
    pub fn new(pos: usize, ty: ParseErrTy) -> ParseErr {
        ParseErr { pos, ty }
    }
}

impl RccErr for ParseErr {
    fn pos(&self) -> usize {
        self.pos
    }

    fn to_msg(&self) -> String {
        self.ty.to_string()
    }
}
