use crate::err::RccErr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexErrTy {
    #[error("invalid token '{0}'")]
    UnknownChar(char),

    #[error("integer literal '{0}' is too large")]
    NumTooLarge(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("[Offset {pos}] {ty}")]
pub struct LexErr {
    pub pos: usize,
    pub ty: LexErrTy,
}

impl LexErr {
    pub fn new(pos: usize, ty: LexErrTy) -> LexErr {
        LexErr { pos, ty }
    }
}

impl RccErr for LexErr {
    fn pos(&self) -> usize {
        self.pos
    }

    fn to_msg(&self) -> String {
        self.ty.to_string()
    }
}
