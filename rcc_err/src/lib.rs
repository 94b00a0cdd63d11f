pub mod diag;
pub mod err;
pub mod lex_err;
pub mod parse_err;
