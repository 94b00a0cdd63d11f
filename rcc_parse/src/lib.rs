pub mod ast;
pub mod config;
pub mod lex;
pub mod parser;
pub mod printer;
pub mod symtab;
pub mod token;

use crate::{
    ast::Program, config::ParseConfig, parser::Parser, symtab::SymTab, token::Token,
};
use rcc_err::{err::FrontendErr, lex_err::LexErr, parse_err::ParseErr};

/// Runs a full translation of the source text: lexes the whole buffer, then parses the
/// resulting tokens. Returns the program along with the symbol table built while parsing,
/// so callers can inspect the frame layout.
pub fn translate(src: &str, config: &ParseConfig) -> Result<(Program, SymTab), FrontendErr> {
    let mut sym_tab = SymTab::with_config(config);
    let tokens = lex_source(src, &mut sym_tab, config)?;
    let program = parse_tokens(tokens, &mut sym_tab, config)?;
    Ok((program, sym_tab))
}

/// The lexing half of `translate()`. Identifiers are registered in `sym_tab` as they are
/// lexed when the config asks for eager registration.
pub fn lex_source<'a>(
    src: &'a str,
    sym_tab: &mut SymTab,
    config: &ParseConfig,
) -> Result<Vec<Token<'a>>, LexErr> {
    if config.eager_idents {
        lex::tokenize_with(src, sym_tab)
    } else {
        lex::tokenize(src)
    }
}

/// The parsing half of `translate()`.
pub fn parse_tokens(
    tokens: Vec<Token>,
    sym_tab: &mut SymTab,
    config: &ParseConfig,
) -> Result<Program, ParseErr> {
    Parser::new(tokens, sym_tab)
        .with_max_depth(config.max_depth)
        .parse()
}
