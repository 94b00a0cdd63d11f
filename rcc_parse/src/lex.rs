use crate::{
    symtab::SymTab,
    token::{Token, TokenTy},
};
use rcc_err::lex_err::{LexErr, LexErrTy};
use tracing::{debug, trace};

/// Scan a source buffer into its full token sequence, ending with an `Eof` token.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, LexErr> {
    Lexer::new(src).tokenize()
}

/// Like `tokenize()`, but every identifier is registered in the symbol table as soon
/// as it is scanned.
pub fn tokenize_with<'a>(src: &'a str, sym_tab: &mut SymTab) -> Result<Vec<Token<'a>>, LexErr> {
    Lexer::with_sym_tab(src, sym_tab).tokenize()
}

#[derive(Debug)]
pub struct Lexer<'a, 's> {
    /// The full input buffer. Tokens hold slices into it.
    src: &'a str,

    /// Byte offset of the current character
    pos: usize,

    /// Optional symbol table to register identifiers in while scanning.
    sym_tab: Option<&'s mut SymTab>,
}

impl<'a, 's> Lexer<'a, 's> {
    pub fn new(src: &'a str) -> Lexer<'a, 's> {
        Lexer {
            src,
            pos: 0,
            sym_tab: None,
        }
    }

    pub fn with_sym_tab(src: &'a str, sym_tab: &'s mut SymTab) -> Lexer<'a, 's> {
        Lexer {
            src,
            pos: 0,
            sym_tab: Some(sym_tab),
        }
    }

    /// Lex the whole input. Either the complete sequence is returned, or the first
    /// error encountered. No partial sequence is ever handed back.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexErr> {
        let mut tokens = Vec::new();

        loop {
            let tkn = self.lex()?;
            trace!(ty = ?tkn.ty, pos = tkn.pos, "lexed token");

            let done = tkn.is_eof();
            tokens.push(tkn);
            if done {
                break;
            }
        }

        debug!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }

    /// Get the next token from the input. Once the input is exhausted this keeps
    /// returning `Eof` tokens positioned at the end of the buffer.
    pub fn lex(&mut self) -> Result<Token<'a>, LexErr> {
        self.skip_whitespace();

        let ch = match self.curr() {
            Some(ch) => ch,
            None => return Ok(self.eof_tkn()),
        };

        // Two character punctuators must be matched before their one character prefixes.
        match ch {
            '=' => Ok(self.consume_pair('=', TokenTy::EqEq, TokenTy::Eq)),
            '<' => Ok(self.consume_pair('=', TokenTy::LtEq, TokenTy::Lt)),
            '>' => Ok(self.consume_pair('=', TokenTy::GtEq, TokenTy::Gt)),
            '!' => match self.peek_char() {
                Some('=') => Ok(self.consume(TokenTy::BangEq, 2)),
                _ => Err(LexErr::new(self.pos, LexErrTy::UnknownChar(ch))),
            },
            '(' => Ok(self.consume(TokenTy::LeftParen, 1)),
            ')' => Ok(self.consume(TokenTy::RightParen, 1)),
            ';' => Ok(self.consume(TokenTy::Semicolon, 1)),
            '+' => Ok(self.consume(TokenTy::Plus, 1)),
            '-' => Ok(self.consume(TokenTy::Minus, 1)),
            '*' => Ok(self.consume(TokenTy::Star, 1)),
            '/' => Ok(self.consume(TokenTy::Slash, 1)),
            _ if ch.is_ascii_digit() => self.lex_num(),
            _ if is_ident_char(ch) => Ok(self.lex_ident()),
            _ => Err(LexErr::new(self.pos, LexErrTy::UnknownChar(ch))),
        }
    }

    /// Lex a maximal run of decimal digits as an integer literal.
    fn lex_num(&mut self) -> Result<Token<'a>, LexErr> {
        let start = self.pos;
        self.advance_while(|ch| ch.is_ascii_digit());

        let src = self.src;
        let lit = &src[start..self.pos];
        match lit.parse::<i64>() {
            Ok(val) => Ok(Token::new(TokenTy::Num(val), lit, start)),
            Err(_) => Err(LexErr::new(
                start,
                LexErrTy::NumTooLarge(String::from(lit)),
            )),
        }
    }

    /// Lex an identifier. Numbers are matched before identifiers, so an identifier
    /// never begins with a digit.
    fn lex_ident(&mut self) -> Token<'a> {
        let start = self.pos;
        self.advance_while(is_ident_char);

        let src = self.src;
        let name = &src[start..self.pos];
        if let Some(sym_tab) = self.sym_tab.as_mut() {
            sym_tab.register(name);
        }

        Token::new(TokenTy::Ident, name, start)
    }

    /// Consume a one or two character punctuator, depending on whether the next
    /// character is `second`.
    fn consume_pair(&mut self, second: char, double: TokenTy, single: TokenTy) -> Token<'a> {
        match self.peek_char() {
            Some(ch) if ch == second => self.consume(double, 2),
            _ => self.consume(single, 1),
        }
    }

    /// Consume `len` bytes of punctuation and return a token for them.
    fn consume(&mut self, ty: TokenTy, len: usize) -> Token<'a> {
        let src = self.src;
        let start = self.pos;
        self.pos += len;
        Token::new(ty, &src[start..self.pos], start)
    }

    fn curr(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Return the character after the current one, if any.
    fn peek_char(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance_while<F>(&mut self, pred: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(ch) = self.curr() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(is_space);
    }

    fn eof_tkn(&self) -> Token<'a> {
        let src = self.src;
        Token::new(TokenTy::Eof, &src[self.pos..], self.pos)
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

// ASCII whitespace, including the vertical tab.
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}
