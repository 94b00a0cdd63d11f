use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenTy {
    LeftParen,
    RightParen,
    Semicolon,
    Eq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,

    // Multi character tokens
    EqEq,
    BangEq,
    LtEq,
    GtEq,

    // Identifiers/literals. The spelling of an identifier is the token's source slice.
    Ident,
    Num(i64),

    // Marks the end of the input. Every token sequence ends with exactly one of these.
    Eof,
}

/// Broad classification of a token, independent of which punctuator it is.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Punct,
    Ident,
    Num,
    Eof,
}

impl TokenTy {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenTy::Ident => TokenKind::Ident,
            TokenTy::Num(_) => TokenKind::Num,
            TokenTy::Eof => TokenKind::Eof,
            _ => TokenKind::Punct,
        }
    }
}

impl fmt::Display for TokenTy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pretty_ty = match self {
            TokenTy::LeftParen => "(",
            TokenTy::RightParen => ")",
            TokenTy::Semicolon => ";",
            TokenTy::Eq => "=",
            TokenTy::Lt => "<",
            TokenTy::Gt => ">",
            TokenTy::Plus => "+",
            TokenTy::Minus => "-",
            TokenTy::Star => "*",
            TokenTy::Slash => "/",

            TokenTy::EqEq => "==",
            TokenTy::BangEq => "!=",
            TokenTy::LtEq => "<=",
            TokenTy::GtEq => ">=",

            TokenTy::Ident => "identifier",
            TokenTy::Num(val) => return write!(f, "{}", val),

            TokenTy::Eof => "EOF",
        };

        write!(f, "{}", pretty_ty)
    }
}

/// A classified slice of the source buffer. The token borrows its text from the source
/// rather than copying it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    pub ty: TokenTy,

    /// The exact source text of this token. Empty for the end of input token.
    pub text: &'a str,

    /// Byte offset of the first character of this token in the source.
    pub pos: usize,
}

impl<'a> Token<'a> {
    pub fn new(ty: TokenTy, text: &'a str, pos: usize) -> Token<'a> {
        Token { ty, text, pos }
    }

    /// Byte offset just past the end of this token.
    pub fn end(&self) -> usize {
        self.pos + self.text.len()
    }

    /// Returns the spelling of an identifier token.
    pub fn name(&self) -> Option<&'a str> {
        match self.ty {
            TokenTy::Ident => Some(self.text),
            _ => None,
        }
    }

    /// Returns the decoded value of an integer literal token.
    pub fn val(&self) -> Option<i64> {
        match self.ty {
            TokenTy::Num(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.ty == TokenTy::Eof
    }

    /// How this token should be named in a diagnostic.
    pub fn describe(&self) -> String {
        match self.ty {
            TokenTy::Eof => self.ty.to_string(),
            _ => String::from(self.text),
        }
    }
}
