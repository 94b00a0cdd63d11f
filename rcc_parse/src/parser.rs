use crate::{
    ast::{AstNode, BinOp, Program},
    config::DEFAULT_MAX_DEPTH,
    symtab::SymTab,
    token::{Token, TokenTy},
};

use rcc_err::parse_err::{ParseErr, ParseErrTy};

use tracing::{debug, trace};

/// [`Parser`] implements a top-down, LL(1) recursive descent parser over a fully lexed
/// token sequence. A couple of things to note:
///
/// 1. Operator precedence is encoded into the grammar itself. Parsing an expression begins
/// at the lowest precedence (assignment), and ends at the highest (primary expressions).
///
/// 2. Identifiers are resolved to frame offsets while parsing, through the symbol table the
/// parser borrows. The resulting AST never holds names.
///
/// 3. There is no error recovery. The first error found ends the parse and is returned
/// to the caller.
///
/// 4. Nesting through parentheses and assignment chains is bounded by `max_depth`, so
/// pathological input fails with a diagnostic rather than overflowing the stack.
///
/// Parsing methods match on tokens using `expect()` or `optional()`, and recurse to the
/// correct production based on the current token, `curr_tkn()`.
pub struct Parser<'a, 's> {
    /// The complete token sequence, always ending in an `Eof` token.
    tokens: Vec<Token<'a>>,

    /// Index of the current token.
    idx: usize,

    /// Reference to a symbol table, used to assign frame offsets to identifiers.
    sym_tab: &'s mut SymTab,

    /// Current number of open groups and assignment right hand sides.
    depth: usize,

    max_depth: usize,
}

impl<'a, 's> Parser<'a, 's> {
    /// Creates a new parser over a token sequence. If the sequence is not terminated by
    /// an `Eof` token, one is appended at the end of the last token.
    pub fn new(mut tokens: Vec<Token<'a>>, symt: &'s mut SymTab) -> Parser<'a, 's> {
        let needs_eof = match tokens.last() {
            Some(tkn) => !tkn.is_eof(),
            None => true,
        };

        if needs_eof {
            let end = tokens.last().map_or(0, |tkn| tkn.end());
            tokens.push(Token::new(TokenTy::Eof, "", end));
        }

        Parser {
            tokens,
            idx: 0,
            sym_tab: symt,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Parser<'a, 's> {
        self.max_depth = max_depth;
        self
    }

    /// Main entry point to the recursive descent parser. Parses every statement up to the
    /// end of input and returns them in source order.
    ///
    /// program ::= { stmt } EOF ;
    pub fn parse(&mut self) -> Result<Program, ParseErr> {
        let mut stmts = Vec::new();

        while !self.curr_tkn().is_eof() {
            stmts.push(self.stmt()?);
        }

        debug!(
            stmts = stmts.len(),
            locals = self.sym_tab.len(),
            "parsed program"
        );

        Ok(Program {
            stmts,
            frame_size: self.sym_tab.frame_size(),
        })
    }

    /// Parses an expression statement. Every statement must end with a semicolon.
    ///
    /// stmt ::= expr ";" ;
    fn stmt(&mut self) -> Result<AstNode, ParseErr> {
        let node = self.expr()?;
        self.expect(TokenTy::Semicolon)?;
        Ok(AstNode::expr_stmt(node))
    }

    /// Parses an expression. Each expression method recurses into the next higher precedence
    /// level first, which is why parsing starts from the lowest precedence.
    ///
    /// | =                  | <- Lowest precedence
    /// | ==, !=             |
    /// | <, <=, >, >=       |
    /// | +, -               |
    /// | *, /               |
    /// | +, - Unary         |
    /// | Literals, idents   | <- Highest precedence
    ///
    /// expr ::= assignexpr ;
    fn expr(&mut self) -> Result<AstNode, ParseErr> {
        self.assign_expr()
    }

    /// Parses an assign expression. The right hand side recurses back into assign_expr(),
    /// which makes assignment right associative: `a = b = c` is `a = (b = c)`.
    ///
    /// assignexpr ::= eqexpr [ "=" assignexpr ] ;
    fn assign_expr(&mut self) -> Result<AstNode, ParseErr> {
        let ast = self.equality_expr()?;

        let eq_tkn = *self.curr_tkn();
        if self.optional(TokenTy::Eq) {
            self.nest(&eq_tkn)?;
            let rhs = self.assign_expr()?;
            self.depth -= 1;
            return Ok(AstNode::assign(ast, rhs));
        }

        Ok(ast)
    }

    /// Parses an equality ("!=" and "==") expression.
    ///
    /// eqexpr ::= cmpexpr { ( "==" | "!=" ) cmpexpr } ;
    fn equality_expr(&mut self) -> Result<AstNode, ParseErr> {
        let mut ast = self.compr_expr()?;

        loop {
            match self.curr_tkn().ty {
                TokenTy::EqEq | TokenTy::BangEq => {
                    let op = self.consume().ty;
                    let rhs = self.compr_expr()?;
                    ast = bin_node(&op, ast, rhs);
                }
                _ => break,
            }
        }

        Ok(ast)
    }

    /// Parses a comparison (">", "<", ">=", "<=") expression. Greater-than forms are built
    /// as the matching less-than node with the operands swapped, so `a > b` produces the
    /// same tree as `b < a`.
    ///
    /// cmpexpr ::= addorsubexpr { ( "<" | "<=" | ">" | ">=" ) addorsubexpr } ;
    fn compr_expr(&mut self) -> Result<AstNode, ParseErr> {
        let mut ast = self.add_or_sub_expr()?;

        loop {
            match self.curr_tkn().ty {
                TokenTy::Lt | TokenTy::LtEq | TokenTy::Gt | TokenTy::GtEq => {
                    let op = self.consume().ty;
                    let rhs = self.add_or_sub_expr()?;
                    ast = bin_node(&op, ast, rhs);
                }
                _ => break,
            }
        }

        Ok(ast)
    }

    /// Parses addition or subtraction expressions.
    ///
    /// addorsubexpr ::= mulordivexpr { ( "+" | "-" ) mulordivexpr } ;
    fn add_or_sub_expr(&mut self) -> Result<AstNode, ParseErr> {
        let mut ast = self.mul_or_div_expr()?;

        loop {
            match self.curr_tkn().ty {
                TokenTy::Plus | TokenTy::Minus => {
                    let op = self.consume().ty;
                    let rhs = self.mul_or_div_expr()?;
                    ast = bin_node(&op, ast, rhs);
                }
                _ => break,
            }
        }

        Ok(ast)
    }

    /// Parses a multiplication or division expression.
    ///
    /// mulordivexpr ::= unaryexpr { ( "*" | "/" ) unaryexpr } ;
    fn mul_or_div_expr(&mut self) -> Result<AstNode, ParseErr> {
        let mut ast = self.unary_expr()?;

        loop {
            match self.curr_tkn().ty {
                TokenTy::Star | TokenTy::Slash => {
                    let op = self.consume().ty;
                    let rhs = self.unary_expr()?;
                    ast = bin_node(&op, ast, rhs);
                }
                _ => break,
            }
        }

        Ok(ast)
    }

    /// Parses a unary expression. A unary plus is dropped, and a unary minus is built as a
    /// subtraction from zero. Only one sign is accepted before a primary.
    ///
    /// unaryexpr ::= [ "+" | "-" ] primary ;
    fn unary_expr(&mut self) -> Result<AstNode, ParseErr> {
        if self.optional(TokenTy::Plus) {
            return self.primary_expr();
        }

        if self.optional(TokenTy::Minus) {
            let rhs = self.primary_expr()?;
            return Ok(AstNode::binary(BinOp::Sub, AstNode::num(0), rhs));
        }

        self.primary_expr()
    }

    /// Parse a primary expression: an integer literal, an identifier, or a parenthesized
    /// expression. Identifiers are resolved to a frame offset here. A name that has not been
    /// seen before is given a new slot one slot width beyond the current head.
    ///
    /// primary ::= NUMBER | IDENT | groupexpr ;
    fn primary_expr(&mut self) -> Result<AstNode, ParseErr> {
        let tkn = *self.curr_tkn();

        match tkn.ty {
            TokenTy::Num(val) => {
                self.consume();
                Ok(AstNode::num(val))
            }
            TokenTy::Ident => {
                self.consume();
                let offset = self.sym_tab.declare(tkn.text);
                trace!(name = tkn.text, offset, "resolved local");
                Ok(AstNode::lvar(offset))
            }
            TokenTy::LeftParen => self.group_expr(),
            _ => Err(ParseErr::new(
                tkn.pos,
                ParseErrTy::ExpectedOperand(tkn.describe()),
            )),
        }
    }

    /// Parses an expression surrounded by parenthesis.
    ///
    /// groupexpr ::= "(" expr ")" ;
    fn group_expr(&mut self) -> Result<AstNode, ParseErr> {
        let paren_tkn = *self.curr_tkn();
        self.expect(TokenTy::LeftParen)?;

        self.nest(&paren_tkn)?;
        let ast = self.expr()?;
        self.depth -= 1;

        self.expect(TokenTy::RightParen)?;
        Ok(ast)
    }

    /// Enter one more level of nesting, failing at the given token once the limit is hit.
    /// Callers decrement `depth` when the nested expression has been parsed.
    fn nest(&mut self, tkn: &Token<'a>) -> Result<(), ParseErr> {
        if self.depth >= self.max_depth {
            return Err(ParseErr::new(
                tkn.pos,
                ParseErrTy::NestingTooDeep(self.max_depth),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Check that the current token is the same as the one we expect. If it is, consume the
    /// token and advance. If it isn't, return an error positioned at the current token.
    fn expect(&mut self, tknty: TokenTy) -> Result<(), ParseErr> {
        if self.curr_tkn().ty == tknty {
            self.consume();
            Ok(())
        } else {
            let tkn = self.curr_tkn();
            let err_ty = ParseErrTy::TknMismatch(tknty.to_string(), tkn.describe());
            Err(ParseErr::new(tkn.pos, err_ty))
        }
    }

    /// Checks that the token matches what we expect. If it does, we consume it and return true.
    /// If not, return false. No error is reported, since the token is optional at this point
    /// in the grammar.
    fn optional(&mut self, tknty: TokenTy) -> bool {
        if self.curr_tkn().ty == tknty {
            self.consume();
            return true;
        }
        false
    }

    fn curr_tkn(&self) -> &Token<'a> {
        &self.tokens[self.idx]
    }

    /// Advance to the next token, returning the one just consumed. The parser never moves
    /// past the final `Eof` token.
    fn consume(&mut self) -> Token<'a> {
        let tkn = self.tokens[self.idx];
        if !tkn.is_eof() {
            self.idx += 1;
        }
        tkn
    }
}

/// Build a binary node for an operator token, swapping operands where the operator
/// is canonicalized into its mirrored form. Callers only pass operator tokens.
fn bin_node(op: &TokenTy, lhs: AstNode, rhs: AstNode) -> AstNode {
    match BinOp::from_tkn(op) {
        Some((bin_op, false)) => AstNode::binary(bin_op, lhs, rhs),
        Some((bin_op, true)) => AstNode::binary(bin_op, rhs, lhs),
        None => unreachable!("bin_node called with non-operator token {:?}", op),
    }
}
