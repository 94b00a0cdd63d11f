use crate::token::TokenTy;
use std::fmt;

/// Binary operators that survive into the AST. Greater-than comparisons are rewritten by
/// the parser into `Lt`/`Le` with swapped operands, so they have no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
}

impl BinOp {
    /// Map an operator token to the node operator it builds. Returns the operator and
    /// whether the operands must be swapped.
    pub fn from_tkn(ty: &TokenTy) -> Option<(BinOp, bool)> {
        let op = match ty {
            TokenTy::Plus => (BinOp::Add, false),
            TokenTy::Minus => (BinOp::Sub, false),
            TokenTy::Star => (BinOp::Mul, false),
            TokenTy::Slash => (BinOp::Div, false),
            TokenTy::EqEq => (BinOp::Eq, false),
            TokenTy::BangEq => (BinOp::Ne, false),
            TokenTy::Lt => (BinOp::Lt, false),
            TokenTy::LtEq => (BinOp::Le, false),
            TokenTy::Gt => (BinOp::Lt, true),
            TokenTy::GtEq => (BinOp::Le, true),
            _ => return None,
        };

        Some(op)
    }

    pub fn is_comparison(&self) -> bool {
        match self {
            BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le => true,
            _ => false,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pretty = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
        };

        write!(f, "{}", pretty)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNode {
    ExprStmt {
        expr: Box<AstNode>,
    },

    Assign {
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
    },

    Binary {
        op: BinOp,
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
    },

    Num {
        val: i64,
    },

    /// A local variable, already resolved to its slot offset below the frame base.
    LVar {
        offset: usize,
    },
}

impl AstNode {
    pub fn binary(op: BinOp, lhs: AstNode, rhs: AstNode) -> AstNode {
        AstNode::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assign(lhs: AstNode, rhs: AstNode) -> AstNode {
        AstNode::Assign {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn expr_stmt(expr: AstNode) -> AstNode {
        AstNode::ExprStmt {
            expr: Box::new(expr),
        }
    }

    pub fn num(val: i64) -> AstNode {
        AstNode::Num { val }
    }

    pub fn lvar(offset: usize) -> AstNode {
        AstNode::LVar { offset }
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            AstNode::Num { .. } | AstNode::LVar { .. } => true,
            _ => false,
        }
    }

    /// Returns the left and right children of a binary shaped node.
    pub fn children(&self) -> Option<(&AstNode, &AstNode)> {
        match self {
            AstNode::Assign { lhs, rhs } | AstNode::Binary { lhs, rhs, .. } => {
                Some((lhs.as_ref(), rhs.as_ref()))
            }
            _ => None,
        }
    }
}

/// The result of parsing: statement roots in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub stmts: Vec<AstNode>,

    /// Frame space the statements need, equal to the highest offset handed out.
    pub frame_size: usize,
}

impl Program {
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AstNode> {
        self.stmts.iter()
    }
}
