//! Expression trees.
//!
//! Every node exclusively owns its children, so a tree is built bottom-up by
//! moving already-built subtrees into their parent and dropped as a whole.

use std::fmt;

use crate::render::Glyphs;
use crate::types::{Var, VarSet};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Imply,
    Iff,
}

impl BinaryOp {
    /// Applies the connective to two truth values.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
            BinaryOp::Imply => !lhs || rhs,
            BinaryOp::Iff => lhs == rhs,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Var),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

// Constructors
impl Expr {
    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    pub fn unary(op: UnaryOp, child: Self) -> Self {
        Expr::Unary(op, Box::new(child))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn not(child: Self) -> Self {
        Expr::unary(UnaryOp::Not, child)
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn imply(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Imply, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Iff, lhs, rhs)
    }
}

// Getters
impl Expr {
    /// Depth of the tree (0 for a single variable).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Unary(_, e) => 1 + e.depth(),
            Expr::Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Unary(_, e) => 1 + e.size(),
            Expr::Binary(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Set of letters occurring in the tree, constants included.
    pub fn vars(&self) -> VarSet {
        match self {
            Expr::Var(v) => VarSet::empty().with(*v),
            Expr::Unary(_, e) => e.vars(),
            Expr::Binary(_, l, r) => l.vars() | r.vars(),
        }
    }
}

/// Fully parenthesized rendering of the tree, e.g. `(A ∧ (B ∨ ¬C))`.
///
/// Unlike [`render`][crate::render::render], this shows how the expression was
/// grouped by the parser rather than how it was written.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = Glyphs::UNICODE;
        match self {
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Unary(UnaryOp::Not, e) => write!(f, "{}{}", glyphs.not, e),
            Expr::Binary(op, l, r) => write!(f, "({} {} {})", l, glyphs.binary(*op), r),
        }
    }
}
