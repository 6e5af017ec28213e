use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::types::{Var, VarSet};

/// Evaluation under an assignment, given as the set of variables that are true.
///
/// Constants get no special treatment here: `T` and `F` are looked up like any
/// other letter, so the caller is responsible for putting `T` into the assignment
/// and keeping `F` out of it.
pub trait Eval {
    fn eval(&self, assignment: VarSet) -> bool;
}

impl Eval for Var {
    fn eval(&self, assignment: VarSet) -> bool {
        assignment.contains(*self)
    }
}

impl Eval for Expr {
    fn eval(&self, assignment: VarSet) -> bool {
        match self {
            Expr::Var(v) => v.eval(assignment),
            Expr::Unary(UnaryOp::Not, e) => !e.eval(assignment),
            Expr::Binary(BinaryOp::And, l, r) => l.eval(assignment) && r.eval(assignment),
            Expr::Binary(BinaryOp::Or, l, r) => l.eval(assignment) || r.eval(assignment),
            Expr::Binary(BinaryOp::Imply, l, r) => !l.eval(assignment) || r.eval(assignment),
            Expr::Binary(BinaryOp::Iff, l, r) => l.eval(assignment) == r.eval(assignment),
        }
    }
}
