//! Single-pass operator-precedence parser.
//!
//! The parser walks the line once, classifying every non-whitespace character
//! into a [`Token`] and feeding it through a shunting-yard machine with two
//! stacks:
//!
//! - the **operator stack** holds operators and open brackets,
//! - the **operand stack** holds finished subtrees.
//!
//! Both stacks pair every entry with the character offset it came from, so that
//! errors can point at the offending token. When an operator is popped, its
//! operands are popped too and moved into a new [`Expr`] node, which is pushed
//! back as a single operand. A virtual [`Token::End`] drains the stacks at the
//! end of input; a valid expression leaves exactly one operand behind.
//!
//! # Examples
//!
//! ```
//! use proptable::parser::parse;
//!
//! let parsed = parse("a & !b | c").unwrap();
//! assert_eq!(parsed.expr.to_string(), "((A ∧ ¬B) ∨ C)");
//! assert_eq!(parsed.vars.to_string(), "{A, B, C}");
//! ```

use std::str::FromStr;

use log::debug;

use crate::ast::Expr;
use crate::error::{Error, ErrorKind, Result};
use crate::token::Token;
use crate::types::VarSet;

/// Maximum number of characters in an input line.
pub const MAX_EXPR_LEN: usize = 1023;

/// Result of a successful parse.
#[derive(Debug, Clone)]
pub struct Parsed {
    /// Tokens in input order, without whitespace and without [`Token::End`].
    pub tokens: Vec<Token>,
    /// The expression tree.
    pub expr: Expr,
    /// Every letter occurring in the expression, `T` and `F` included.
    pub vars: VarSet,
}

/// Parses a single line into tokens, an expression tree and its variable set.
pub fn parse(line: &str) -> Result<Parsed> {
    let len = line.chars().count();
    if len > MAX_EXPR_LEN {
        return Err(Error::new(ErrorKind::TooLong, MAX_EXPR_LEN));
    }

    let mut parser = Parser::with_capacity(len)?;
    for (pos, c) in line.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        let token = Token::classify(c).ok_or(Error::new(ErrorKind::InvalidCharacter, pos))?;
        parser.feed(token, pos)?;
    }
    parser.feed(Token::End, len)?;
    parser.finish()
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(|parsed| parsed.expr)
    }
}

struct Parser {
    operators: Vec<(Token, usize)>,
    operands: Vec<(Expr, usize)>,
    tokens: Vec<Token>,
    vars: VarSet,
    prev: Option<Token>,
}

impl Parser {
    fn with_capacity(len: usize) -> Result<Self> {
        let mut tokens = Vec::new();
        tokens.try_reserve_exact(len)?;
        let mut operators = Vec::new();
        operators.try_reserve(len)?;
        let mut operands = Vec::new();
        operands.try_reserve(len)?;
        Ok(Parser {
            operators,
            operands,
            tokens,
            vars: VarSet::empty(),
            prev: None,
        })
    }

    fn feed(&mut self, token: Token, pos: usize) -> Result<()> {
        match (self.prev, token) {
            (Some(Token::Var(_)), Token::LeftBracket) => {
                return Err(Error::new(ErrorKind::UnexpectedOpeningBracket, pos));
            }
            (Some(Token::LeftBracket), Token::RightBracket) => {
                return Err(Error::new(ErrorKind::IsolatedBracketPair, pos));
            }
            _ => {}
        }

        if !matches!(token, Token::Var(_) | Token::LeftBracket) {
            self.reduce(token)?;
        }

        match token {
            Token::Var(var) => {
                debug!("operand {} at {}", var, pos);
                self.vars.insert(var);
                self.operands.push((Expr::var(var), pos));
            }
            Token::RightBracket => {
                if !matches!(self.operators.last(), Some((Token::LeftBracket, _))) {
                    return Err(Error::new(ErrorKind::UnbalancedBracket, pos));
                }
                self.operators.pop();
            }
            Token::End => {}
            op => {
                debug!("push {:?} at {}", op, pos);
                self.operators.push((op, pos));
            }
        }

        if token != Token::End {
            self.tokens.push(token);
        }
        self.prev = Some(token);
        Ok(())
    }

    /// Pops every operator that binds at least as tight as `current` and folds it
    /// into a tree node.
    fn reduce(&mut self, current: Token) -> Result<()> {
        while let Some(&(top, top_pos)) = self.operators.last() {
            if !current.pops(top) {
                break;
            }
            self.operators.pop();

            // `)` stops below `(`, so only `End` gets here.
            if top == Token::LeftBracket {
                return Err(Error::new(ErrorKind::UnexpectedBracket, top_pos));
            }

            if self.operands.len() < top.arity() {
                return Err(Error::new(ErrorKind::MissingOperand, top_pos));
            }
            debug!("reduce {:?} at {} (current {:?})", top, top_pos, current);

            let node = if let Some(op) = top.as_binary() {
                let rhs = self.pop_right_operand(top_pos)?;
                let (lhs, _) = self.pop_operand(top_pos)?;
                Expr::binary(op, lhs, rhs)
            } else if let Some(op) = top.as_unary() {
                Expr::unary(op, self.pop_right_operand(top_pos)?)
            } else {
                unreachable!("{:?} on the operator stack", top);
            };
            self.operands.push((node, top_pos));
        }
        Ok(())
    }

    fn pop_operand(&mut self, op_pos: usize) -> Result<(Expr, usize)> {
        self.operands
            .pop()
            .ok_or(Error::new(ErrorKind::MissingOperand, op_pos))
    }

    /// Pops the operand that must follow the operator at `op_pos`.
    ///
    /// An operand written before its operator (as in `A!` or `AB&`) means the
    /// operator has nothing on its right.
    fn pop_right_operand(&mut self, op_pos: usize) -> Result<Expr> {
        let (expr, pos) = self.pop_operand(op_pos)?;
        if pos < op_pos {
            return Err(Error::new(ErrorKind::MissingOperand, op_pos));
        }
        Ok(expr)
    }

    fn finish(self) -> Result<Parsed> {
        let mut operands = self.operands.into_iter();
        match (operands.next(), operands.next()) {
            (None, _) => Err(Error::new(ErrorKind::EmptyExpression, 0)),
            (Some(_), Some((_, pos))) => Err(Error::new(ErrorKind::RedundantOccurrence, pos)),
            (Some((expr, _)), None) => Ok(Parsed {
                tokens: self.tokens,
                expr,
                vars: self.vars,
            }),
        }
    }
}
