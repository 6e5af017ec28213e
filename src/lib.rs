//! # proptable: truth tables for propositional formulas
//!
//! **`proptable`** parses a propositional formula over the letters `A`-`Z`,
//! renders it in canonical form, and enumerates its full truth table together
//! with the row indices of its canonical CNF and DNF.
//!
//! ## Syntax
//!
//! | Connective    | Written as | Rendered as |
//! |---------------|------------|-------------|
//! | negation      | `!`        | `¬`         |
//! | conjunction   | `&`        | `∧`         |
//! | disjunction   | `\|`       | `∨`         |
//! | implication   | `>` `^`    | `→`         |
//! | biconditional | `=` `~`    | `↔`         |
//!
//! Letters are case-insensitive. `T` and `F` are the constants true and false.
//! Negation binds tightest, followed by `&`, `|`, `>` and `=`; all binary
//! connectives associate to the left.
//!
//! ## Basic Usage
//!
//! ```rust
//! use proptable::render::Glyphs;
//! use proptable::report::Report;
//!
//! let report = Report::new("A & B", &Glyphs::UNICODE).unwrap();
//! assert_eq!(report.rendered.text, "A ∧ B");
//! assert_eq!(report.table.num_rows(), 4);
//! assert_eq!(report.table.dnf().collect::<Vec<_>>(), vec![0]);
//! assert_eq!(report.table.cnf().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: single-pass shunting-yard parser producing tokens, an [`ast::Expr`] tree and the set of letters used.
//! - **[`eval`]**: short-circuit evaluation of a tree under an assignment.
//! - **[`table`]**: exhaustive enumeration of assignments and the CNF/DNF index sets.
//! - **[`render`]**: canonical rendering of the token stream.
//! - **[`report`]**: the textual table and error annotation used by the `proptable` binary.
//!
//! ## Resource usage
//!
//! A formula with `k` distinct free letters has `2^k` rows. The table is never
//! truncated: 26 letters mean 67,108,864 evaluations. Results take one bit per row.

pub mod ast;
pub mod bitset;
pub mod error;
pub mod eval;
pub mod parser;
pub mod render;
pub mod report;
pub mod table;
pub mod token;
pub mod types;
