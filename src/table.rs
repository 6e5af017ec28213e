//! Exhaustive truth tables.
//!
//! # Row order
//!
//! Rows are produced by the classic "subsets of a bitmask" descent
//!
//! ```text
//! s = mask; loop { visit(s); if s == 0 { break } s = (s - 1) & mask }
//! ```
//!
//! run over the set of free variables with `A` placed at the most significant
//! bit. `s` is the set of variables that are true in the row. Row 0 is the
//! all-true assignment and the first column changes slowest:
//!
//! ```text
//! | A | B |
//! | T | T |  row 0
//! | T | F |  row 1
//! | F | T |  row 2
//! | F | F |  row 3
//! ```
//!
//! # CNF and DNF indices
//!
//! With `k` free variables and `last = 2^k - 1`:
//!
//! - the DNF set holds every row index `i` whose row evaluates to true,
//! - the CNF set holds every row index `i` such that row `last ^ i` evaluates to false.
//!
//! Hence `i` is in the DNF set iff `last ^ i` is not in the CNF set.

use log::{debug, info, warn};

use crate::bitset::BitSet;
use crate::error::Result;
use crate::eval::Eval;
use crate::types::{Var, VarSet};

/// Number of free variables above which building a table gets logged as a warning.
const LARGE_TABLE_VARS: usize = 20;

/// Iterator over all assignments of a set of variables, in row order.
///
/// Every item is the set of variables that are true in that row.
#[derive(Debug, Clone)]
pub struct Assignments {
    /// Enumerated variables, most significant bit first.
    mask: u32,
    next: Option<u32>,
    remaining: usize,
}

impl Assignments {
    pub fn new(vars: VarSet) -> Self {
        let mask = vars.to_msb_first();
        Assignments {
            mask,
            next: Some(mask),
            remaining: 1 << vars.len(),
        }
    }
}

impl Iterator for Assignments {
    type Item = VarSet;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        self.remaining -= 1;
        Some(VarSet::from_msb_first(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// One row of a [`TruthTable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Row {
    pub index: usize,
    /// Free variables that are true in this row.
    pub assignment: VarSet,
    pub value: bool,
}

#[derive(Debug, Clone)]
pub struct TruthTable {
    columns: VarSet,
    results: BitSet,
}

impl TruthTable {
    /// Evaluates `f` on every assignment of the free variables among `vars`.
    ///
    /// `T` and `F` are never enumerated: every evaluation sees `T` true and `F` false.
    /// Fails with an out-of-memory error if the result storage cannot be allocated.
    pub fn build(f: &impl Eval, vars: VarSet) -> Result<Self> {
        let columns = vars.free();
        let num_vars = columns.len();
        let num_rows = 1usize << num_vars;
        if num_vars > LARGE_TABLE_VARS {
            warn!("Building a truth table over {} variables ({} rows)", num_vars, num_rows);
        } else {
            info!("Building a truth table over {} variables ({} rows)", num_vars, num_rows);
        }

        let mut results = BitSet::try_new(num_rows)?;
        for (i, assignment) in Assignments::new(columns).enumerate() {
            if f.eval(assignment.with(Var::T)) {
                results.insert(i);
            }
        }
        debug!("{} of {} rows are true", results.count_ones(), num_rows);

        Ok(TruthTable { columns, results })
    }

    /// Free variables, one column each, in letter order.
    pub fn columns(&self) -> VarSet {
        self.columns
    }

    pub fn num_vars(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.results.len()
    }

    /// Value of the expression in the given row.
    pub fn value(&self, index: usize) -> bool {
        self.results.contains(index)
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        Assignments::new(self.columns)
            .enumerate()
            .map(|(index, assignment)| Row {
                index,
                assignment,
                value: self.value(index),
            })
    }

    /// Row indices of the canonical DNF, in increasing order.
    pub fn dnf(&self) -> impl Iterator<Item = usize> + '_ {
        self.results.iter()
    }

    /// Row indices of the canonical CNF, in increasing order.
    pub fn cnf(&self) -> impl Iterator<Item = usize> + '_ {
        let last = self.num_rows() - 1;
        (0..self.num_rows()).filter(move |&i| !self.value(last ^ i))
    }

    /// True if every row evaluates to true.
    pub fn is_tautology(&self) -> bool {
        self.results.count_ones() == self.num_rows()
    }

    /// True if some row evaluates to true.
    pub fn is_satisfiable(&self) -> bool {
        self.results.count_ones() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    fn table(input: &str) -> TruthTable {
        let parsed = parse(input).unwrap();
        TruthTable::build(&parsed.expr, parsed.vars).unwrap()
    }

    fn letters(set: VarSet) -> String {
        set.iter().map(Var::letter).collect()
    }

    #[test]
    fn test_assignments_order() {
        let vars: VarSet = "AB".chars().filter_map(Var::from_letter).collect();
        let rows: Vec<String> = Assignments::new(vars).map(letters).collect();
        assert_eq!(rows, vec!["AB", "A", "B", ""]);
    }

    #[test]
    fn test_assignments_sparse_letters() {
        let vars: VarSet = "CQZ".chars().filter_map(Var::from_letter).collect();
        let rows: Vec<String> = Assignments::new(vars).map(letters).collect();
        assert_eq!(rows, vec!["CQZ", "CQ", "CZ", "C", "QZ", "Q", "Z", ""]);
    }

    #[test]
    fn test_assignments_are_distinct_and_complete() {
        let vars: VarSet = "ADGKPX".chars().filter_map(Var::from_letter).collect();
        let it = Assignments::new(vars);
        assert_eq!(it.len(), 64);
        let mut seen: Vec<u32> = it.map(VarSet::bits).collect();
        assert!(seen.iter().all(|&bits| bits & !vars.bits() == 0));
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn test_assignments_of_nothing() {
        let rows: Vec<VarSet> = Assignments::new(VarSet::empty()).collect();
        assert_eq!(rows, vec![VarSet::empty()]);
    }

    #[test]
    fn test_and() {
        let t = table("A&B");
        let values: Vec<bool> = t.rows().map(|row| row.value).collect();
        assert_eq!(values, vec![true, false, false, false]);
        assert_eq!(t.dnf().collect::<Vec<_>>(), vec![0]);
        assert_eq!(t.cnf().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_or() {
        let t = table("A|B");
        assert_eq!(t.dnf().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(t.cnf().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_imply_rows() {
        let t = table("A>B");
        let values: Vec<bool> = t.rows().map(|row| row.value).collect();
        assert_eq!(values, vec![true, false, true, true]);
    }

    #[test]
    fn test_iff_rows() {
        let t = table("A=B");
        for row in t.rows() {
            let a = row.assignment.contains(Var::new(0));
            let b = row.assignment.contains(Var::new(1));
            assert_eq!(row.value, a == b);
        }
    }

    #[test]
    fn test_constants_are_not_columns() {
        let t = table("T&A");
        assert_eq!(letters(t.columns()), "A");
        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.dnf().collect::<Vec<_>>(), vec![0]);

        let t = table("F|A");
        assert_eq!(t.dnf().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_constant_only() {
        let t = table("T>F");
        assert_eq!(t.num_vars(), 0);
        assert_eq!(t.num_rows(), 1);
        assert!(!t.value(0));
        assert_eq!(t.dnf().count(), 0);
        assert_eq!(t.cnf().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_tautology_and_contradiction() {
        assert!(table("A|!A").is_tautology());
        assert!(!table("A&!A").is_satisfiable());
        assert!(table("A&!A").cnf().eq(0..2));
    }

    #[test]
    fn test_cnf_dnf_complementarity() {
        let t = table("(A > B) & (C | !A) = D");
        let last = t.num_rows() - 1;
        let dnf: Vec<usize> = t.dnf().collect();
        let cnf: Vec<usize> = t.cnf().collect();
        for i in 0..t.num_rows() {
            assert_eq!(dnf.contains(&i), !cnf.contains(&(last ^ i)), "row {}", i);
        }
    }
}
