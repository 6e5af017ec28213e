//! Type-safe wrappers for propositional variables and sets of them.
//!
//! Every variable is a single letter `A..=Z`. The letters `T` and `F` are parsed
//! like any other variable but act as the constants true and false: they never
//! get a column in the truth table and their values are forced during evaluation.
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Number of distinct variables (one per letter of the alphabet).
pub const NUM_VARS: usize = 26;

/// A propositional variable, identified by its letter.
///
/// # Invariants
///
/// - The index is in `0..26`, index 0 being `A`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// The constant-true letter `T`.
    pub const T: Var = Var(b'T' - b'A');
    /// The constant-false letter `F`.
    pub const F: Var = Var(b'F' - b'A');

    /// Creates a variable from its zero-based index (`0` is `A`).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 26`.
    pub fn new(index: usize) -> Self {
        assert!(index < NUM_VARS, "Variable index must be < {}", NUM_VARS);
        Var(index as u8)
    }

    /// Creates a variable from an ASCII letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Var(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Returns the zero-based index of this variable.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the uppercase letter of this variable.
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// Checks whether this letter is one of the reserved constants `T` or `F`.
    pub fn is_const(self) -> bool {
        self == Var::T || self == Var::F
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A set of variables packed into the low 26 bits of a `u32`.
///
/// Bit `i` corresponds to the letter `A + i`. The same set type doubles as an
/// assignment: a variable is true iff it is a member.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct VarSet(u32);

impl VarSet {
    /// Mask of all valid bits.
    const ALL: u32 = (1 << NUM_VARS) - 1;

    /// Creates an empty set.
    pub const fn empty() -> Self {
        VarSet(0)
    }

    /// Creates the set of all 26 letters.
    pub const fn all() -> Self {
        VarSet(Self::ALL)
    }

    /// Creates a set from raw bits, discarding bits above the 26th.
    pub const fn from_bits(bits: u32) -> Self {
        VarSet(bits & Self::ALL)
    }

    /// Returns the raw bits of the set.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns the number of variables in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no members.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if `var` is a member.
    #[inline]
    pub fn contains(self, var: Var) -> bool {
        self.0 & (1 << var.0) != 0
    }

    /// Adds `var`. Returns true if it was not a member before.
    #[inline]
    pub fn insert(&mut self, var: Var) -> bool {
        let was_clear = !self.contains(var);
        self.0 |= 1 << var.0;
        was_clear
    }

    /// Removes `var`. Returns true if it was a member before.
    #[inline]
    pub fn remove(&mut self, var: Var) -> bool {
        let was_set = self.contains(var);
        self.0 &= !(1 << var.0);
        was_set
    }

    /// Returns a copy of the set with `var` added.
    pub fn with(mut self, var: Var) -> Self {
        self.insert(var);
        self
    }

    /// Returns a copy of the set with `var` removed.
    pub fn without(mut self, var: Var) -> Self {
        self.remove(var);
        self
    }

    /// Returns the free variables of the set, that is, without `T` and `F`.
    pub fn free(self) -> Self {
        self.without(Var::T).without(Var::F)
    }

    /// Returns the set with its bit order reversed, so that `A` becomes the most
    /// significant of the 26 bits and `Z` the least significant.
    pub(crate) fn to_msb_first(self) -> u32 {
        self.0.reverse_bits() >> (32 - NUM_VARS)
    }

    /// Inverse of [`VarSet::to_msb_first`].
    pub(crate) fn from_msb_first(bits: u32) -> Self {
        VarSet::from_bits((bits << (32 - NUM_VARS)).reverse_bits())
    }

    /// Returns an iterator over the members in letter order.
    pub fn iter(self) -> VarSetIter {
        VarSetIter { bits: self.0 }
    }
}

impl BitOr for VarSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        VarSet(self.0 | rhs.0)
    }
}

impl BitAnd for VarSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        VarSet(self.0 & rhs.0)
    }
}

impl Not for VarSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        VarSet(!self.0 & Self::ALL)
    }
}

impl FromIterator<Var> for VarSet {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        let mut set = VarSet::empty();
        for var in iter {
            set.insert(var);
        }
        set
    }
}

impl IntoIterator for VarSet {
    type Item = Var;
    type IntoIter = VarSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the members of a [`VarSet`], in letter order.
pub struct VarSetIter {
    bits: u32,
}

impl Iterator for VarSetIter {
    type Item = Var;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1; // Clear lowest set bit
        Some(Var(index as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for VarSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_from_letter() {
        assert_eq!(Var::from_letter('A'), Some(Var::new(0)));
        assert_eq!(Var::from_letter('a'), Some(Var::new(0)));
        assert_eq!(Var::from_letter('z'), Some(Var::new(25)));
        assert_eq!(Var::from_letter('t'), Some(Var::T));
        assert_eq!(Var::from_letter('1'), None);
        assert_eq!(Var::from_letter('é'), None);
    }

    #[test]
    fn test_var_letter() {
        assert_eq!(Var::new(2).letter(), 'C');
        assert_eq!(Var::F.to_string(), "F");
        assert!(Var::T.is_const());
        assert!(!Var::new(0).is_const());
    }

    #[test]
    #[should_panic(expected = "Variable index must be < 26")]
    fn test_var_out_of_range_panics() {
        Var::new(26);
    }

    #[test]
    fn test_insert_remove() {
        let a = Var::new(0);
        let mut set = VarSet::empty();
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert!(set.contains(a));
        assert_eq!(set.len(), 1);
        assert!(set.remove(a));
        assert!(!set.remove(a));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_in_letter_order() {
        let set: VarSet = "ZTCA".chars().filter_map(Var::from_letter).collect();
        let letters: String = set.iter().map(Var::letter).collect();
        assert_eq!(letters, "ACTZ");
        assert_eq!(set.to_string(), "{A, C, T, Z}");
    }

    #[test]
    fn test_free_drops_constants() {
        let set: VarSet = "ATF".chars().filter_map(Var::from_letter).collect();
        assert_eq!(set.free(), VarSet::empty().with(Var::new(0)));
    }

    #[test]
    fn test_msb_first_roundtrip() {
        let a = VarSet::empty().with(Var::new(0));
        assert_eq!(a.to_msb_first(), 1 << 25);
        let z = VarSet::empty().with(Var::new(25));
        assert_eq!(z.to_msb_first(), 1);
        let set = VarSet::from_bits(0x2a5_5aa5);
        assert_eq!(VarSet::from_msb_first(set.to_msb_first()), set);
    }

    #[test]
    fn test_complement() {
        assert_eq!(!VarSet::empty(), VarSet::all());
        assert_eq!(VarSet::all().len(), NUM_VARS);
    }
}
