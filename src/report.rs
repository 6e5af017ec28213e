//! Text report: truth table, CNF/DNF summary and annotated errors.
//!
//! ```text
//! | A | B | A ∧ B |
//! | T | T |   T   |
//! | T | F |   F   |
//! | F | T |   F   |
//! | F | F |   F   |
//! CNF: 0, 1, 2
//! DNF: 0
//! ```

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::parser::parse;
use crate::render::{render, Glyphs, Rendered};
use crate::table::TruthTable;

/// Everything needed to print the result for one expression.
#[derive(Debug, Clone)]
pub struct Report {
    pub rendered: Rendered,
    pub table: TruthTable,
}

impl Report {
    /// Parses `line`, renders it and builds its truth table.
    pub fn new(line: &str, glyphs: &Glyphs) -> Result<Self> {
        let parsed = parse(line)?;
        let rendered = render(&parsed.tokens, glyphs);
        let table = TruthTable::build(&parsed.expr, parsed.vars)?;
        Ok(Report { rendered, table })
    }

    /// Writes the header and one line per row.
    pub fn write_table<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "|")?;
        for var in self.table.columns() {
            write!(w, " {} |", var)?;
        }
        writeln!(w, " {} |", self.rendered.text)?;

        // Centre the result under the expression.
        let right = self.rendered.width.saturating_sub(1) / 2;
        let left = self.rendered.width.saturating_sub(1) - right;
        for row in self.table.rows() {
            write!(w, "|")?;
            for var in self.table.columns() {
                write!(w, " {} |", letter(row.assignment.contains(var)))?;
            }
            writeln!(
                w,
                " {:left$}{}{:right$} |",
                "",
                letter(row.value),
                "",
                left = left,
                right = right
            )?;
        }
        Ok(())
    }

    /// Writes the `CNF:` and `DNF:` lines.
    pub fn write_summary<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write_indices(w, "CNF", self.table.cnf())?;
        write_indices(w, "DNF", self.table.dnf())
    }

    /// Writes the full report: table followed by the summary.
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.write_table(w)?;
        self.write_summary(w)
    }
}

fn letter(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

fn write_indices<W: Write>(w: &mut W, label: &str, indices: impl Iterator<Item = usize>) -> io::Result<()> {
    write!(w, "{}:", label)?;
    for (n, i) in indices.enumerate() {
        if n == 0 {
            write!(w, " {}", i)?;
        } else {
            write!(w, ", {}", i)?;
        }
    }
    writeln!(w)
}

/// Writes the input line, a caret under the offending character, and the message.
pub fn write_error<W: Write>(w: &mut W, line: &str, error: &Error) -> io::Result<()> {
    writeln!(w, "{}", line)?;
    writeln!(w, "{:width$}^", "", width = error.position)?;
    writeln!(w, "{}", error.kind)
}
