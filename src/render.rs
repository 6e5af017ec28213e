//! Canonical rendering of a token stream.
//!
//! The renderer works on tokens rather than on the tree, so brackets are kept
//! exactly as written while spacing and operator spelling are normalized:
//!
//! ```
//! use proptable::parser::parse;
//! use proptable::render::{render, Glyphs};
//!
//! let parsed = parse("(a^b)  ~!c").unwrap();
//! let rendered = render(&parsed.tokens, &Glyphs::UNICODE);
//! assert_eq!(rendered.text, "(A → B) ↔ ¬C");
//! assert_eq!(rendered.width, 12);
//! ```

use crate::ast::BinaryOp;
use crate::token::Token;

/// Operator spellings used by the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Glyphs {
    pub not: char,
    pub and: char,
    pub or: char,
    pub imply: char,
    pub iff: char,
}

impl Glyphs {
    /// Logic notation: `¬ ∧ ∨ → ↔`.
    pub const UNICODE: Glyphs = Glyphs {
        not: '¬',
        and: '∧',
        or: '∨',
        imply: '→',
        iff: '↔',
    };

    /// The input alphabet itself: `! & | > =`. Renderings with these glyphs parse back.
    pub const ASCII: Glyphs = Glyphs {
        not: '!',
        and: '&',
        or: '|',
        imply: '>',
        iff: '=',
    };

    pub fn binary(&self, op: BinaryOp) -> char {
        match op {
            BinaryOp::And => self.and,
            BinaryOp::Or => self.or,
            BinaryOp::Imply => self.imply,
            BinaryOp::Iff => self.iff,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::UNICODE
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rendered {
    pub text: String,
    /// Display width in terminal columns. Every glyph occupies one column.
    pub width: usize,
}

/// Renders tokens left to right. Binary operators get one space on each side.
pub fn render(tokens: &[Token], glyphs: &Glyphs) -> Rendered {
    let mut text = String::with_capacity(tokens.len() * 3);
    let mut width = 0;
    for &token in tokens {
        match token {
            Token::LeftBracket => {
                text.push('(');
                width += 1;
            }
            Token::RightBracket => {
                text.push(')');
                width += 1;
            }
            Token::Not => {
                text.push(glyphs.not);
                width += 1;
            }
            Token::Var(var) => {
                text.push(var.letter());
                width += 1;
            }
            Token::End => {}
            op => {
                if let Some(op) = op.as_binary() {
                    text.push(' ');
                    text.push(glyphs.binary(op));
                    text.push(' ');
                    width += 3;
                }
            }
        }
    }
    Rendered { text, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::parse;

    fn unicode(input: &str) -> Rendered {
        render(&parse(input).unwrap().tokens, &Glyphs::UNICODE)
    }

    #[test]
    fn test_render_and() {
        let r = unicode("a&b");
        assert_eq!(r.text, "A ∧ B");
        assert_eq!(r.width, 5);
    }

    #[test]
    fn test_render_all_operators() {
        let r = unicode("!a & b | c > d = e");
        assert_eq!(r.text, "¬A ∧ B ∨ C → D ↔ E");
        assert_eq!(r.width, 18);
    }

    #[test]
    fn test_render_keeps_brackets() {
        let r = unicode("((a))");
        assert_eq!(r.text, "((A))");
        assert_eq!(r.width, 5);
    }

    #[test]
    fn test_width_counts_chars() {
        for input in ["A", "!(A | B)", "A = B ^ C ~ !D", "(T & F) | x"] {
            let r = unicode(input);
            assert_eq!(r.width, r.text.chars().count(), "{}", input);
        }
    }

    #[test]
    fn test_render_ascii() {
        let r = render(&parse("a ^ b ~ !c").unwrap().tokens, &Glyphs::ASCII);
        assert_eq!(r.text, "A > B = !C");
        assert_eq!(r.width, 10);
    }

    #[test]
    fn test_render_empty() {
        let r = render(&[], &Glyphs::default());
        assert_eq!(r.text, "");
        assert_eq!(r.width, 0);
    }
}
