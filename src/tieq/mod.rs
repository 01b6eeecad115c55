//! Tiếq Việt: a phonetic respelling of Vietnamese.
//!
//! The respelling is an ordered list of regex rewrites. Each rule runs over
//! the whole output of the previous one, so digraphs such as `ch`, `tr`,
//! `gi`, `ng` or `nh` are consumed before the single-letter rules that would
//! otherwise split them. Rule order must not change.
//!
//! Non-Vietnamese input is rewritten just the same; callers decide when to
//! apply it.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Display name of the respelled "language".
pub const TIEQ_VIET: &str = "Tiếq Việt";

/// How a rule rewrites each match.
#[derive(Debug, Clone, Copy)]
enum Rewrite {
    /// A regex replacement template (`$1` refers to a capture group).
    Template(&'static str),
    /// Leave the match untouched when the named group took part in it,
    /// otherwise replace it with the literal. Stands in for a negative
    /// look-ahead, which the `regex` crate does not support.
    Unless {
        guard: &'static str,
        with: &'static str,
    },
}

#[derive(Debug)]
struct Rule {
    pattern: Regex,
    rewrite: Rewrite,
}

impl Rule {
    fn apply(&self, text: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(text, template).into_owned(),
            Rewrite::Unless { guard, with } => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    if caps.name(guard).is_some() {
                        caps[0].to_string()
                    } else {
                        with.to_string()
                    }
                })
                .into_owned(),
        }
    }
}

const RULE_TABLE: &[(&str, Rewrite)] = &[
    (
        r"c(?P<h>[hH])?|q",
        Rewrite::Unless {
            guard: "h",
            with: "k",
        },
    ),
    (
        r"C(?P<h>[hH])?|Q",
        Rewrite::Unless {
            guard: "h",
            with: "K",
        },
    ),
    (r"c[hH]|t[rR]", Rewrite::Template("c")),
    (r"C[hH]|T[rR]", Rewrite::Template("C")),
    (r"d|g[iI]|r", Rewrite::Template("z")),
    (r"D|G[iI]|R", Rewrite::Template("Z")),
    (r"g(i|í|ì|ĩ|ỉ|ị)", Rewrite::Template("z${1}")),
    (r"G(i|í|ì|ĩ|ỉ|ị)", Rewrite::Template("Z${1}")),
    (r"Đ", Rewrite::Template("D")),
    (r"đ", Rewrite::Template("d")),
    (r"G[hH]", Rewrite::Template("G")),
    (r"g[hH]", Rewrite::Template("g")),
    (r"p[hH]", Rewrite::Template("f")),
    (r"P[hH]", Rewrite::Template("F")),
    (r"n[gG][hH]?", Rewrite::Template("q")),
    (r"N[gG][hH]?", Rewrite::Template("Q")),
    (r"k[hH]", Rewrite::Template("x")),
    (r"K[hH]", Rewrite::Template("X")),
    (r"t[hH]", Rewrite::Template("w")),
    (r"T[hH]", Rewrite::Template("W")),
    (r"n[hH]", Rewrite::Template("n'")),
    (r"N[hH]", Rewrite::Template("N'")),
];

#[allow(clippy::unwrap_used)]
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, rewrite)| Rule {
            // unwrap is safe: every pattern is a compile-time constant
            pattern: Regex::new(pattern).unwrap(),
            rewrite,
        })
        .collect()
});

/// Respells Vietnamese text as Tiếq Việt.
///
/// ```
/// use tieq_cli::tieq::tieq_viet;
///
/// assert_eq!(tieq_viet("Tiếng Việt"), "Tiếq Việt");
/// ```
pub fn tieq_viet(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
