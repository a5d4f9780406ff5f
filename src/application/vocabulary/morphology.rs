//! Suffix-stripping normalizer that reduces a cleaned token to its base form.
//!
//! Rules form an ordered table; the first rule that fires produces the result
//! and nothing is applied a second time. Suffix checks are case-sensitive on
//! the token as given, and all lengths are counted in characters. Case is
//! preserved here, callers lower-case the result.

use super::config::{SIBILANT_ENDINGS, VOWELS};
use super::exclusions::is_excluded;

struct Word<'a> {
    text: &'a str,
    lower: String,
    chars: Vec<char>,
    /// The apostrophe style used by this token: ’ if present anywhere, else '.
    ap: char,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        let ap = if text.contains('’') { '’' } else { '\'' };
        Self {
            text,
            lower: text.to_lowercase(),
            chars: text.chars().collect(),
            ap,
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    /// `head` + apostrophe + `tail`, in this token's apostrophe style.
    fn contraction(&self, head: &str, tail: &str) -> String {
        format!("{head}{}{tail}", self.ap)
    }

    fn ends_with_contraction(&self, head: &str, tail: &str) -> bool {
        self.ends_with(&self.contraction(head, tail))
    }

    fn drop_last(&self, n: usize) -> String {
        self.chars[..self.len() - n].iter().collect()
    }

    fn replace_last(&self, n: usize, with: &str) -> String {
        let mut out = self.drop_last(n);
        out.push_str(with);
        out
    }
}

type Rule = fn(&Word<'_>) -> Option<String>;

const RULES: &[(&str, Rule)] = &[
    ("possessive-or-short-verb", short_contraction),
    ("plural-possessive", plural_possessive),
    ("long-contraction", long_contraction),
    ("can't-won't", irregular_negation),
    ("negation", negation),
    ("exclusion", exclusion),
    ("ies", ies_plural),
    ("ves", ves_plural),
    ("ses-hes-xes", sibilant_plural),
    ("s", plain_plural),
];

// 's 'm 'd
fn short_contraction(w: &Word<'_>) -> Option<String> {
    ["s", "m", "d"]
        .iter()
        .any(|tail| w.ends_with_contraction("", tail))
        .then(|| w.drop_last(2))
}

// dogs'
fn plural_possessive(w: &Word<'_>) -> Option<String> {
    w.ends_with_contraction("s", "").then(|| w.drop_last(1))
}

// 've 're 'll
fn long_contraction(w: &Word<'_>) -> Option<String> {
    ["ve", "re", "ll"]
        .iter()
        .any(|tail| w.ends_with_contraction("", tail))
        .then(|| w.drop_last(3))
}

fn irregular_negation(w: &Word<'_>) -> Option<String> {
    let t = w.contraction("", "t");
    let irregular = w.lower == w.contraction("can", "t") || w.lower == w.contraction("won", "t");
    (w.ends_with(&t) && irregular).then(|| w.text.replace(&t, ""))
}

fn negation(w: &Word<'_>) -> Option<String> {
    let nt = w.contraction("n", "t");
    w.ends_with(&nt).then(|| w.text.replace(&nt, ""))
}

fn exclusion(w: &Word<'_>) -> Option<String> {
    is_excluded(&w.lower).then(|| w.text.to_string())
}

fn ies_plural(w: &Word<'_>) -> Option<String> {
    (w.ends_with("ies") && w.len() > 3).then(|| w.replace_last(3, "y"))
}

fn ves_plural(w: &Word<'_>) -> Option<String> {
    if !(w.ends_with("ves") && w.len() > 3) {
        return None;
    }
    let before = w.chars[w.len() - 4];
    let ending = if VOWELS.contains(before) { "fe" } else { "f" };
    Some(w.replace_last(3, ending))
}

fn sibilant_plural(w: &Word<'_>) -> Option<String> {
    SIBILANT_ENDINGS
        .iter()
        .any(|ending| w.ends_with(ending))
        .then(|| w.drop_last(2))
}

fn plain_plural(w: &Word<'_>) -> Option<String> {
    (w.ends_with("s") && w.len() > 2).then(|| w.drop_last(1))
}

/// Reduce a non-empty cleaned token to its base form (case preserved).
pub fn normalize(token: &str) -> String {
    let word = Word::new(token);
    for (name, rule) in RULES {
        if let Some(base) = rule(&word) {
            log::trace!("morph rule={} {} -> {}", name, token, base);
            return base;
        }
    }
    token.to_string()
}
