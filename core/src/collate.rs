//! Locale-aware string ordering for sorting comment names.
//!
//! # Design
//! Both strings are canonically decomposed (NFD) first, so precomposed and
//! decomposed spellings of the same text compare equal. Each base character
//! becomes one collation element; combining marks that follow it attach to
//! that element instead of standing on their own. Elements are compared at
//! three levels, each consulted only when every earlier level ties:
//!
//! 1. primary: character class (whitespace, punctuation and symbols, digits,
//!    letters) then the lowercased base character
//! 2. secondary: the attached marks; no marks sorts before any mark
//! 3. tertiary: lowercase before uppercase
//!
//! A final comparison of the decomposed code points makes the order total
//! over canonically distinct strings.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punct,
    Digit,
    Letter,
}

#[derive(Debug, Clone)]
struct Element {
    primary: (Class, char),
    marks: Vec<char>,
    upper: bool,
}

fn weigh(c: char) -> Element {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = fold_stroke(lower);
    let class = if c.is_whitespace() {
        Class::Space
    } else if c.is_numeric() {
        Class::Digit
    } else if c.is_alphabetic() {
        Class::Letter
    } else {
        Class::Punct
    };
    Element {
        primary: (class, base),
        // A stroked letter keeps itself as a secondary mark so it still
        // sorts after its plain base letter.
        marks: if base == lower { Vec::new() } else { vec![lower] },
        upper: c != lower,
    }
}

/// Letters with a stroke or slash have no canonical decomposition.
fn fold_stroke(c: char) -> char {
    match c {
        'ø' => 'o',
        'đ' => 'd',
        'ł' => 'l',
        'ħ' => 'h',
        'ŧ' => 't',
        _ => c,
    }
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        out.push(weigh(c));
    }
    out
}

/// Compare two strings in collation order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let ea = elements(a);
    let eb = elements(b);

    ea.iter()
        .map(|e| e.primary)
        .cmp(eb.iter().map(|e| e.primary))
        .then_with(|| ea.iter().map(|e| &e.marks).cmp(eb.iter().map(|e| &e.marks)))
        .then_with(|| ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper)))
        .then_with(|| a.nfd().cmp(b.nfd()))
}
