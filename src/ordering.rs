//! Comparison rules shared by index buckets and hierarchy children.
//!
//! Names compare case-insensitively. What happens when two names are equal is
//! a policy decision ([`TieBreak`]); whatever the policy leaves undecided is
//! settled by input order, since every sort in this crate is stable.

use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How to order symbols whose names compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep input order.
    Stable,
    /// Packages, then types, then members.
    Kind,
    /// Kind, then enclosing container, then non-executables before
    /// executables, then executable signature.
    #[default]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderingPolicy {
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl OrderingPolicy {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Total order over symbols, minus input order (left to a stable sort).
    pub fn compare(&self, a: &Symbol, b: &Symbol) -> Ordering {
        let by_name = compare_names(&a.name, &b.name);
        if by_name != Ordering::Equal || self.tie_break == TieBreak::Stable {
            return by_name;
        }

        let by_kind = a.kind.rank().cmp(&b.kind.rank());
        if by_kind != Ordering::Equal || self.tie_break == TieBreak::Kind {
            return by_kind;
        }

        compare_optional(a.container.as_deref(), b.container.as_deref(), compare_names)
            // Fields and constants before methods and constructors
            .then_with(|| a.kind.is_executable().cmp(&b.kind.is_executable()))
            .then_with(|| {
                if a.kind.is_executable() && b.kind.is_executable() {
                    compare_optional(
                        a.signature.as_deref(),
                        b.signature.as_deref(),
                        compare_signatures,
                    )
                } else {
                    Ordering::Equal
                }
            })
    }

    /// Stable in-place sort of symbol references.
    pub fn sort(&self, symbols: &mut [&Symbol]) {
        symbols.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive comparison of two names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compare parameter lists so that `()` < `(int)` < `(int, int)` < `(int...)`.
///
/// A closing parenthesis sorts before a separator, which sorts before array
/// and varargs punctuation, which sorts before everything else.
pub fn compare_signatures(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .map(signature_key)
        .cmp(b.chars().flat_map(char::to_lowercase).map(signature_key))
}

fn signature_key(c: char) -> (u8, char) {
    let class = match c {
        ')' => 0,
        ',' => 1,
        '.' | '[' => 2,
        _ => 3,
    };
    // '.' and '[' share a class and collate equal
    let c = if class == 2 { '.' } else { c };
    (class, c)
}

/// Present values sort before absent ones.
fn compare_optional(
    a: Option<&str>,
    b: Option<&str>,
    compare: fn(&str, &str) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
