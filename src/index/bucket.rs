//! Grouping of indexable names by normalized first character.

use crate::ordering::OrderingPolicy;
use crate::symbol::Symbol;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Symbols sharing one normalized first character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<'m> {
    pub key: char,
    pub symbols: Vec<&'m Symbol>,
}

impl<'m> Bucket<'m> {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'m Symbol> + '_ {
        self.symbols.iter().copied()
    }
}

/// Result of bucketing, including the symbols no bucket can hold.
#[derive(Debug, Default, Clone, Serialize)]
pub struct IndexPartition<'m> {
    pub buckets: Vec<Bucket<'m>>,

    /// Documented symbols with an empty name (the unnamed scope)
    pub unnamed: Vec<&'m Symbol>,
}

impl IndexPartition<'_> {
    /// Number of bucketed symbols.
    pub fn symbol_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

/// Bucket key for a name: its first character, upper-cased.
///
/// The character is first mapped to lower case so that both cases of a letter
/// share a key. Letters whose upper-case form is more than one character
/// (e.g. `ß` and `ẞ`) use that lower-case form, so a key is always a single
/// character.
pub fn bucket_key(name: &str) -> Option<char> {
    let first = name.chars().next()?;
    let lower = single(first.to_lowercase()).unwrap_or(first);
    Some(single(lower.to_uppercase()).unwrap_or(lower))
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NameBucketer {
    policy: OrderingPolicy,
}

impl NameBucketer {
    pub fn new(policy: OrderingPolicy) -> Self {
        Self { policy }
    }

    /// Group documented, named symbols into buckets ordered by key.
    pub fn bucket<'m>(&self, symbols: impl IntoIterator<Item = &'m Symbol>) -> Vec<Bucket<'m>> {
        self.partition(symbols).buckets
    }

    /// Like [`bucket`](Self::bucket), but also hands back the unnamed-scope
    /// symbols so callers can list them separately.
    pub fn partition<'m>(&self, symbols: impl IntoIterator<Item = &'m Symbol>) -> IndexPartition<'m> {
        let mut seen = HashSet::new();
        let mut groups: BTreeMap<char, Vec<&'m Symbol>> = BTreeMap::new();
        let mut unnamed = Vec::new();
        let mut skipped = 0usize;

        for symbol in symbols {
            if !symbol.documented {
                skipped += 1;
                continue;
            }
            if !seen.insert(symbol.id) {
                continue;
            }
            match bucket_key(&symbol.name) {
                Some(key) => groups.entry(key).or_default().push(symbol),
                None => unnamed.push(symbol),
            }
        }

        let mut buckets: Vec<Bucket<'m>> = groups
            .into_iter()
            .map(|(key, symbols)| Bucket { key, symbols })
            .collect();

        let policy = self.policy;
        buckets
            .par_iter_mut()
            .for_each(|bucket| policy.sort(&mut bucket.symbols));

        crate::debug_event!(
            "index",
            "bucketed",
            "{} buckets, {} unnamed, {} undocumented skipped",
            buckets.len(),
            unnamed.len(),
            skipped
        );

        IndexPartition { buckets, unnamed }
    }
}
