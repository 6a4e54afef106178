//! Splitting ordered buckets into navigable index pages.

use super::bucket::Bucket;
use super::error::{IndexError, IndexResult};
use serde::{Deserialize, Serialize};

/// Whether the index is emitted as one page or one page per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    #[default]
    Combined,
    Split,
}

/// One unit of index output.
///
/// In split mode a page holds exactly one bucket and `key` is that bucket's
/// key; the combined page holds every bucket and has no key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'m> {
    /// 1-based position in the page chain
    pub number: usize,
    pub key: Option<char>,
    pub buckets: Vec<Bucket<'m>>,
    pub previous: Option<char>,
    pub next: Option<char>,
}

impl Page<'_> {
    pub fn symbol_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    mode: IndexMode,
}

impl Paginator {
    pub fn new(mode: IndexMode) -> Self {
        Self { mode }
    }

    /// Turn buckets into pages.
    ///
    /// Fails with [`IndexError::EmptyIndex`] when split pages are requested for
    /// no buckets at all; a combined index over nothing is one empty page.
    pub fn paginate<'m>(&self, buckets: Vec<Bucket<'m>>) -> IndexResult<Vec<Page<'m>>> {
        match self.mode {
            IndexMode::Combined => Ok(vec![Page {
                number: 1,
                key: None,
                buckets,
                previous: None,
                next: None,
            }]),
            IndexMode::Split => {
                if buckets.is_empty() {
                    return Err(IndexError::EmptyIndex);
                }

                let keys: Vec<char> = buckets.iter().map(|b| b.key).collect();
                let pages: Vec<Page<'m>> = buckets
                    .into_iter()
                    .enumerate()
                    .map(|(i, bucket)| Page {
                        number: i + 1,
                        key: Some(bucket.key),
                        previous: i.checked_sub(1).map(|prev| keys[prev]),
                        next: keys.get(i + 1).copied(),
                        buckets: vec![bucket],
                    })
                    .collect();

                crate::debug_event!("index", "paginated", "{} split pages", pages.len());
                Ok(pages)
            }
        }
    }
}
