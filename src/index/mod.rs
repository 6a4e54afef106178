//! Index partitioning engine.
//!
//! Two steps, both pure functions of their input:
//!
//! 1. [`NameBucketer`] groups documented symbols by the upper-cased first
//!    character of their name and orders each group.
//! 2. [`Paginator`] turns the ordered buckets into one combined page or a
//!    chain of per-letter pages linked by previous/next keys.
//!
//! An empty bucket list means there is nothing to index; callers should skip
//! the index altogether rather than emit a split index with no pages.

mod bucket;
mod error;
mod paginate;

pub use bucket::{Bucket, IndexPartition, NameBucketer, bucket_key};
pub use error::{IndexError, IndexResult};
pub use paginate::{IndexMode, Page, Paginator};
