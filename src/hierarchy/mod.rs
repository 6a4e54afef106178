//! Inheritance forests for classes, interfaces, enums and annotation types.
//!
//! Each tree-eligible kind gets an independent [`Forest`]. A symbol's parent is
//! its nearest documented ancestor of the same kind; symbols without one are
//! roots. Every documented symbol of the kind appears exactly once.

mod builder;
mod error;
mod node;

pub use builder::HierarchyBuilder;
pub use error::{HierarchyError, HierarchyResult};
pub use node::{Forest, HierarchyNode, Walk};
