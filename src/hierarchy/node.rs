use crate::symbol::Symbol;
use crate::types::{SymbolId, SymbolKind};
use serde::Serialize;

/// One symbol in an inheritance tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode<'m> {
    pub symbol: &'m Symbol,

    /// Documented superinterfaces other than the tree parent
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<&'m Symbol>,

    pub children: Vec<HierarchyNode<'m>>,
}

impl<'m> HierarchyNode<'m> {
    pub fn id(&self) -> SymbolId {
        self.symbol.id
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// All trees of one kind, ordered by root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forest<'m> {
    pub kind: SymbolKind,
    pub roots: Vec<HierarchyNode<'m>>,
}

impl<'m> Forest<'m> {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(|root| 1 + root.descendant_count()).sum()
    }

    /// Depth-first, pre-order walk yielding `(depth, node)`; roots have depth 0.
    pub fn walk(&self) -> Walk<'_, 'm> {
        Walk {
            stack: self.roots.iter().rev().map(|root| (0, root)).collect(),
        }
    }

    pub fn find(&self, id: SymbolId) -> Option<&HierarchyNode<'m>> {
        self.walk().map(|(_, node)| node).find(|node| node.id() == id)
    }

    /// Tree parent of a symbol, `None` for roots and unknown ids.
    pub fn parent_of(&self, id: SymbolId) -> Option<&'m Symbol> {
        self.walk()
            .map(|(_, node)| node)
            .find(|node| node.children.iter().any(|child| child.id() == id))
            .map(|node| node.symbol)
    }
}

pub struct Walk<'a, 'm> {
    stack: Vec<(usize, &'a HierarchyNode<'m>)>,
}

impl<'a, 'm> Iterator for Walk<'a, 'm> {
    type Item = (usize, &'a HierarchyNode<'m>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
