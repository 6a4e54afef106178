use super::error::{HierarchyError, HierarchyResult};
use super::node::{Forest, HierarchyNode};
use crate::model::SymbolModel;
use crate::ordering::OrderingPolicy;
use crate::symbol::Symbol;
use crate::types::{SymbolId, SymbolKind};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Builds inheritance forests over a symbol model.
///
/// Ancestor chains are walked through the whole model, so undocumented
/// symbols never appear in a forest but still connect the symbols that do.
///
/// Interfaces may extend several interfaces, but a forest is a tree: each
/// interface is placed under exactly one parent, the first documented
/// superinterface in declaration order. The remaining documented
/// superinterfaces are reported in [`HierarchyNode::implements`].
pub struct HierarchyBuilder<'m> {
    model: &'m SymbolModel,
    policy: OrderingPolicy,
}

impl<'m> HierarchyBuilder<'m> {
    pub fn new(model: &'m SymbolModel, policy: OrderingPolicy) -> Self {
        Self { model, policy }
    }

    /// Build the forest of `kind` over the documented symbols in `symbols`.
    pub fn build_forest(
        &self,
        symbols: &[&'m Symbol],
        kind: SymbolKind,
    ) -> HierarchyResult<Forest<'m>> {
        if !kind.is_tree_eligible() {
            return Err(HierarchyError::InvalidKindFilter { kind });
        }

        let mut members = HashSet::new();
        let participants: Vec<&'m Symbol> = symbols
            .iter()
            .copied()
            .filter(|s| s.documented && s.kind == kind && members.insert(s.id))
            .collect();

        let mut roots = Vec::new();
        let mut children: HashMap<SymbolId, Vec<&'m Symbol>> = HashMap::new();
        let mut implements: HashMap<SymbolId, Vec<&'m Symbol>> = HashMap::new();

        for &symbol in &participants {
            let parent = if kind.inherits_by_interface() {
                self.resolve_interface_parent(symbol, &members)?
            } else {
                self.resolve_class_parent(symbol, &members)?
            };

            let others: Vec<&'m Symbol> = self
                .visible_superinterfaces(symbol)
                .into_iter()
                .filter(|s| Some(s.id) != parent)
                .collect();
            if !others.is_empty() {
                implements.insert(symbol.id, others);
            }

            match parent {
                Some(parent) => children.entry(parent).or_default().push(symbol),
                None => roots.push(symbol),
            }
        }

        self.policy.sort(&mut roots);
        for siblings in children.values_mut() {
            self.policy.sort(siblings);
        }

        let roots: Vec<HierarchyNode<'m>> = roots
            .into_iter()
            .map(|root| assemble(root, &mut children, &mut implements))
            .collect();

        crate::debug_event!(
            "hierarchy",
            "built",
            "{kind}: {} symbols under {} roots",
            participants.len(),
            roots.len()
        );

        Ok(Forest { kind, roots })
    }

    /// Build one forest per kind, in the order given.
    ///
    /// When `parallel` is set the forests are computed on the rayon pool; the
    /// result, including which error is reported, matches sequential order.
    pub fn build_forests(
        &self,
        symbols: &[&'m Symbol],
        kinds: &[SymbolKind],
        parallel: bool,
    ) -> HierarchyResult<Vec<Forest<'m>>> {
        let results: Vec<HierarchyResult<Forest<'m>>> = if parallel {
            kinds
                .par_iter()
                .map(|&kind| self.build_forest(symbols, kind))
                .collect()
        } else {
            kinds
                .iter()
                .map(|&kind| self.build_forest(symbols, kind))
                .collect()
        };
        results.into_iter().collect()
    }

    /// Nearest participating ancestor along the superclass chain.
    ///
    /// The whole chain is walked even after a parent is found, so a cycle
    /// anywhere above the symbol is reported instead of producing a forest
    /// that silently drops symbols.
    fn resolve_class_parent(
        &self,
        symbol: &'m Symbol,
        members: &HashSet<SymbolId>,
    ) -> HierarchyResult<Option<SymbolId>> {
        let mut visited = HashSet::from([symbol.id]);
        let mut parent = None;
        let mut current = symbol.superclass;

        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(self.cycle_at(id, symbol));
            }
            let Some(ancestor) = self.model.get(id) else {
                break;
            };
            if parent.is_none() && members.contains(&id) {
                parent = Some(id);
            }
            current = ancestor.superclass;
        }

        Ok(parent)
    }

    /// First participating direct superinterface, else the first one reached
    /// depth-first through non-participating superinterfaces.
    fn resolve_interface_parent(
        &self,
        symbol: &'m Symbol,
        members: &HashSet<SymbolId>,
    ) -> HierarchyResult<Option<SymbolId>> {
        self.check_interface_cycles(symbol)?;

        if let Some(&direct) = symbol.superinterfaces.iter().find(|id| members.contains(id)) {
            return Ok(Some(direct));
        }

        let mut seen = HashSet::new();
        let mut stack: Vec<SymbolId> = symbol.superinterfaces.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if members.contains(&id) {
                return Ok(Some(id));
            }
            if let Some(ancestor) = self.model.get(id) {
                stack.extend(ancestor.superinterfaces.iter().rev().copied());
            }
        }

        Ok(None)
    }

    /// Depth-first search over superinterfaces tracking the current path.
    ///
    /// Diamonds are fine; only an id that reappears on its own path is a cycle.
    fn check_interface_cycles(&self, symbol: &'m Symbol) -> HierarchyResult<()> {
        let mut on_path = HashSet::from([symbol.id]);
        let mut done = HashSet::new();
        let mut stack: Vec<(&'m Symbol, usize)> = vec![(symbol, 0)];

        while let Some(top) = stack.last_mut() {
            let current = top.0;
            let next = current.superinterfaces.get(top.1).copied();
            top.1 += 1;

            match next {
                Some(id) if on_path.contains(&id) => return Err(self.cycle_at(id, symbol)),
                Some(id) if done.contains(&id) => {}
                Some(id) => {
                    if let Some(ancestor) = self.model.get(id) {
                        on_path.insert(id);
                        stack.push((ancestor, 0));
                    }
                }
                None => {
                    stack.pop();
                    on_path.remove(&current.id);
                    done.insert(current.id);
                }
            }
        }

        Ok(())
    }

    /// Documented superinterfaces, looking through undocumented ones.
    fn visible_superinterfaces(&self, symbol: &'m Symbol) -> Vec<&'m Symbol> {
        let mut visible = Vec::new();
        let mut seen = HashSet::from([symbol.id]);
        let mut stack: Vec<SymbolId> = symbol.superinterfaces.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let Some(ancestor) = self.model.get(id) else {
                continue;
            };
            if ancestor.documented {
                visible.push(ancestor);
            } else {
                stack.extend(ancestor.superinterfaces.iter().rev().copied());
            }
        }

        visible
    }

    fn cycle_at(&self, id: SymbolId, start: &Symbol) -> HierarchyError {
        let name = match self.model.get(id) {
            Some(symbol) => symbol.qualified_name(),
            None => start.qualified_name(),
        };
        tracing::warn!("[hierarchy] cycle through '{name}' while resolving '{}'", start.name);
        HierarchyError::CyclicHierarchy { id, name }
    }
}

fn assemble<'m>(
    symbol: &'m Symbol,
    children: &mut HashMap<SymbolId, Vec<&'m Symbol>>,
    implements: &mut HashMap<SymbolId, Vec<&'m Symbol>>,
) -> HierarchyNode<'m> {
    let kids = children.remove(&symbol.id).unwrap_or_default();
    HierarchyNode {
        symbol,
        implements: implements.remove(&symbol.id).unwrap_or_default(),
        children: kids
            .into_iter()
            .map(|child| assemble(child, children, implements))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u32) -> SymbolId {
        SymbolId::new(v).unwrap()
    }

    fn class(v: u32, name: &str) -> Symbol {
        Symbol::new(id(v), name, SymbolKind::Class)
    }

    fn interface(v: u32, name: &str) -> Symbol {
        Symbol::new(id(v), name, SymbolKind::Interface)
    }

    fn forest_of(model: &SymbolModel, kind: SymbolKind) -> HierarchyResult<Forest<'_>> {
        let documented = model.documented();
        HierarchyBuilder::new(model, OrderingPolicy::default()).build_forest(&documented, kind)
    }

    #[test]
    fn test_undocumented_middle_is_skipped() {
        let model = SymbolModel::new(vec![
            class(1, "Root"),
            class(2, "Mid").with_superclass(id(1)).undocumented(),
            class(3, "Leaf").with_superclass(id(2)),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Class).unwrap();

        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.roots[0].symbol.as_name(), "Root");
        assert_eq!(forest.roots[0].children.len(), 1);
        assert_eq!(forest.roots[0].children[0].symbol.as_name(), "Leaf");
        assert!(forest.find(id(2)).is_none());
    }

    #[test]
    fn test_external_superclass_makes_root() {
        let model = SymbolModel::new(vec![class(1, "Local").with_superclass(id(99))]).unwrap();

        let forest = forest_of(&model, SymbolKind::Class).unwrap();
        assert_eq!(forest.roots.len(), 1);
        assert!(forest.roots[0].is_leaf());
    }

    #[test]
    fn test_children_sorted_case_insensitively() {
        let model = SymbolModel::new(vec![
            class(1, "Base"),
            class(2, "zebra").with_superclass(id(1)),
            class(3, "Apple").with_superclass(id(1)),
            class(4, "mango").with_superclass(id(1)),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Class).unwrap();
        let names: Vec<_> = forest.roots[0]
            .children
            .iter()
            .map(|n| n.symbol.as_name())
            .collect();
        assert_eq!(names, vec!["Apple", "mango", "zebra"]);
    }

    #[test]
    fn test_first_documented_superinterface_is_parent() {
        let model = SymbolModel::new(vec![
            interface(1, "I1"),
            interface(2, "I2"),
            interface(3, "Both").with_superinterfaces([id(1), id(2)]),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Interface).unwrap();

        assert_eq!(forest.parent_of(id(3)).map(|s| s.id), Some(id(1)));
        let node = forest.find(id(3)).unwrap();
        let implemented: Vec<_> = node.implements.iter().map(|s| s.id).collect();
        assert_eq!(implemented, vec![id(2)]);
        assert_eq!(forest.node_count(), 3);
    }

    #[test]
    fn test_undocumented_first_superinterface_falls_to_next() {
        let model = SymbolModel::new(vec![
            interface(1, "Hidden").undocumented(),
            interface(2, "Shown"),
            interface(3, "Sub").with_superinterfaces([id(1), id(2)]),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Interface).unwrap();
        assert_eq!(forest.parent_of(id(3)).map(|s| s.id), Some(id(2)));
    }

    #[test]
    fn test_interface_parent_through_undocumented_chain() {
        let model = SymbolModel::new(vec![
            interface(1, "Top"),
            interface(2, "Hidden").with_superinterfaces([id(1)]).undocumented(),
            interface(3, "Bottom").with_superinterfaces([id(2)]),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Interface).unwrap();
        assert_eq!(forest.parent_of(id(3)).map(|s| s.id), Some(id(1)));
    }

    #[test]
    fn test_interface_diamond_is_not_a_cycle() {
        let model = SymbolModel::new(vec![
            interface(1, "Top"),
            interface(2, "Left").with_superinterfaces([id(1)]),
            interface(3, "Right").with_superinterfaces([id(1)]),
            interface(4, "Bottom").with_superinterfaces([id(2), id(3)]),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Interface).unwrap();
        assert_eq!(forest.node_count(), 4);
        assert_eq!(forest.parent_of(id(4)).map(|s| s.id), Some(id(2)));
    }

    #[test]
    fn test_class_cycle_detected() {
        let model = SymbolModel::new(vec![
            class(1, "A").with_superclass(id(2)),
            class(2, "B").with_superclass(id(1)),
        ])
        .unwrap();

        let err = forest_of(&model, SymbolKind::Class).unwrap_err();
        assert_eq!(
            err,
            HierarchyError::CyclicHierarchy {
                id: id(1),
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_cycle_through_undocumented_symbols_detected() {
        let model = SymbolModel::new(vec![
            class(1, "Start").with_superclass(id(2)),
            class(2, "X").with_superclass(id(3)).undocumented(),
            class(3, "Y").with_superclass(id(2)).undocumented(),
        ])
        .unwrap();

        assert!(matches!(
            forest_of(&model, SymbolKind::Class),
            Err(HierarchyError::CyclicHierarchy { id: cycle, .. }) if cycle == id(2)
        ));
    }

    #[test]
    fn test_interface_cycle_detected() {
        let model = SymbolModel::new(vec![
            interface(1, "P").with_superinterfaces([id(2)]),
            interface(2, "Q").with_superinterfaces([id(1)]),
        ])
        .unwrap();

        assert!(matches!(
            forest_of(&model, SymbolKind::Interface),
            Err(HierarchyError::CyclicHierarchy { .. })
        ));
    }

    #[test]
    fn test_invalid_kind_filter() {
        let model = SymbolModel::default();
        assert_eq!(
            forest_of(&model, SymbolKind::Method).unwrap_err(),
            HierarchyError::InvalidKindFilter {
                kind: SymbolKind::Method
            }
        );
    }

    #[test]
    fn test_class_reports_implemented_interfaces() {
        let model = SymbolModel::new(vec![
            interface(1, "Runnable"),
            interface(2, "Internal").with_superinterfaces([id(3)]).undocumented(),
            interface(3, "Closeable"),
            class(4, "Worker").with_superinterfaces([id(1), id(2)]),
        ])
        .unwrap();

        let forest = forest_of(&model, SymbolKind::Class).unwrap();
        let implemented: Vec<_> = forest.roots[0].implements.iter().map(|s| s.id).collect();
        assert_eq!(implemented, vec![id(1), id(3)]);
    }

    #[test]
    fn test_enums_do_not_join_class_forest() {
        let model = SymbolModel::new(vec![
            class(1, "Enum"),
            Symbol::new(id(2), "Color", SymbolKind::Enum).with_superclass(id(1)),
        ])
        .unwrap();

        let classes = forest_of(&model, SymbolKind::Class).unwrap();
        let enums = forest_of(&model, SymbolKind::Enum).unwrap();
        assert_eq!(classes.node_count(), 1);
        assert_eq!(enums.node_count(), 1);
        assert!(enums.roots[0].is_leaf());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let model = SymbolModel::new(vec![
            class(1, "Root"),
            class(2, "Child").with_superclass(id(1)),
            interface(3, "Api"),
            interface(4, "SubApi").with_superinterfaces([id(3)]),
        ])
        .unwrap();
        let documented = model.documented();
        let builder = HierarchyBuilder::new(&model, OrderingPolicy::default());

        let sequential = builder
            .build_forests(&documented, &SymbolKind::TREE_KINDS, false)
            .unwrap();
        let parallel = builder
            .build_forests(&documented, &SymbolKind::TREE_KINDS, true)
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 4);
    }
}
