//! Documented program elements as supplied by the symbol model.

use crate::types::{CompactString, SymbolId, SymbolKind, compact_string};
use serde::{Deserialize, Serialize};

/// An immutable snapshot of one documented program element.
///
/// Supertype references are ids into the owning [`SymbolModel`](crate::SymbolModel);
/// a reference to an id the model does not contain ends the inheritance chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: CompactString,
    pub kind: SymbolKind,

    /// Enclosing package or type name, used for ordering ties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<CompactString>,

    /// Parameter list of methods and constructors, e.g. `(int, int)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<CompactString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<SymbolId>,

    /// Declared superinterfaces in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub superinterfaces: Vec<SymbolId>,

    #[serde(default = "default_documented")]
    pub documented: bool,
}

fn default_documented() -> bool {
    true
}

impl Symbol {
    pub fn new(id: SymbolId, name: impl AsRef<str>, kind: SymbolKind) -> Self {
        Self {
            id,
            name: compact_string(name.as_ref()),
            kind,
            container: None,
            signature: None,
            superclass: None,
            superinterfaces: Vec::new(),
            documented: true,
        }
    }

    pub fn with_container(mut self, container: impl AsRef<str>) -> Self {
        self.container = Some(compact_string(container.as_ref()));
        self
    }

    pub fn with_signature(mut self, signature: impl AsRef<str>) -> Self {
        self.signature = Some(compact_string(signature.as_ref()));
        self
    }

    pub fn with_superclass(mut self, superclass: SymbolId) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn with_superinterfaces(mut self, superinterfaces: impl IntoIterator<Item = SymbolId>) -> Self {
        self.superinterfaces = superinterfaces.into_iter().collect();
        self
    }

    pub fn undocumented(mut self) -> Self {
        self.documented = false;
        self
    }

    pub fn as_name(&self) -> &str {
        &self.name
    }

    /// True for the unnamed scope (e.g. the default package).
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Container-qualified name for display, `pkg.Type` or just `Type`.
    pub fn qualified_name(&self) -> String {
        match &self.container {
            Some(container) if !container.is_empty() => format!("{container}.{}", self.name),
            _ => self.name.to_string(),
        }
    }
}
