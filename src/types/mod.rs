use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(NonZeroU32);

/// Kind of a documented program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    Package,
    Class,
    Interface,
    Enum,
    AnnotationType,
    Field,
    Method,
    Constructor,
    EnumConstant,
}

/// Coarse grouping used when ordering symbols that share a name.
///
/// Packages sort before types, types before members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindRank {
    Package,
    Type,
    Member,
}

impl SymbolId {
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 9] = [
        SymbolKind::Package,
        SymbolKind::Class,
        SymbolKind::Interface,
        SymbolKind::Enum,
        SymbolKind::AnnotationType,
        SymbolKind::Field,
        SymbolKind::Method,
        SymbolKind::Constructor,
        SymbolKind::EnumConstant,
    ];

    /// Kinds that get their own hierarchy forest.
    pub const TREE_KINDS: [SymbolKind; 4] = [
        SymbolKind::Class,
        SymbolKind::Interface,
        SymbolKind::Enum,
        SymbolKind::AnnotationType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::AnnotationType => "annotation-type",
            Self::Field => "field",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::EnumConstant => "enum-constant",
        }
    }

    pub fn rank(&self) -> KindRank {
        match self {
            Self::Package => KindRank::Package,
            Self::Class | Self::Interface | Self::Enum | Self::AnnotationType => KindRank::Type,
            Self::Field | Self::Method | Self::Constructor | Self::EnumConstant => {
                KindRank::Member
            }
        }
    }

    pub fn is_type(&self) -> bool {
        self.rank() == KindRank::Type
    }

    /// Methods and constructors carry a parameter signature.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Method | Self::Constructor)
    }

    pub fn is_tree_eligible(&self) -> bool {
        self.is_type()
    }

    /// Interfaces and annotation types inherit through superinterfaces only.
    pub fn inherits_by_interface(&self) -> bool {
        matches!(self, Self::Interface | Self::AnnotationType)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .or(match normalized.as_str() {
                "annotation" => Some(Self::AnnotationType),
                _ => None,
            })
            .ok_or_else(|| format!("unknown symbol kind '{s}'"))
    }
}

pub type CompactString = Box<str>;

pub fn compact_string(s: &str) -> CompactString {
    s.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id_creation() {
        assert!(SymbolId::new(0).is_none());

        let id = SymbolId::new(42).unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_symbol_id_serde_is_plain_number() {
        let id = SymbolId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert!(serde_json::from_str::<SymbolId>("0").is_err());
    }

    #[test]
    fn test_kind_ranks() {
        assert_eq!(SymbolKind::Package.rank(), KindRank::Package);
        assert_eq!(SymbolKind::AnnotationType.rank(), KindRank::Type);
        assert_eq!(SymbolKind::EnumConstant.rank(), KindRank::Member);
        assert!(KindRank::Package < KindRank::Type);
        assert!(KindRank::Type < KindRank::Member);
    }

    #[test]
    fn test_tree_eligible_kinds() {
        let eligible: Vec<_> = SymbolKind::ALL
            .iter()
            .filter(|k| k.is_tree_eligible())
            .copied()
            .collect();
        assert_eq!(eligible, SymbolKind::TREE_KINDS.to_vec());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("class".parse::<SymbolKind>().unwrap(), SymbolKind::Class);
        assert_eq!(
            "annotation_type".parse::<SymbolKind>().unwrap(),
            SymbolKind::AnnotationType
        );
        assert_eq!(
            "annotation".parse::<SymbolKind>().unwrap(),
            SymbolKind::AnnotationType
        );
        assert!("trait".parse::<SymbolKind>().is_err());
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&SymbolKind::EnumConstant).unwrap();
        assert_eq!(json, "\"enum-constant\"");
        let kind: SymbolKind = serde_json::from_str("\"annotation-type\"").unwrap();
        assert_eq!(kind, SymbolKind::AnnotationType);
    }

    #[test]
    fn test_compact_string() {
        let s = compact_string("hello world");
        assert_eq!(&*s, "hello world");
    }
}
