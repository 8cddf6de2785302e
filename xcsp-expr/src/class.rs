//! Classes (tags) attached to problem elements.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Standard classes that can be associated with elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum StandardClass {
    Channeling,
    Clues,
    Rows,
    Columns,
    Blocks,
    Diagonals,
    SymmetryBreaking,
    RedundantConstraints,
    Nogoods,
}

/// A class, either from the standard set or defined by the user.
///
/// Two classes are equal when their names are equal, so a custom class that
/// happens to be spelled like a standard one is the same class.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeClass {
    Standard(StandardClass),
    Custom(String),
}

impl TypeClass {
    pub fn name(&self) -> &str {
        match self {
            TypeClass::Standard(class) => <&'static str>::from(class),
            TypeClass::Custom(name) => name,
        }
    }

    /// Maps each name to its standard class when one exists, and to a custom class otherwise.
    pub fn classes_for<S: AsRef<str>>(names: &[S]) -> Vec<TypeClass> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                StandardClass::iter()
                    .find(|class| <&'static str>::from(class) == name)
                    .map(TypeClass::Standard)
                    .unwrap_or_else(|| TypeClass::Custom(name.to_string()))
            })
            .collect()
    }

    /// Returns `true` if no class appears in both lists. A missing list is
    /// disjoint from everything.
    pub fn disjoint(a: Option<&[TypeClass]>, b: Option<&[TypeClass]>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => !a.iter().any(|x| b.iter().any(|y| x == y)),
            _ => true,
        }
    }
}

impl PartialEq for TypeClass {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl std::hash::Hash for TypeClass {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl From<StandardClass> for TypeClass {
    fn from(value: StandardClass) -> Self {
        TypeClass::Standard(value)
    }
}

impl std::fmt::Display for TypeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_standard_classes_first() {
        let classes = TypeClass::classes_for(&["clues", "symmetryBreaking", "mine"]);
        assert_eq!(
            classes,
            vec![
                TypeClass::Standard(StandardClass::Clues),
                TypeClass::Standard(StandardClass::SymmetryBreaking),
                TypeClass::Custom("mine".to_string()),
            ]
        );
    }

    #[test]
    fn equality_is_by_name() {
        assert_eq!(
            TypeClass::Custom("rows".to_string()),
            TypeClass::Standard(StandardClass::Rows)
        );
        assert_ne!(
            TypeClass::Custom("Rows".to_string()),
            TypeClass::Standard(StandardClass::Rows)
        );
    }

    #[test]
    fn disjointness() {
        let a = TypeClass::classes_for(&["rows", "custom"]);
        let b = TypeClass::classes_for(&["columns"]);
        let c = TypeClass::classes_for(&["custom"]);
        assert!(TypeClass::disjoint(Some(&a[..]), Some(&b[..])));
        assert!(!TypeClass::disjoint(Some(&a[..]), Some(&c[..])));
        assert!(TypeClass::disjoint(None, Some(&c[..])));
        assert!(TypeClass::disjoint(Some(&[][..]), Some(&c[..])));
    }
}
