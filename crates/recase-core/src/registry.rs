// Recase Registry
// Closed, ordered lookup table from transformation name to transformation

use indexmap::IndexMap;
use strum::IntoEnumIterator;

use crate::Transformation;

/// The fixed set of transformations available for dispatch.
///
/// Lookup is a plain table hit on the stable name; nothing outside the
/// table can be selected. Iteration follows declaration order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<&'static str, Transformation>,
}

impl Registry {
    /// Registry holding every built-in transformation
    pub fn builtin() -> Self {
        let entries = Transformation::iter().map(|t| (t.name(), t)).collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<Transformation> {
        self.entries.get(name).copied()
    }

    /// Transformations in display order
    pub fn iter(&self) -> impl Iterator<Item = Transformation> + '_ {
        self.entries.values().copied()
    }

    /// Registered names in display order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_builtin_registry_has_every_transformation() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), Transformation::COUNT);
        assert!(!registry.is_empty());
        for t in Transformation::iter() {
            assert_eq!(registry.get(t.name()), Some(t));
        }
    }

    #[test]
    fn test_registry_preserves_declaration_order() {
        let registry = Registry::builtin();
        let from_registry: Vec<Transformation> = registry.iter().collect();
        let declared: Vec<Transformation> = Transformation::iter().collect();
        assert_eq!(from_registry, declared);
        assert_eq!(registry.names().next(), Some("to_upper"));
        assert_eq!(registry.names().last(), Some("add_line_breaks_to_list"));
    }

    #[test]
    fn test_unknown_names() {
        let registry = Registry::builtin();
        assert!(registry.get("nonexistent_name").is_none());
        assert!(registry.get("").is_none());
        assert!(registry.get("TO_UPPER").is_none());
        assert!(registry.get("to_upper(x)").is_none());
        assert!(registry.get("eval").is_none());
        assert_eq!(registry.get("titlecase"), Some(Transformation::TitleCase));
    }
}
