use crate::error::{GraphError, Result};
use std::collections::HashMap;

/// Maps location names to dense indexes.
///
/// Indexes are assigned once, in sorted name order, so the same set of
/// names always produces the same numbering. They are never reused or
/// renumbered afterwards.
#[derive(Debug, Default, Clone)]
pub struct LocationRegistry {
    /// Names in index order.
    names: Vec<String>,

    /// Map of name to index.
    by_name: HashMap<String, usize>,
}

impl LocationRegistry {
    /// Builds a registry from a set of names. Duplicates collapse.
    ///
    /// Fails with `InvalidInput` when no names are given.
    pub fn build<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();

        if names.is_empty() {
            return Err(GraphError::InvalidInput(
                "cannot build a network without locations".to_string(),
            ));
        }

        let by_name = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Ok(Self { names, by_name })
    }

    /// Resolves a name to its index.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Resolves a name, reporting `NoSuchLocation` when it is unknown.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| GraphError::NoSuchLocation(name.to_string()))
    }

    /// Returns the name stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn name_of(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_follow_sorted_names() {
        let registry = LocationRegistry::build(["Xela", "Antigua", "Mixco", "Antigua"]).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), &["Antigua", "Mixco", "Xela"]);
        assert_eq!(registry.index_of("Antigua"), Some(0));
        assert_eq!(registry.index_of("Xela"), Some(2));
        assert_eq!(registry.name_of(1), "Mixco");
    }

    #[test]
    fn test_unknown_names() {
        let registry = LocationRegistry::build(["A", "B"]).unwrap();

        assert_eq!(registry.index_of("C"), None);
        assert!(!registry.contains("C"));
        assert!(matches!(
            registry.require("C"),
            Err(GraphError::NoSuchLocation(name)) if name == "C"
        ));
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let result = LocationRegistry::build(Vec::<String>::new());
        assert!(matches!(result, Err(GraphError::InvalidInput(_))));
    }

    #[test]
    #[should_panic]
    fn test_name_of_out_of_range_panics() {
        let registry = LocationRegistry::build(["A"]).unwrap();
        let _ = registry.name_of(5);
    }
}
