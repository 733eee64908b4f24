//! Import collection utilities.

use indexmap::IndexSet;

/// Tracks fully-qualified import names and deduplicates them on insert.
///
/// Keeps insertion order while collecting; ordering for output is decided
/// once, by [`ImportSet::sorted`], when the document is rendered.
///
/// # Example
///
/// ```
/// use javelin_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.insert("java.util.List");
/// imports.insert("java.io.File");
/// imports.insert("java.util.List");
///
/// assert_eq!(imports.len(), 2);
/// assert_eq!(imports.sorted(), vec!["java.io.File", "java.util.List"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    names: IndexSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully-qualified name. Returns `false` if it was already present.
    pub fn insert(&mut self, qualified: impl Into<String>) -> bool {
        self.names.insert(qualified.into())
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &ImportSet) {
        self.names.extend(other.names.iter().cloned());
    }

    /// Check if a name is already present.
    pub fn contains(&self, qualified: &str) -> bool {
        self.names.contains(qualified)
    }

    /// Iterate over names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in ascending lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut imports = ImportSet::new();
        assert!(imports.insert("java.util.ArrayList"));
        assert!(!imports.insert("java.util.ArrayList"));
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("java.util.ArrayList"));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut imports = ImportSet::new();
        imports.extend(["java.util.Map", "java.io.File"]);
        let names: Vec<&str> = imports.iter().collect();
        assert_eq!(names, vec!["java.util.Map", "java.io.File"]);
    }

    #[test]
    fn test_merge() {
        let mut a = ImportSet::new();
        a.insert("java.io.File");

        let mut b = ImportSet::new();
        b.insert("java.io.File");
        b.insert("java.nio.file.Path");

        a.merge(&b);

        assert_eq!(a.sorted(), vec!["java.io.File", "java.nio.file.Path"]);
    }

    #[test]
    fn test_sorted_is_lexicographic() {
        let mut imports = ImportSet::new();
        imports.extend([
            "javax.servlet.http.HttpServletRequest",
            "java.util.List",
            "java.io.File",
        ]);
        assert_eq!(
            imports.sorted(),
            vec![
                "java.io.File",
                "java.util.List",
                "javax.servlet.http.HttpServletRequest"
            ]
        );
    }
}
