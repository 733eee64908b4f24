//! Identity of an external Java type.

use std::fmt;

use super::{Node, Writer};

/// A `(simple name, package)` pair naming a Java type.
///
/// Two references are equal when both parts match exactly. Writing a
/// `TypeRef` registers it with the writer's import resolution and emits
/// the simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef {
    name: String,
    package: String,
}

impl TypeRef {
    /// Create a reference from its simple name and package.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
        }
    }

    /// Split a fully-qualified name at its last dot.
    ///
    /// A name without a dot lands in the default (empty) package.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, name)) => Self::new(name, package),
            None => Self::new(qualified, ""),
        }
    }

    /// The simple name, e.g. `List`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package, e.g. `java.util`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The fully-qualified name, e.g. `java.util.List`.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

impl Node for TypeRef {
    fn write(&self, writer: &mut Writer) {
        writer.add_reference(self);
        writer.write(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(
            TypeRef::new("List", "java.util"),
            TypeRef::new("List", "java.util")
        );
        assert_ne!(TypeRef::new("List", "java.util"), TypeRef::new("List", "java.awt"));
    }

    #[test]
    fn test_parse_qualified() {
        let r = TypeRef::parse("javax.servlet.http.HttpServletRequest");
        assert_eq!(r.name(), "HttpServletRequest");
        assert_eq!(r.package(), "javax.servlet.http");
    }

    #[test]
    fn test_parse_unqualified() {
        let r = TypeRef::parse("Widget");
        assert_eq!(r.name(), "Widget");
        assert_eq!(r.package(), "");
        assert_eq!(r.qualified_name(), "Widget");
    }

    #[test]
    fn test_display_is_qualified() {
        assert_eq!(TypeRef::new("File", "java.io").to_string(), "java.io.File");
    }

    #[test]
    fn test_write_emits_simple_name_and_registers() {
        let mut writer = Writer::nested("com.example");
        writer.write_node(&TypeRef::new("File", "java.io"));
        assert_eq!(writer.body(), "File");
        assert_eq!(writer.imports(), vec!["java.io.File"]);
    }
}
