//! Declarations as they appear in the manifest.
//!
//! These are plain serde types. Names and type strings are kept as written;
//! [`crate::Manifest`] validates them and lowers them into `javelin-java`
//! constructs.

mod members;

pub use members::{AnnotationDef, ConstantDef, ConstructorDef, FieldDef, MethodDef, ParamDef};
use serde::Deserialize;

/// Which kind of type a [`TypeDef`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single string or a list of strings.
///
/// `extends = "Base"` for classes and `extends = ["A", "B"]` for interfaces
/// both deserialize into this.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

/// Indentation setting: a width in spaces or `"tab"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Width(u8),
    Keyword(String),
}

/// A class, interface or enum declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    pub kind: TypeKind,

    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    /// `public` (default), `protected`, `private` or `package`
    #[serde(default)]
    pub visibility: Option<String>,

    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Type parameters such as `T` or `T extends java.lang.Comparable<T>`
    #[serde(default)]
    pub type_params: Vec<String>,

    /// Superclass for classes, superinterfaces for interfaces
    #[serde(default)]
    pub extends: Option<OneOrMany>,

    #[serde(default)]
    pub implements: Vec<String>,

    /// Extra fully qualified imports added to the file
    #[serde(default)]
    pub imports: Vec<String>,

    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,

    #[serde(default)]
    pub fields: Vec<FieldDef>,

    #[serde(default)]
    pub constructors: Vec<ConstructorDef>,

    #[serde(default)]
    pub methods: Vec<MethodDef>,

    /// Enum constants (enums only)
    #[serde(default)]
    pub constants: Vec<ConstantDef>,

    /// Member types, declared the same way
    #[serde(default)]
    pub nested: Vec<TypeDef>,
}

impl TypeDef {
    /// Superclass or superinterfaces as written, empty when absent.
    pub fn extends(&self) -> &[String] {
        self.extends
            .as_ref()
            .map(OneOrMany::as_slice)
            .unwrap_or_default()
    }

    /// Explicit imports of this type and every nested type, in declaration order.
    pub fn all_imports(&self) -> Vec<&str> {
        let mut imports: Vec<&str> = self.imports.iter().map(String::as_str).collect();
        for nested in &self.nested {
            imports.extend(nested.all_imports());
        }
        imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extends_single_and_list() {
        let class: TypeDef = toml::from_str(
            r#"
kind = "class"
name = "Child"
extends = "com.example.Parent"
"#,
        )
        .unwrap();
        assert_eq!(class.extends(), ["com.example.Parent".to_string()]);

        let iface: TypeDef = toml::from_str(
            r#"
kind = "interface"
name = "Both"
extends = ["com.example.A", "com.example.B"]
"#,
        )
        .unwrap();
        assert_eq!(iface.extends().len(), 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<TypeDef, _> = toml::from_str(
            r#"
kind = "class"
name = "Thing"
superclass = "Other"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_all_imports_includes_nested() {
        let def: TypeDef = toml::from_str(
            r#"
kind = "class"
name = "Outer"
imports = ["java.util.Objects"]

[[nested]]
kind = "enum"
name = "Inner"
imports = ["javax.annotation.processing.Generated"]
"#,
        )
        .unwrap();
        assert_eq!(
            def.all_imports(),
            vec!["java.util.Objects", "javax.annotation.processing.Generated"]
        );
    }

    #[test]
    fn test_indent_setting() {
        #[derive(Deserialize)]
        struct Holder {
            indent: IndentSetting,
        }
        let width: Holder = toml::from_str("indent = 2").unwrap();
        assert_eq!(width.indent, IndentSetting::Width(2));
        let tab: Holder = toml::from_str("indent = \"tab\"").unwrap();
        assert_eq!(tab.indent, IndentSetting::Keyword("tab".into()));
    }
}
