//! Java type names as they appear in declarations.

use javelin_codegen::{Node, TypeRef, Writer};

/// A Java type as written in source.
///
/// Writing a `TypeName` registers every [`TypeRef`] it contains, so a
/// field of type `Map<String, List<File>>` imports `java.util.Map`,
/// `java.util.List` and `java.io.File`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// A primitive or `void`: `int`, `boolean`, `void`.
    Primitive(String),
    /// A simple name that never needs an import: `String`, `Object`.
    Builtin(String),
    /// A type that is imported unless it lives in the target package.
    Class(TypeRef),
    /// A generic type with arguments: `List<String>`.
    Parameterized(TypeRef, Vec<TypeName>),
    /// An array: `byte[]`.
    Array(Box<TypeName>),
    /// A type variable: `T`.
    Variable(String),
    /// A wildcard argument: `?`, `? extends T`, `? super T`.
    Wildcard(Option<WildcardBound>),
}

/// Bound of a wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildcardBound {
    Extends(Box<TypeName>),
    Super(Box<TypeName>),
}

impl TypeName {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    pub fn void() -> Self {
        Self::primitive("void")
    }

    pub fn int() -> Self {
        Self::primitive("int")
    }

    pub fn long() -> Self {
        Self::primitive("long")
    }

    pub fn boolean() -> Self {
        Self::primitive("boolean")
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin(name.into())
    }

    /// `java.lang.String`, written without an import.
    pub fn string() -> Self {
        Self::builtin("String")
    }

    /// `java.lang.Object`, written without an import.
    pub fn object() -> Self {
        Self::builtin("Object")
    }

    /// A class by package and simple name.
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Class(TypeRef::new(name, package))
    }

    /// A class by fully-qualified name, e.g. `java.util.List`.
    pub fn qualified(name: &str) -> Self {
        Self::Class(TypeRef::parse(name))
    }

    pub fn parameterized(base: TypeRef, args: impl IntoIterator<Item = TypeName>) -> Self {
        Self::Parameterized(base, args.into_iter().collect())
    }

    pub fn array(inner: TypeName) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Unbounded wildcard `?`.
    pub fn wildcard() -> Self {
        Self::Wildcard(None)
    }

    /// `? extends bound`.
    pub fn extends_wildcard(bound: TypeName) -> Self {
        Self::Wildcard(Some(WildcardBound::Extends(Box::new(bound))))
    }

    /// `? super bound`.
    pub fn super_wildcard(bound: TypeName) -> Self {
        Self::Wildcard(Some(WildcardBound::Super(Box::new(bound))))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(name) if name == "void")
    }

    /// Collect every reference contained in this type, outermost first.
    pub fn references(&self) -> Vec<&TypeRef> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a TypeRef>) {
        match self {
            Self::Class(r) => refs.push(r),
            Self::Parameterized(r, args) => {
                refs.push(r);
                for arg in args {
                    arg.collect_references(refs);
                }
            }
            Self::Array(inner) => inner.collect_references(refs),
            Self::Wildcard(Some(WildcardBound::Extends(t) | WildcardBound::Super(t))) => {
                t.collect_references(refs)
            }
            Self::Primitive(_) | Self::Builtin(_) | Self::Variable(_) | Self::Wildcard(None) => {}
        }
    }
}

impl From<TypeRef> for TypeName {
    fn from(r: TypeRef) -> Self {
        Self::Class(r)
    }
}

impl Node for TypeName {
    fn write(&self, writer: &mut Writer) {
        match self {
            Self::Primitive(name) | Self::Builtin(name) | Self::Variable(name) => {
                writer.write(name);
            }
            Self::Class(r) => {
                writer.write_node(r);
            }
            Self::Parameterized(r, args) => {
                writer.write_node(r).write("<").write_joined(args, ", ").write(">");
            }
            Self::Array(inner) => {
                writer.write_node(inner.as_ref()).write("[]");
            }
            Self::Wildcard(None) => {
                writer.write("?");
            }
            Self::Wildcard(Some(WildcardBound::Extends(bound))) => {
                writer.write("? extends ").write_node(bound.as_ref());
            }
            Self::Wildcard(Some(WildcardBound::Super(bound))) => {
                writer.write("? super ").write_node(bound.as_ref());
            }
        }
    }
}

/// A generic type parameter with optional bounds: `T extends Number & Comparable<T>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    pub name: String,
    pub bounds: Vec<TypeName>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: TypeName) -> Self {
        self.bounds.push(bound);
        self
    }
}

impl Node for TypeParam {
    fn write(&self, writer: &mut Writer) {
        writer.write(&self.name);
        if !self.bounds.is_empty() {
            writer.write(" extends ").write_joined(&self.bounds, " & ");
        }
    }
}

/// Write `<A, B>` when `params` is non-empty.
pub(crate) fn write_type_params(writer: &mut Writer, params: &[TypeParam]) {
    if !params.is_empty() {
        writer.write("<").write_joined(params, ", ").write(">");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ty: &impl Node) -> (String, Vec<String>) {
        let mut writer = Writer::nested("com.example");
        writer.write_node(ty);
        let imports = writer.imports().into_iter().map(String::from).collect();
        (writer.body().to_string(), imports)
    }

    #[test]
    fn test_primitive_and_builtin_never_import() {
        let (text, imports) = render(&TypeName::int());
        assert_eq!(text, "int");
        assert!(imports.is_empty());

        let (text, imports) = render(&TypeName::string());
        assert_eq!(text, "String");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_nested_generics_register_all_references() {
        let ty = TypeName::parameterized(
            TypeRef::new("Map", "java.util"),
            [
                TypeName::string(),
                TypeName::parameterized(
                    TypeRef::new("List", "java.util"),
                    [TypeName::qualified("java.io.File")],
                ),
            ],
        );
        let (text, imports) = render(&ty);
        assert_eq!(text, "Map<String, List<File>>");
        assert_eq!(imports, vec!["java.io.File", "java.util.List", "java.util.Map"]);
        assert_eq!(ty.references().len(), 3);
    }

    #[test]
    fn test_array_and_wildcards() {
        let (text, _) = render(&TypeName::array(TypeName::primitive("byte")));
        assert_eq!(text, "byte[]");

        let ty = TypeName::parameterized(
            TypeRef::new("List", "java.util"),
            [TypeName::extends_wildcard(TypeName::qualified(
                "java.lang.Number",
            ))],
        );
        let (text, imports) = render(&ty);
        assert_eq!(text, "List<? extends Number>");
        assert_eq!(imports, vec!["java.lang.Number", "java.util.List"]);

        let (text, _) = render(&TypeName::super_wildcard(TypeName::variable("T")));
        assert_eq!(text, "? super T");
        let (text, _) = render(&TypeName::wildcard());
        assert_eq!(text, "?");
    }

    #[test]
    fn test_same_package_class_not_imported() {
        let (text, imports) = render(&TypeName::class("com.example", "User"));
        assert_eq!(text, "User");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_type_param_bounds() {
        let param = TypeParam::new("T")
            .bound(TypeName::qualified("java.lang.Number"))
            .bound(TypeName::parameterized(
                TypeRef::new("Comparable", "java.lang"),
                [TypeName::variable("T")],
            ));
        let (text, _) = render(&param);
        assert_eq!(text, "T extends Number & Comparable<T>");
    }

    #[test]
    fn test_is_void() {
        assert!(TypeName::void().is_void());
        assert!(!TypeName::int().is_void());
    }
}
