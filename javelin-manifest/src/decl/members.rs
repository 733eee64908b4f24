use indexmap::IndexMap;
use serde::Deserialize;

/// An annotation: either just its type, or a table with arguments.
///
/// ```toml
/// annotations = [
///     "Override",
///     { type = "javax.annotation.processing.Generated", value = "\"javelin\"" },
///     { type = "com.example.Column", members = { name = "\"id\"", nullable = "false" } },
/// ]
/// ```
///
/// Values are Java expressions written verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnnotationDef {
    Name(String),
    Full {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        members: IndexMap<String, String>,
    },
}

impl AnnotationDef {
    pub fn type_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Full { ty, .. } => ty,
        }
    }
}

/// A field, or a constant when declared on an interface.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub doc: Option<String>,

    /// Defaults to `private`
    #[serde(default)]
    pub visibility: Option<String>,

    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Java expression written after `=`
    #[serde(default)]
    pub initializer: Option<String>,

    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
}

/// A method or constructor parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDef {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Written as an `@param` tag on the owner's javadoc
    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default, rename = "final")]
    pub is_final: bool,

    #[serde(default)]
    pub varargs: bool,

    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
}

/// A constructor. Its name is taken from the enclosing type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDef {
    #[serde(default)]
    pub doc: Option<String>,

    /// Defaults to `public`, or `private` inside an enum
    #[serde(default)]
    pub visibility: Option<String>,

    #[serde(default)]
    pub params: Vec<ParamDef>,

    #[serde(default)]
    pub throws: Vec<String>,

    /// Arguments of a leading `super(...)` call
    #[serde(default)]
    pub super_args: Option<Vec<String>>,

    /// Arguments of a leading `this(...)` call
    #[serde(default)]
    pub this_args: Option<Vec<String>>,

    /// Statements, one per line
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
}

/// A method.
///
/// Without a `body`, interface and `abstract`/`native` methods are written
/// as declarations ending in `;`; other methods get an empty body.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDef {
    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    /// Defaults to `public`
    #[serde(default)]
    pub visibility: Option<String>,

    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub type_params: Vec<String>,

    /// Defaults to `void`
    #[serde(default)]
    pub returns: Option<String>,

    #[serde(default)]
    pub returns_doc: Option<String>,

    #[serde(default)]
    pub params: Vec<ParamDef>,

    #[serde(default)]
    pub throws: Vec<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
}

/// An enum constant such as `ACTIVE("active")`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantDef {
    pub name: String,

    #[serde(default)]
    pub doc: Option<String>,

    /// Constructor arguments, written verbatim
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_forms() {
        #[derive(Deserialize)]
        struct Holder {
            annotations: Vec<AnnotationDef>,
        }
        let holder: Holder = toml::from_str(
            r#"
annotations = [
    "Override",
    { type = "com.example.Column", members = { name = "\"id\"", nullable = "false" } },
]
"#,
        )
        .unwrap();
        assert_eq!(holder.annotations[0], AnnotationDef::Name("Override".into()));
        assert_eq!(holder.annotations[1].type_name(), "com.example.Column");
        let AnnotationDef::Full { members, value, .. } = &holder.annotations[1] else {
            panic!("expected a full annotation");
        };
        assert!(value.is_none());
        assert_eq!(
            members.keys().collect::<Vec<_>>(),
            vec!["name", "nullable"]
        );
    }

    #[test]
    fn test_param_flags() {
        let param: ParamDef = toml::from_str(
            r#"
name = "values"
type = "String"
final = true
varargs = true
"#,
        )
        .unwrap();
        assert!(param.is_final);
        assert!(param.varargs);
        assert!(param.doc.is_none());
    }
}
