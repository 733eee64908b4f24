//! Parser for the Java type strings used throughout the manifest.
//!
//! ```text
//! type     := base ("[" "]")*
//! base     := "?" (("extends" | "super") type)?
//!           | name ("<" type ("," type)* ">")?
//! name     := ident ("." ident)*
//! param    := ident ("extends" type ("&" type)*)?
//! ```
//!
//! Names resolve in this order: primitive keyword, declared type variable,
//! qualified name (imported), simple name (written as-is, never imported).

use javelin_java::{TypeName, TypeParam, TypeRef};

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Parse a type string such as `java.util.Map<String, ? extends T>[]`.
pub(crate) fn parse_type(src: &str, vars: &[String]) -> Result<TypeName, String> {
    let mut parser = TypeParser::new(src, vars);
    let ty = parser.parse_type()?;
    parser.finish()?;
    Ok(ty)
}

/// Parse a type parameter declaration such as `T extends Number & Comparable<T>`.
pub(crate) fn parse_type_param(src: &str, vars: &[String]) -> Result<TypeParam, String> {
    let mut parser = TypeParser::new(src, vars);
    let mut param = TypeParam::new(parser.ident()?);
    if parser.eat_keyword("extends") {
        loop {
            param = param.bound(parser.parse_type()?);
            if !parser.eat('&') {
                break;
            }
        }
    }
    parser.finish()?;
    Ok(param)
}

/// The declared name of a type parameter, without its bounds.
pub(crate) fn type_param_name(src: &str) -> &str {
    src.split_whitespace().next().unwrap_or_default()
}

struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
    vars: &'a [String],
}

impl<'a> TypeParser<'a> {
    fn new(src: &'a str, vars: &'a [String]) -> Self {
        Self { src, pos: 0, vars }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_ws();
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };
        if after.chars().next().is_some_and(is_ident_char) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    fn ident(&mut self) -> Result<&'a str, String> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_ident_char(c))
            .map_or(rest.len(), |(i, _)| i);
        if len == 0 || rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(self.expected("an identifier"));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn qualified_name(&mut self) -> Result<String, String> {
        let mut name = self.ident()?.to_string();
        while self.eat('.') {
            name.push('.');
            name.push_str(self.ident()?);
        }
        Ok(name)
    }

    fn parse_type(&mut self) -> Result<TypeName, String> {
        let mut ty = if self.eat('?') {
            if self.eat_keyword("extends") {
                TypeName::extends_wildcard(self.parse_type()?)
            } else if self.eat_keyword("super") {
                TypeName::super_wildcard(self.parse_type()?)
            } else {
                TypeName::wildcard()
            }
        } else {
            let name = self.qualified_name()?;
            if self.eat('<') {
                let base = self.generic_base(&name)?;
                let mut args = vec![self.parse_type()?];
                while self.eat(',') {
                    args.push(self.parse_type()?);
                }
                if !self.eat('>') {
                    return Err(self.expected("',' or '>'"));
                }
                TypeName::parameterized(base, args)
            } else {
                self.resolve(&name)
            }
        };

        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.expected("']'"));
            }
            ty = TypeName::array(ty);
        }
        Ok(ty)
    }

    fn resolve(&self, name: &str) -> TypeName {
        if PRIMITIVES.contains(&name) {
            TypeName::primitive(name)
        } else if self.vars.iter().any(|var| var == name) {
            TypeName::variable(name)
        } else if name.contains('.') {
            TypeName::qualified(name)
        } else {
            TypeName::builtin(name)
        }
    }

    fn generic_base(&self, name: &str) -> Result<TypeRef, String> {
        if PRIMITIVES.contains(&name) || self.vars.iter().any(|var| var == name) {
            return Err(format!("'{}' cannot take type arguments", name));
        }
        // A simple name keeps an empty package, so it is never imported.
        Ok(TypeRef::parse(name))
    }

    fn finish(&mut self) -> Result<(), String> {
        self.skip_ws();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(format!("unexpected '{}' at offset {}", self.rest(), self.pos))
        }
    }

    fn expected(&self, what: &str) -> String {
        if self.rest().is_empty() {
            format!("expected {} at end of input", what)
        } else {
            format!("expected {} at offset {}", what, self.pos)
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use javelin_java::{Node, Writer};

    use super::*;

    fn render(ty: &TypeName) -> (String, Vec<String>) {
        let mut writer = Writer::nested("com.example");
        ty.write(&mut writer);
        let imports = writer.imports().into_iter().map(String::from).collect();
        (writer.body().to_string(), imports)
    }

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_primitive_and_void() {
        assert_eq!(parse_type("int", &[]).unwrap(), TypeName::int());
        assert!(parse_type("void", &[]).unwrap().is_void());
    }

    #[test]
    fn test_simple_name_is_builtin() {
        assert_eq!(parse_type("String", &[]).unwrap(), TypeName::string());
    }

    #[test]
    fn test_qualified_name_is_imported() {
        let ty = parse_type("java.util.UUID", &[]).unwrap();
        assert_eq!(ty, TypeName::class("java.util", "UUID"));
    }

    #[test]
    fn test_declared_variable() {
        let ty = parse_type("T", &vars(&["T"])).unwrap();
        assert_eq!(ty, TypeName::variable("T"));
    }

    #[test]
    fn test_nested_generics_and_wildcards() {
        let ty = parse_type(
            "java.util.Map<String, java.util.List<? extends T>>[]",
            &vars(&["T"]),
        )
        .unwrap();
        let (text, imports) = render(&ty);
        assert_eq!(text, "Map<String, List<? extends T>>[]");
        assert_eq!(imports, vec!["java.util.List", "java.util.Map"]);
    }

    #[test]
    fn test_super_wildcard_and_bare_wildcard() {
        let consumer = parse_type("java.util.function.Consumer<? super Number>", &[]).unwrap();
        let (text, _) = render(&consumer);
        assert_eq!(text, "Consumer<? super Number>");
        let (text, _) = render(&parse_type("java.lang.Class<?>", &[]).unwrap());
        assert_eq!(text, "Class<?>");
    }

    #[test]
    fn test_simple_generic_base_not_imported() {
        let (text, imports) = render(&parse_type("List<String>", &[]).unwrap());
        assert_eq!(text, "List<String>");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_multi_dimensional_array() {
        let (text, _) = render(&parse_type("byte [ ] [ ]", &[]).unwrap());
        assert_eq!(text, "byte[][]");
    }

    #[test]
    fn test_errors() {
        assert!(parse_type("", &[]).is_err());
        assert!(parse_type("java.util.List<", &[]).is_err());
        assert!(parse_type("java.util.List<String", &[]).is_err());
        assert!(parse_type("int[", &[]).is_err());
        assert!(parse_type("1abc", &[]).is_err());
        assert!(parse_type("String extra", &[]).is_err());
        assert!(parse_type("java..List", &[]).is_err());
        assert!(parse_type("java.util.List<? extendsFoo>", &[]).is_err());
        assert_eq!(
            parse_type("int<String>", &[]).unwrap_err(),
            "'int' cannot take type arguments"
        );
    }

    #[test]
    fn test_type_param_with_bounds() {
        let declared = vars(&["T"]);
        let param =
            parse_type_param("T extends java.lang.Number & java.lang.Comparable<T>", &declared)
                .unwrap();
        let mut writer = Writer::nested("com.example");
        param.write(&mut writer);
        assert_eq!(writer.body(), "T extends Number & Comparable<T>");
    }

    #[test]
    fn test_type_param_name() {
        assert_eq!(type_param_name("K extends Comparable<K>"), "K");
        assert_eq!(type_param_name("V"), "V");
        assert_eq!(type_param_name("   "), "");
    }
}
