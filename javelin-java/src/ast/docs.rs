//! Javadoc comment assembly.

use javelin_codegen::{Node, Writer};

/// A Javadoc comment: free text followed by block tags.
///
/// Tags are written in the order `@param`, `@return`, `@throws`, with a
/// ` *` separator line between the text and the first tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Javadoc {
    pub text: Option<String>,
    pub params: Vec<(String, String)>,
    pub returns: Option<String>,
    pub throws: Vec<(String, String)>,
}

impl Javadoc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.params.push((name.into(), text.into()));
        self
    }

    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.returns = Some(text.into());
        self
    }

    pub fn throws(mut self, ty: impl Into<String>, text: impl Into<String>) -> Self {
        self.throws.push((ty.into(), text.into()));
        self
    }

    pub fn has_tags(&self) -> bool {
        !self.params.is_empty() || self.returns.is_some() || !self.throws.is_empty()
    }

    /// True when the free text has at least one non-blank line.
    pub fn has_text(&self) -> bool {
        self.text
            .as_deref()
            .is_some_and(|text| text.lines().any(|line| !line.trim().is_empty()))
    }

    /// True when nothing would be written.
    pub fn is_empty(&self) -> bool {
        !self.has_text() && !self.has_tags()
    }

    fn contents(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        if let Some(text) = self.text.as_deref().filter(|_| self.has_text()) {
            lines.extend(text.trim_matches('\n').lines().map(String::from));
        }
        if self.has_text() && self.has_tags() {
            lines.push(String::new());
        }
        for (name, text) in &self.params {
            lines.push(format!("@param {} {}", name, text));
        }
        if let Some(text) = &self.returns {
            lines.push(format!("@return {}", text));
        }
        for (ty, text) in &self.throws {
            lines.push(format!("@throws {} {}", ty, text));
        }
        lines.join("\n")
    }
}

/// Writes nothing when the comment is empty.
impl Node for Javadoc {
    fn write(&self, writer: &mut Writer) {
        if !self.is_empty() {
            writer.write_doc(&self.contents());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(doc: &Javadoc) -> String {
        let mut writer = Writer::nested("p");
        writer.write_node(doc);
        writer.body().to_string()
    }

    #[test]
    fn test_empty_writes_nothing() {
        assert_eq!(text(&Javadoc::new()), "");
    }

    #[test]
    fn test_text_only() {
        assert_eq!(
            text(&Javadoc::new().text("Creates a user.")),
            "/**\n * Creates a user.\n */\n"
        );
    }

    #[test]
    fn test_tags_without_text() {
        let doc = Javadoc::new().param("id", "the user id");
        assert_eq!(text(&doc), "/**\n * @param id the user id\n */\n");
    }

    #[test]
    fn test_text_and_tags() {
        let doc = Javadoc::new()
            .text("Loads a user.")
            .param("id", "the user id")
            .returns("the user")
            .throws("IOException", "if the store is unreachable");
        assert_eq!(
            text(&doc),
            "/**\n * Loads a user.\n *\n * @param id the user id\n * @return the user\n * @throws IOException if the store is unreachable\n */\n"
        );
    }

    #[test]
    fn test_blank_text_adds_no_separator() {
        let doc = Javadoc::new().text("").param("a", "aa");
        assert_eq!(text(&doc), "/**\n * @param a aa\n */\n");
        assert!(Javadoc::new().text("  \n").is_empty());
    }
}
