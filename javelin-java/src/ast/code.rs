//! Free-form method and constructor bodies.

use javelin_codegen::{Node, TypeRef, Writer};

/// A statement inside a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A single line at the current indentation.
    Line(String),
    /// An empty line.
    Blank,
    /// A header line, an indented body and a closing line.
    Block {
        header: String,
        body: CodeBlock,
        close: String,
    },
    /// Registers a type used by the code without writing anything.
    Reference(TypeRef),
    /// Requests an import by fully-qualified name without writing anything.
    Import(String),
}

/// An ordered list of statements.
///
/// Lines are written as given; type names mentioned in them are not
/// detected, so code that uses an external type declares it with
/// [`CodeBlock::reference`].
///
/// # Example
///
/// ```
/// use javelin_java::{CodeBlock, TypeRef};
///
/// let body = CodeBlock::new()
///     .reference(TypeRef::new("ArrayList", "java.util"))
///     .line("List<String> names = new ArrayList<>();")
///     .block(
///         "for (User user : users) {",
///         CodeBlock::new().line("names.add(user.getName());"),
///     )
///     .line("return names;");
/// assert_eq!(body.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    statements: Vec<Statement>,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.statements.push(Statement::Line(line.into()));
        self
    }

    /// Add raw content, one statement per line. Empty lines become blanks.
    pub fn lines(mut self, content: &str) -> Self {
        for line in content.lines() {
            if line.trim().is_empty() {
                self.statements.push(Statement::Blank);
            } else {
                self.statements.push(Statement::Line(line.to_string()));
            }
        }
        self
    }

    pub fn blank(mut self) -> Self {
        self.statements.push(Statement::Blank);
        self
    }

    /// Add a nested block closed by `}`.
    pub fn block(self, header: impl Into<String>, body: CodeBlock) -> Self {
        self.block_with_close(header, body, "}")
    }

    /// Add a nested block with a custom closing line, e.g. `} while (busy);`.
    pub fn block_with_close(
        mut self,
        header: impl Into<String>,
        body: CodeBlock,
        close: impl Into<String>,
    ) -> Self {
        self.statements.push(Statement::Block {
            header: header.into(),
            body,
            close: close.into(),
        });
        self
    }

    /// Register a type used by this code.
    pub fn reference(mut self, ty: TypeRef) -> Self {
        self.statements.push(Statement::Reference(ty));
        self
    }

    /// Request an import used by this code.
    pub fn import(mut self, qualified: impl Into<String>) -> Self {
        self.statements.push(Statement::Import(qualified.into()));
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl From<&str> for CodeBlock {
    fn from(content: &str) -> Self {
        Self::new().lines(content)
    }
}

impl Node for Statement {
    fn write(&self, writer: &mut Writer) {
        match self {
            Self::Line(line) => {
                writer.write_line(line);
            }
            Self::Blank => {
                writer.blank_line();
            }
            Self::Block {
                header,
                body,
                close,
            } => {
                writer.write_line(header).indent().write_node(body).dedent();
                writer.write_line(close);
            }
            Self::Reference(ty) => {
                writer.add_reference(ty);
            }
            Self::Import(name) => {
                writer.add_import(name.as_str());
            }
        }
    }
}

impl Node for CodeBlock {
    fn write(&self, writer: &mut Writer) {
        for statement in &self.statements {
            writer.write_node(statement);
        }
    }
}
