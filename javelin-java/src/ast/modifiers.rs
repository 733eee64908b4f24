//! Access levels and modifier keywords.

use std::{collections::BTreeSet, fmt, str::FromStr};

use javelin_codegen::{Node, Writer};

/// Access level of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    /// No access keyword.
    PackagePrivate,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::PackagePrivate => "",
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            "package" | "package-private" => Ok(Self::PackagePrivate),
            other => Err(format!("unknown visibility '{}'", other)),
        }
    }
}

/// Writes the keyword followed by a space, or nothing.
impl Node for Visibility {
    fn write(&self, writer: &mut Writer) {
        let keyword = self.as_str();
        if !keyword.is_empty() {
            writer.write(keyword).write(" ");
        }
    }
}

/// A modifier keyword.
///
/// Declaration order is the order modifiers are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Abstract,
    Final,
    Static,
    Default,
    Synchronized,
    Native,
    Transient,
    Volatile,
}

impl Modifier {
    pub const ALL: [Modifier; 8] = [
        Self::Abstract,
        Self::Final,
        Self::Static,
        Self::Default,
        Self::Synchronized,
        Self::Native,
        Self::Transient,
        Self::Volatile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Final => "final",
            Self::Static => "static",
            Self::Default => "default",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown modifier '{}'", s))
    }
}

/// A set of modifiers, rendered in a fixed order regardless of insertion.
///
/// Combinations are not checked: `abstract final` is written as asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(BTreeSet<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, modifier: Modifier) -> Self {
        self.0.insert(modifier);
        self
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0.insert(modifier);
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Writes each keyword followed by a space.
impl Node for Modifiers {
    fn write(&self, writer: &mut Writer) {
        for modifier in self.iter() {
            writer.write(modifier.as_str()).write(" ");
        }
    }
}
