// this module is transparently re-exported by its parent `term`
use std::fmt;

/// An RDF literal: a lexical form,
/// qualified by either a language tag, a datatype IRI, or nothing.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    lexical: String,
    qualifier: Qualifier,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
enum Qualifier {
    Plain,
    Lang(String),
    Datatype(String),
}

impl Literal {
    /// A plain literal, with neither datatype nor language tag.
    pub fn new<T: Into<String>>(lexical: T) -> Self {
        Literal {
            lexical: lexical.into(),
            qualifier: Qualifier::Plain,
        }
    }

    /// A language-tagged literal.
    pub fn new_lang<T: Into<String>, U: Into<String>>(lexical: T, tag: U) -> Self {
        Literal {
            lexical: lexical.into(),
            qualifier: Qualifier::Lang(tag.into()),
        }
    }

    /// A datatyped literal; `datatype` must be an absolute IRI.
    pub fn new_dt<T: Into<String>, U: Into<String>>(lexical: T, datatype: U) -> Self {
        Literal {
            lexical: lexical.into(),
            qualifier: Qualifier::Datatype(datatype.into()),
        }
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&str> {
        match &self.qualifier {
            Qualifier::Lang(tag) => Some(tag),
            _ => None,
        }
    }

    /// The datatype IRI of this literal, if any.
    pub fn datatype(&self) -> Option<&str> {
        match &self.qualifier {
            Qualifier::Datatype(dt) => Some(dt),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        match &self.qualifier {
            Qualifier::Plain => Ok(()),
            Qualifier::Lang(tag) => write!(f, "@{tag}"),
            Qualifier::Datatype(dt) => write!(f, "^^<{dt}>"),
        }
    }
}
