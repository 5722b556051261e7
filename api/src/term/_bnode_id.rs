// this module is transparently re-exported by its parent `term`
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// A production of N3's blank node labels (without the leading `_:`).
    ///
    /// # Rule
    ///
    /// `LABEL ::= (PN_CHARS_U | [0-9]) (PN_CHARS | '-')*`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]*
      $
    ").unwrap();
}

/// The identifier of a blank node (without the leading `_:`).
///
/// Identifiers are only meaningful within the graph that produced them.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId(String);

impl BnodeId {
    /// Build a blank node identifier, checking that it is a valid N3 label.
    pub fn new<T: Into<String>>(id: T) -> Result<Self, InvalidBnodeId> {
        let id = id.into();
        if BNODE_ID.is_match(&id) {
            Ok(BnodeId(id))
        } else {
            Err(InvalidBnodeId(id))
        }
    }

    /// Build a blank node identifier without checking it.
    ///
    /// Callers must ensure that `id` is a valid label,
    /// otherwise serializers may produce invalid output.
    pub fn new_unchecked<T: Into<String>>(id: T) -> Self {
        BnodeId(id.into())
    }

    /// The identifier as a `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BnodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// This error is raised when trying to build an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' is not a valid N3 label")]
pub struct InvalidBnodeId(pub String);
