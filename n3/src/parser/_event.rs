// this module is transparently re-exported by its parent `parser`
use std::fmt;

/// The events produced by the [`Parser`](super::Parser).
///
/// `context` is `None` at the top level of the document,
/// and the identifier of the enclosing formula inside `{ }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Always the first event.
    StartDocument,
    /// Always the last event (unless an error occurred).
    EndDocument,
    /// A formula `{` was opened.
    StartFormula {
        /// Line of the opening brace
        line: usize,
        /// Identifier of the formula
        context: Node,
    },
    /// A formula was closed by `}`.
    EndFormula {
        /// Line of the closing brace
        line: usize,
        /// Identifier of the formula
        context: Node,
    },
    /// A directive such as `@prefix p: <ns> .`
    Directive {
        /// Line of the directive
        line: usize,
        /// Name of the directive, without `@`
        name: String,
        /// Arguments of the directive
        args: Vec<Node>,
        /// Enclosing formula, if any
        context: Option<Node>,
    },
    /// A statement.
    Quad {
        /// Line where the statement was completed
        line: usize,
        /// Subject of the statement
        subject: Node,
        /// Predicate of the statement
        predicate: Node,
        /// Object of the statement
        object: Node,
        /// Enclosing formula, if any
        context: Option<Node>,
    },
}

impl Event {
    /// The context of this event, if any.
    pub fn context(&self) -> Option<&Node> {
        match self {
            Event::StartDocument | Event::EndDocument => None,
            Event::StartFormula { context, .. } | Event::EndFormula { context, .. } => {
                Some(context)
            }
            Event::Directive { context, .. } | Event::Quad { context, .. } => context.as_ref(),
        }
    }
}

/// A node of N3 syntax, as it appears in [events](Event).
///
/// Nodes are not resolved:
/// IRI references may be relative, and prefixed names are not expanded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// An IRI reference, possibly relative
    Iri(String),
    /// A prefixed name
    PrefixedName {
        /// The prefix, without `:`
        prefix: String,
        /// The local part
        local: String,
    },
    /// A blank node label, without `_:`
    BlankLabel(String),
    /// A literal; numbers are literals with an `xsd` datatype
    Literal {
        /// The lexical form
        lexical: String,
        /// The language tag, if any
        lang: Option<String>,
        /// The datatype, if any
        datatype: Option<Box<Node>>,
    },
    /// A variable, without `?`
    Variable(String),
    /// An anonymous node, produced by `[ ]`, a list cell or a path
    Anon(u64),
    /// An anonymous formula, produced by `{ }`
    Formula(u64),
    /// The `this` keyword
    This,
    /// One of the operators standing for a predicate
    Operator(Operator),
    /// One of the nodes that list sugar expands to
    List(ListMarker),
}

impl Node {
    /// Build a [`Node::Iri`].
    pub fn iri<T: Into<String>>(iri: T) -> Self {
        Node::Iri(iri.into())
    }

    /// Build a plain [`Node::Literal`].
    pub fn plain<T: Into<String>>(lexical: T) -> Self {
        Node::Literal {
            lexical: lexical.into(),
            lang: None,
            datatype: None,
        }
    }

    /// Is this node a literal?
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal { .. })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::PrefixedName { prefix, local } => write!(f, "{prefix}:{local}"),
            Node::BlankLabel(label) => write!(f, "_:{label}"),
            Node::Literal {
                lexical,
                lang,
                datatype,
            } => {
                write!(f, "{lexical:?}")?;
                if let Some(lang) = lang {
                    write!(f, "@{lang}")?;
                }
                if let Some(datatype) = datatype {
                    write!(f, "^^{datatype}")?;
                }
                Ok(())
            }
            Node::Variable(name) => write!(f, "?{name}"),
            Node::Anon(n) => write!(f, "=:{n}"),
            Node::Formula(n) => write!(f, "{{}}:{n}"),
            Node::This => write!(f, "this"),
            Node::Operator(op) => write!(f, "{}", op.as_str()),
            Node::List(marker) => write!(f, "{}", marker.as_str()),
        }
    }
}

/// N3 operators, which stand for a predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `a`
    A,
    /// `=`
    SameAs,
    /// `=>`
    Implies,
    /// `<=`, which is `=>` with subject and object swapped
    ImpliedBy,
    /// `<=>`
    Means,
}

impl Operator {
    /// The operator as written in N3.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::A => "a",
            Operator::SameAs => "=",
            Operator::Implies => "=>",
            Operator::ImpliedBy => "<=",
            Operator::Means => "<=>",
        }
    }
}

/// The nodes produced by list sugar `( )`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListMarker {
    /// The empty list
    Nil,
    /// The predicate linking a cell to its item
    First,
    /// The predicate linking a cell to the next one
    Rest,
    /// The class of list cells
    Class,
}

impl ListMarker {
    /// A human readable name for this marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMarker::Nil => "()",
            ListMarker::First => "rdf:first",
            ListMarker::Rest => "rdf:rest",
            ListMarker::Class => "rdf:List",
        }
    }
}
