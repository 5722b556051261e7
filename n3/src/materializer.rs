//! Turns parser [events](Event) into triples of a [`MutableGraph`].
//!
//! The materializer is an [`EventSink`], so it can be passed directly to
//! [`Parser::parse`](crate::parser::Parser::parse).
//! It expands prefixed names, resolves IRI references against the base,
//! maps operators and list markers to their RDF properties,
//! and allocates one blank node per label or anonymous node.
//!
//! Formulas, variables and `this` have no counterpart in RDF,
//! and are reported as errors.

mod _error;
pub use _error::*;
#[cfg(test)]
mod test;

use crate::parser::{Event, EventSink, ListMarker, Node, Operator};
use quill_api::graph::MutableGraph;
use quill_api::ns::{log as n3log, owl, rdf};
use quill_api::prefix::PrefixMap;
use quill_api::term::{BnodeId, Literal, Term};
use quill_iri::Resolver;
use std::collections::HashMap;

/// Materializer configuration.
#[derive(Clone, Debug, Default)]
pub struct MaterializerConfig {
    base: Option<String>,
    list_types: bool,
}

impl MaterializerConfig {
    /// Build a new default [`MaterializerConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The IRI against which relative IRI references are resolved
    /// (by default, none: relative references are errors).
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Whether list cells keep their `rdf:type rdf:List` triple
    /// (by default, they do not).
    pub fn list_types(&self) -> bool {
        self.list_types
    }

    /// Transform a [`MaterializerConfig`] by setting [`base`](Self::base).
    pub fn with_base<T: Into<String>>(mut self, base: T) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Transform a [`MaterializerConfig`] by setting [`list_types`](Self::list_types).
    pub fn with_list_types(mut self, list_types: bool) -> Self {
        self.list_types = list_types;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum BnodeKey {
    Label(String),
    Anon(u64),
}

/// An [`EventSink`] inserting triples into a [`MutableGraph`].
pub struct Materializer<'g, G: ?Sized> {
    graph: &'g mut G,
    config: MaterializerConfig,
    prefixes: PrefixMap,
    bnodes: HashMap<BnodeKey, BnodeId>,
    resolver: Resolver,
    count: usize,
}

impl<'g, G: MutableGraph + ?Sized> Materializer<'g, G> {
    /// Build a materializer filling `graph`, with the default config.
    pub fn new(graph: &'g mut G) -> Self {
        Self::new_with_config(graph, MaterializerConfig::default())
    }

    /// Build a materializer filling `graph`, with the given config.
    pub fn new_with_config(graph: &'g mut G, config: MaterializerConfig) -> Self {
        Materializer {
            graph,
            config,
            prefixes: PrefixMap::new(),
            bnodes: HashMap::new(),
            resolver: Resolver::new(),
            count: 0,
        }
    }

    /// Borrow this materializer's configuration.
    pub fn config(&self) -> &MaterializerConfig {
        &self.config
    }

    /// The prefixes declared so far.
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// The number of triples actually added to the graph so far
    /// (triples that were already present are not counted).
    pub fn triple_count(&self) -> usize {
        self.count
    }
}

impl<G> Materializer<'_, G>
where
    G: MutableGraph + ?Sized,
    G::MutationError: Send + Sync,
{
    fn directive(&mut self, line: usize, name: &str, args: Vec<Node>) -> MResult<()> {
        if name != "prefix" {
            log::warn!("line {line}: ignoring directive @{name}");
            return Ok(());
        }
        let (prefix, iri) = match &args[..] {
            [Node::PrefixedName { prefix, local }, Node::Iri(iri)] if local.is_empty() => {
                (prefix, iri)
            }
            _ => {
                return Err(MaterializeError::BadNode {
                    line,
                    message: "@prefix expects a prefix and an IRI reference".to_string(),
                })
            }
        };
        let namespace = self.resolve(line, iri)?;
        self.prefixes
            .insert(prefix.as_str(), namespace.as_str())
            .map_err(|err| MaterializeError::BadNode {
                line,
                message: err.to_string(),
            })?;
        self.graph
            .set_prefix(prefix, &namespace)
            .map_err(|err| MaterializeError::graph(line, err))?;
        log::trace!("@prefix {prefix}: <{namespace}>");
        Ok(())
    }

    fn quad(&mut self, line: usize, subject: Node, predicate: Node, object: Node) -> MResult<()> {
        let (predicate, swap) = match predicate {
            Node::Operator(Operator::A) => {
                if object == Node::List(ListMarker::Class) && !self.config.list_types {
                    return Ok(());
                }
                (rdf::type_.term(), false)
            }
            Node::Operator(Operator::SameAs) => (owl::sameAs.term(), false),
            Node::Operator(Operator::Implies) => (n3log::implies.term(), false),
            Node::Operator(Operator::ImpliedBy) => (n3log::implies.term(), true),
            Node::Operator(Operator::Means) => (n3log::means.term(), false),
            Node::List(ListMarker::First) => (rdf::first.term(), false),
            Node::List(ListMarker::Rest) => (rdf::rest.term(), false),
            Node::Iri(_) | Node::PrefixedName { .. } => {
                (Term::iri(self.iri(line, predicate)?), false)
            }
            Node::Variable(_) | Node::This => {
                return Err(MaterializeError::Unsupported {
                    line,
                    node: predicate.to_string(),
                })
            }
            other => {
                return Err(MaterializeError::BadPredicate {
                    line,
                    node: other.to_string(),
                })
            }
        };
        let (subject, object) = if swap {
            (object, subject)
        } else {
            (subject, object)
        };
        if subject.is_literal() {
            return Err(MaterializeError::LiteralSubject {
                line,
                node: subject.to_string(),
            });
        }
        let subject = self.term(line, subject)?;
        let object = self.term(line, object)?;
        log::trace!("{subject} {predicate} {object} .");
        let added = self
            .graph
            .insert(subject, predicate, object)
            .map_err(|err| MaterializeError::graph(line, err))?;
        if added {
            self.count += 1;
        }
        Ok(())
    }

    fn term(&mut self, line: usize, node: Node) -> MResult<Term> {
        match node {
            Node::Iri(_) | Node::PrefixedName { .. } => Ok(Term::iri(self.iri(line, node)?)),
            Node::BlankLabel(label) => self.bnode(line, BnodeKey::Label(label)),
            Node::Anon(n) => self.bnode(line, BnodeKey::Anon(n)),
            Node::Literal {
                lexical,
                lang,
                datatype,
            } => {
                let literal = match (lang, datatype) {
                    (Some(tag), _) => Literal::new_lang(lexical, tag),
                    (None, Some(datatype)) => match *datatype {
                        dt @ (Node::Iri(_) | Node::PrefixedName { .. }) => {
                            Literal::new_dt(lexical, self.iri(line, dt)?)
                        }
                        dt => {
                            return Err(MaterializeError::IllegalDatatype {
                                line,
                                node: dt.to_string(),
                            })
                        }
                    },
                    (None, None) => Literal::new(lexical),
                };
                Ok(Term::Literal(literal))
            }
            Node::List(ListMarker::Nil) => Ok(rdf::nil.term()),
            Node::List(ListMarker::Class) => Ok(rdf::List.term()),
            Node::List(ListMarker::First) => Ok(rdf::first.term()),
            Node::List(ListMarker::Rest) => Ok(rdf::rest.term()),
            Node::Formula(_) => Err(MaterializeError::Formula { line }),
            Node::Variable(_) | Node::This => Err(MaterializeError::Unsupported {
                line,
                node: node.to_string(),
            }),
            Node::Operator(op) => Err(MaterializeError::BadNode {
                line,
                message: format!("'{}' can only be used as a predicate", op.as_str()),
            }),
        }
    }

    fn iri(&mut self, line: usize, node: Node) -> MResult<String> {
        match node {
            Node::Iri(iri) => self.resolve(line, &iri),
            Node::PrefixedName { prefix, local } => match self.prefixes.get_namespace(&prefix) {
                Some(ns) => Ok(format!("{ns}{local}")),
                None => Err(MaterializeError::UndefinedPrefix { line, prefix }),
            },
            other => Err(MaterializeError::BadNode {
                line,
                message: format!("{other} is not an IRI"),
            }),
        }
    }

    fn resolve(&mut self, line: usize, iri: &str) -> MResult<String> {
        self.resolver
            .resolve(self.config.base.as_deref(), iri)
            .map_err(|source| MaterializeError::Iri { line, source })
    }

    fn bnode(&mut self, line: usize, key: BnodeKey) -> MResult<Term> {
        if let Some(id) = self.bnodes.get(&key) {
            return Ok(Term::bnode(id.clone()));
        }
        let id = self
            .graph
            .new_blank_node()
            .map_err(|err| MaterializeError::graph(line, err))?;
        self.bnodes.insert(key, id.clone());
        Ok(Term::bnode(id))
    }
}

impl<G> EventSink for Materializer<'_, G>
where
    G: MutableGraph + ?Sized,
    G::MutationError: Send + Sync,
{
    type Error = MaterializeError;

    fn event(&mut self, event: Event) -> Result<(), MaterializeError> {
        match event {
            Event::StartDocument => {
                log::debug!("materializing document");
                Ok(())
            }
            Event::EndDocument => {
                log::debug!("{} triple(s) added", self.count);
                Ok(())
            }
            Event::StartFormula { line, .. }
            | Event::EndFormula { line, .. }
            | Event::Directive {
                line,
                context: Some(_),
                ..
            }
            | Event::Quad {
                line,
                context: Some(_),
                ..
            } => Err(MaterializeError::Formula { line }),
            Event::Directive {
                line, name, args, ..
            } => self.directive(line, &name, args),
            Event::Quad {
                line,
                subject,
                predicate,
                object,
                ..
            } => self.quad(line, subject, predicate, object),
        }
    }
}

type MResult<T> = Result<T, MaterializeError>;
