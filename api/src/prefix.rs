//! N3 and related languages use prefixes to shorten IRIs.
//! This module provides the [`PrefixMap`] type to handle them.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Production of N3's `NSNAME` (an optional prefix, without the trailing `:`).
    ///
    /// # Rule
    ///
    /// `NSNAME ::= ( [A-Za-z_] [A-Za-z0-9_-]* )?`
    /// (extended to non-ASCII letters and digits)
    static ref PREFIX: Regex = Regex::new(r"^([\p{Alphabetic}_][\p{Alphabetic}\p{Nd}_\-]*)?$").unwrap();
}

/// Is `prefix` a valid N3 prefix (without the trailing `:`)?
///
/// NB: the empty string is a valid prefix.
pub fn is_valid_prefix(prefix: &str) -> bool {
    PREFIX.is_match(prefix)
}

/// This error is raised when trying to declare an invalid prefix.
#[derive(Debug, Error)]
#[error("The given prefix '{0}' is not a valid N3 prefix")]
pub struct InvalidPrefix(pub String);

/// A prefix map associates prefixes to namespaces.
///
/// Prefixes are kept in declaration order;
/// declaring a prefix again replaces its namespace in place.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixMap {
    pairs: Vec<(String, String)>,
}

impl PrefixMap {
    /// An empty prefix map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `prefix` to `namespace`, replacing any previous namespace.
    ///
    /// # Errors
    /// Fails if `prefix` is not a valid N3 prefix.
    pub fn insert<P, N>(&mut self, prefix: P, namespace: N) -> Result<(), InvalidPrefix>
    where
        P: Into<String>,
        N: Into<String>,
    {
        let prefix = prefix.into();
        if !is_valid_prefix(&prefix) {
            return Err(InvalidPrefix(prefix));
        }
        let namespace = namespace.into();
        match self.pairs.iter_mut().find(|(p, _)| *p == prefix) {
            Some(pair) => pair.1 = namespace,
            None => self.pairs.push((prefix, namespace)),
        }
        Ok(())
    }

    /// Return the namespace associated to this prefix, if any.
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    /// Return the prefix associated to this namespace, if any.
    pub fn get_prefix(&self, namespace: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(_, ns)| ns == namespace)
            .map(|(p, _)| p.as_str())
    }

    /// Return a prefix-suffix pair describing the given IRI, if any.
    pub fn get_prefixed_pair<'s>(&'s self, iri: &'s str) -> Option<(&'s str, &'s str)> {
        self.get_checked_prefixed_pair(iri, |_| true)
    }

    /// Return a prefix-suffix pair describing the given IRI, if any,
    /// guaranteeing that the suffix will satisfy the given predicate.
    ///
    /// When several namespaces match, the longest one wins.
    pub fn get_checked_prefixed_pair<'s, F>(
        &'s self,
        iri: &'s str,
        suffix_check: F,
    ) -> Option<(&'s str, &'s str)>
    where
        F: Fn(&str) -> bool,
    {
        let mut matched = 0;
        let mut found = None;
        for (p, n) in &self.pairs {
            if iri.starts_with(n.as_str()) && (n.len() > matched || found.is_none()) {
                let suffix = &iri[n.len()..];
                if suffix_check(suffix) {
                    matched = n.len();
                    found = Some((p.as_str(), suffix));
                }
            }
        }
        found
    }

    /// Iterate over the `(prefix, namespace)` pairs, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// The number of prefixes in this map.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is this map empty?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
