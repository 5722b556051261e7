//! Resolution of relative references as per
//! [\[RFC 3986\]](https://tools.ietf.org/html/rfc3986),
//! with a few extensions inherited from N3 tooling.
//!
//! The general case is delegated to [`oxiri`].
//! On top of it, [`Resolver::resolve`] handles:
//! * the `"."` reference against `http:`, `https:` and `file:` bases,
//!   which is answered with the directory of the base, without parsing anything;
//! * bases made of a bare scheme (`eh:`), which are simply concatenated with the reference;
//! * opaque bases (`urn:isbn:123`), against which only fragments of `file:` IRIs can be resolved;
//! * `file:` results, which are [canonicalized](crate::file::canonicalize_file_iri).
//!
//! NB: parsing the base is the expensive part of resolution.
//! A [`Resolver`] can therefore remember the last base it parsed,
//! see [`BaseCache`].

use crate::file::{canonicalize_file_iri, is_file_iri};
use crate::{Result, UriError};
use std::borrow::Cow;

pub use oxiri::{Iri as Oxiri, IriRef as OxiriRef};

/// Resolve `relative` against `base`, without any caching.
///
/// See [`Resolver::resolve`] for details.
pub fn resolve(base: Option<&str>, relative: &str) -> Result<String> {
    Resolver::with_cache(NoCache).resolve(base, relative)
}

/// A strategy for remembering parsed bases between two resolutions.
///
/// This is purely an optimization:
/// a cache must never change the result of a resolution.
pub trait BaseCache {
    /// Return the parsed form of `base`, if it is known.
    fn lookup(&self, base: &str) -> Option<Oxiri<String>>;
    /// Remember the parsed form of `base`.
    fn store(&mut self, base: &str, parsed: &Oxiri<String>);
}

/// A [`BaseCache`] that remembers nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl BaseCache for NoCache {
    fn lookup(&self, _: &str) -> Option<Oxiri<String>> {
        None
    }

    fn store(&mut self, _: &str, _: &Oxiri<String>) {}
}

/// A one-slot [`BaseCache`], keyed by the literal base string.
#[derive(Clone, Debug, Default)]
pub struct LastBase {
    last: Option<(String, Oxiri<String>)>,
}

impl BaseCache for LastBase {
    fn lookup(&self, base: &str) -> Option<Oxiri<String>> {
        match &self.last {
            Some((key, parsed)) if key == base => Some(parsed.clone()),
            _ => None,
        }
    }

    fn store(&mut self, base: &str, parsed: &Oxiri<String>) {
        self.last = Some((base.to_string(), parsed.clone()));
    }
}

/// Resolves relative references, possibly remembering parsed bases.
///
/// A resolver is meant to be owned by a single parsing or writing session;
/// it is never shared behind the scene.
#[derive(Clone, Debug, Default)]
pub struct Resolver<C = LastBase> {
    cache: C,
}

impl Resolver<LastBase> {
    /// Build a resolver remembering the last base it parsed.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: BaseCache> Resolver<C> {
    /// Build a resolver with the given cache.
    pub fn with_cache(cache: C) -> Self {
        Resolver { cache }
    }

    /// Resolve `relative` against `base`.
    ///
    /// # Errors
    /// * [`UriError::NullBase`] if `relative` is not absolute and `base` is missing or empty;
    /// * [`UriError::Relative`] if `base` is opaque;
    /// * [`UriError::Syntax`] if either `relative` or `base` can not be parsed.
    pub fn resolve(&mut self, base: Option<&str>, relative: &str) -> Result<String> {
        if relative == "." {
            if let Some(base) = base.filter(|b| has_directory_shortcut(b)) {
                return Ok(directory_of(base).to_string());
            }
        }
        if is_file_iri(relative) {
            return Ok(canonicalize_file_iri(relative));
        }
        let rel = OxiriRef::parse(relative).map_err(|e| UriError::syntax(relative, e))?;
        if rel.is_absolute() {
            return Ok(relative.to_string());
        }
        let base = match base.map(strip_fragment) {
            Some(base) if !base.is_empty() => base,
            _ => return Err(UriError::NullBase),
        };
        if is_bare_scheme(base) {
            let joined = format!("{base}{relative}");
            return self.resolve(Some(base), &joined);
        }
        if is_opaque(base) {
            if is_file_iri(base) && relative.starts_with('#') {
                return Ok(format!("{base}{relative}"));
            }
            return Err(UriError::Relative {
                base: base.to_string(),
                relative: relative.to_string(),
            });
        }
        let base: Cow<str> = if is_file_iri(base) {
            Cow::Owned(base.replace(' ', "%20"))
        } else {
            Cow::Borrowed(base)
        };
        let parsed = match self.cache.lookup(&base) {
            Some(parsed) => parsed,
            None => {
                let parsed =
                    Oxiri::parse(base.to_string()).map_err(|e| UriError::syntax(&base, e))?;
                self.cache.store(&base, &parsed);
                parsed
            }
        };
        let resolved = parsed
            .resolve(relative)
            .map_err(|e| UriError::syntax(relative, e))?
            .into_inner();
        if is_file_iri(&resolved) {
            Ok(canonicalize_file_iri(&resolved))
        } else {
            Ok(resolved)
        }
    }
}

/// Return the scheme of `iri`, if it has a syntactically valid one.
pub fn scheme(iri: &str) -> Option<&str> {
    let end = iri.find(':')?;
    let candidate = &iri[..end];
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        .then_some(candidate)
}

/// Is `iri` made of a scheme and nothing else (e.g. `eh:`)?
pub fn is_bare_scheme(iri: &str) -> bool {
    scheme(iri).is_some_and(|s| s.len() + 1 == iri.len())
}

/// Is `iri` an absolute IRI with no hierarchical part (e.g. `urn:isbn:123`)?
pub fn is_opaque(iri: &str) -> bool {
    match scheme(iri) {
        Some(s) => !iri[s.len() + 1..].starts_with('/'),
        None => false,
    }
}

/// The directory of `base`, i.e. `base` truncated after the last `/` of its path.
///
/// If the path contains no `/`, `base` is returned unchanged.
pub fn directory_of(base: &str) -> &str {
    let mut path_start = scheme(base).map(|s| s.len() + 1).unwrap_or(0);
    if base[path_start..].starts_with("//") {
        path_start += 2;
        match base[path_start..].find('/') {
            Some(i) => path_start += i,
            None => return base,
        }
    }
    let path_end = base[path_start..]
        .find(|c: char| c == '?' || c == '#')
        .map(|i| i + path_start)
        .unwrap_or(base.len());
    match base[path_start..path_end].rfind('/') {
        Some(i) => &base[..path_start + i + 1],
        None => base,
    }
}

fn has_directory_shortcut(base: &str) -> bool {
    matches!(
        scheme(base).map(str::to_ascii_lowercase).as_deref(),
        Some("http" | "https" | "file")
    )
}

fn strip_fragment(iri: &str) -> &str {
    match iri.find('#') {
        Some(i) => &iri[..i],
        None => iri,
    }
}

//

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/a/b", Some("http"); "http")]
    #[test_case("eh:", Some("eh"); "bare")]
    #[test_case("urn:isbn:123", Some("urn"); "urn")]
    #[test_case("x+y.z-w:foo", Some("x+y.z-w"); "all scheme chars")]
    #[test_case("foo/bar:baz", None; "slash before colon")]
    #[test_case("1a:b", None; "leading digit")]
    #[test_case("relative", None; "no colon")]
    fn scheme_of(iri: &str, expected: Option<&str>) {
        assert_eq!(scheme(iri), expected);
    }

    #[test_case("http://example.org/a/b", "http://example.org/a/"; "file in dir")]
    #[test_case("http://example.org/a/", "http://example.org/a/"; "dir")]
    #[test_case("http://example.org/a/b?x/y#z/t", "http://example.org/a/"; "query and fragment")]
    #[test_case("http://example.org", "http://example.org"; "no path")]
    #[test_case("file:.", "file:."; "no slash")]
    #[test_case("file:///tmp/x.n3", "file:///tmp/"; "file")]
    fn directory(base: &str, expected: &str) {
        assert_eq!(directory_of(base), expected);
    }

    #[test]
    fn opaque_and_bare() {
        assert!(is_opaque("urn:isbn:123"));
        assert!(is_opaque("eh:"));
        assert!(!is_opaque("http://example.org/"));
        assert!(!is_opaque("file:/tmp"));
        assert!(is_bare_scheme("eh:"));
        assert!(!is_bare_scheme("eh:x"));
    }

    #[test]
    fn last_base_cache() {
        let mut cache = LastBase::default();
        assert!(cache.lookup("http://a/").is_none());
        let parsed = Oxiri::parse("http://a/".to_string()).unwrap();
        cache.store("http://a/", &parsed);
        assert_eq!(cache.lookup("http://a/").unwrap().as_str(), "http://a/");
        assert!(cache.lookup("http://b/").is_none());
        let parsed = Oxiri::parse("http://b/".to_string()).unwrap();
        cache.store("http://b/", &parsed);
        assert!(cache.lookup("http://a/").is_none());
    }

    #[test]
    fn cache_does_not_change_results() {
        let mut cached = Resolver::new();
        for (rel, _) in crate::test::RELATIVE_IRIS {
            let base = Some("http://a/b/c/d;p?q");
            assert_eq!(cached.resolve(base, rel), resolve(base, rel));
        }
    }
}
