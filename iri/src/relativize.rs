//! Relativization of IRIs against a base IRI.

use crate::resolve::Oxiri;
use crate::{Result, UriError};

/// A relativizer can be used to relativize multiple IRIs against the same base.
///
/// The produced references are conservative:
/// they are only produced when resolving them against the base
/// gives back the original IRI.
#[derive(Clone, Debug)]
pub struct Relativizer {
    base: String,
    directory_end: Option<usize>,
    parent_end: Option<usize>,
}

impl Relativizer {
    /// Build a [`Relativizer`] for the given base.
    ///
    /// Relative references produced by this [`Relativizer`] will contain at most one `../`.
    ///
    /// # Errors
    /// Fails if `base` is not an absolute IRI.
    pub fn new(base: &str) -> Result<Self> {
        let parsed = Oxiri::parse(base).map_err(|e| UriError::syntax(base, e))?;
        let document_end = base.find('#').unwrap_or(base.len());
        let path_begin = parsed.scheme().len()
            + 1
            + parsed.authority().map(|a| a.len() + 2).unwrap_or(0);
        let path_end = path_begin + parsed.path().len();
        let path = &base[path_begin..path_end];
        let (directory_end, parent_end) = if path.starts_with('/') {
            let directory_end = path.rfind('/').map(|i| path_begin + i + 1);
            let parent_end = directory_end
                .filter(|end| *end > path_begin + 1)
                .and_then(|end| base[path_begin..end - 1].rfind('/'))
                .map(|i| path_begin + i + 1);
            (directory_end, parent_end)
        } else {
            (None, None)
        };
        Ok(Relativizer {
            base: base[..document_end].to_string(),
            directory_end,
            parent_end,
        })
    }

    /// The base of this relativizer, without its fragment identifier.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Relativize `iri`, if a reasonable relative reference exists.
    pub fn relativize(&self, iri: &str) -> Option<String> {
        let document = self.base();
        if iri == document {
            return Some(String::new());
        }
        if let Some(fragment) = iri.strip_prefix(document) {
            if fragment.starts_with('#') {
                return Some(fragment.to_string());
            }
        }
        if let Some(suffix) = self
            .directory_end
            .and_then(|end| iri.strip_prefix(&document[..end]))
        {
            if suffix.is_empty() {
                return Some("./".to_string());
            }
            if is_safe_path_suffix(suffix) {
                return Some(suffix.to_string());
            }
        }
        if let Some(suffix) = self
            .parent_end
            .and_then(|end| iri.strip_prefix(&document[..end]))
        {
            if is_safe_path_suffix(suffix) {
                return Some(format!("../{suffix}"));
            }
        }
        None
    }
}

/// Can `suffix` be appended to a directory and read back unchanged?
fn is_safe_path_suffix(suffix: &str) -> bool {
    if suffix.is_empty() || suffix.starts_with(|c: char| c == '/' || c == '?' || c == '#') {
        return false;
    }
    let path_end = suffix
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(suffix.len());
    let path = &suffix[..path_end];
    let first_segment = path.split('/').next().unwrap_or_default();
    if first_segment.contains(':') {
        return false;
    }
    path.split('/').all(|segment| segment != "." && segment != "..")
}
