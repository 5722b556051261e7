//! Canonicalization of `file:` IRIs.
//!
//! Documents loaded from the local filesystem are often given bases like
//! `file:data.n3` or `file:/tmp/data.n3`,
//! which are not suitable for resolving relative references.
//! [`canonicalize_file_iri`] turns them into the `file:///absolute/path` form.

use std::path::Path;

/// Does `iri` start with the `file:` scheme (case insensitive)?
pub fn is_file_iri(iri: &str) -> bool {
    iri.get(..5)
        .is_some_and(|s| s.eq_ignore_ascii_case("file:"))
}

/// Canonicalize a `file:` IRI.
///
/// * `file:name` is made absolute against the current working directory;
/// * `file:/abs/name` becomes `file:///abs/name`;
/// * `file://host/name` keeps its authority;
/// * spaces are percent-encoded;
/// * a trailing `/` is added if the IRI denotes an existing directory.
///
/// IRIs with another scheme are returned unchanged.
pub fn canonicalize_file_iri(iri: &str) -> String {
    if !is_file_iri(iri) {
        return iri.to_string();
    }
    let rest = &iri[5..];
    let mut ret = if let Some(abs) = rest.strip_prefix("///") {
        format!("file:///{abs}")
    } else if rest.starts_with("//") {
        format!("file:{rest}")
    } else if let Some(abs) = rest.strip_prefix('/') {
        format!("file:///{abs}")
    } else {
        let rel = match rest {
            "." | "./" => "",
            _ => rest.strip_prefix("./").unwrap_or(rest),
        };
        let cwd = working_directory();
        if cwd.is_empty() {
            format!("file:///{rel}")
        } else {
            format!("file:///{cwd}/{rel}")
        }
    };
    ret = ret.replace(' ', "%20");
    if !ret.ends_with('/') {
        if let Some(path) = local_path(&ret) {
            if Path::new(&path).is_dir() {
                ret.push('/');
            }
        }
    }
    ret
}

/// The current working directory, with forward slashes and no leading or trailing slash.
fn working_directory() -> String {
    match std::env::current_dir() {
        Ok(path) => path
            .to_string_lossy()
            .replace('\\', "/")
            .trim_matches('/')
            .to_string(),
        Err(err) => {
            log::warn!("Could not determine the working directory: {err}");
            String::new()
        }
    }
}

/// The local path denoted by a canonical `file:///` IRI.
fn local_path(iri: &str) -> Option<String> {
    let path = iri.strip_prefix("file://")?;
    if !path.starts_with('/') {
        return None;
    }
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    Some(path[..end].replace("%20", " "))
}
