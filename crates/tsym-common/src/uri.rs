//! Path and `file://` URI helpers.
//!
//! Indexed locations carry file names exactly as the syntax provider reported
//! them. These helpers turn them into forward-slash paths, URIs, or paths
//! relative to a workspace root for display.

use std::path::Path;

const FILE_SCHEME: &str = "file://";

/// Replace Windows separators with `/`.
pub fn normalize_path(file: &str) -> String {
    file.replace('\\', "/")
}

/// Build a `file://` URI for `file`, resolved against `root` when given.
pub fn path_to_uri(root: Option<&Path>, file: &str) -> String {
    let mut uri = String::from(FILE_SCHEME);
    if cfg!(windows) {
        uri.push('/');
    }
    let resolved = match root {
        Some(root) => root.join(file).to_string_lossy().into_owned(),
        None => file.to_string(),
    };
    uri.push_str(&normalize_path(&resolved));
    uri
}

/// Strip the `file://` scheme. Anything else is returned unchanged.
pub fn uri_to_path(uri: &str) -> String {
    let Some(rest) = uri.strip_prefix(FILE_SCHEME) else {
        return uri.to_string();
    };
    if cfg!(windows) {
        rest.strip_prefix('/').unwrap_or(rest).replace("%3A", ":")
    } else {
        rest.to_string()
    }
}

/// Express `uri` (a URI or plain path) relative to `root`.
///
/// A `uri` outside `root` keeps its full path, minus leading slashes.
pub fn uri_to_relative_path(uri: &str, root: &str) -> String {
    let path = uri_to_path(uri);
    let root = normalize_path(root);
    let path = normalize_path(&path);
    let relative = path.strip_prefix(root.as_str()).unwrap_or(&path);
    relative.trim_start_matches('/').to_string()
}

/// Like [`uri_to_relative_path`] but returns a `file://` URI.
pub fn uri_to_relative_uri(uri: &str, root: &str) -> String {
    path_to_uri(None, &uri_to_relative_path(uri, root))
}

/// Whether `file` lives under one of the dependency directory markers
/// (for example `node_modules`).
pub fn is_dependency_path<S: AsRef<str>>(file: &str, markers: &[S]) -> bool {
    let file = normalize_path(file);
    markers.iter().any(|marker| {
        let marker: &str = marker.as_ref();
        !marker.is_empty() && file.contains(marker)
    })
}
