//! Shared helpers for filesystem operations.

/// Resolve a caller-supplied path against the session home directory.
///
/// Empty paths resolve to the root, absolute paths pass through unchanged,
/// URI-form paths (`hdfs://host:port/a/b`) are reduced to their path
/// component, and anything else is taken relative to `home`. No legality
/// validation happens here; a bad path surfaces as whatever error the
/// gateway returns.
pub(crate) fn resolve_path(home: &str, path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    if path.starts_with('/') {
        return path.to_string();
    }
    if path.contains(':') {
        return uri_path(path);
    }
    format!("{}/{}", home, path)
}

/// Extract the path component of a URI-form path.
fn uri_path(uri: &str) -> String {
    if let Some(idx) = uri.find("://") {
        // Skip the authority (host and optional port).
        let after_authority = &uri[idx + 3..];
        return match after_authority.find('/') {
            Some(slash) => after_authority[slash..].to_string(),
            None => "/".to_string(),
        };
    }

    // Scheme with no authority, e.g. "scheme:/a/b".
    let rest = match uri.find(':') {
        Some(idx) => &uri[idx + 1..],
        None => uri,
    };
    if rest.is_empty() {
        "/".to_string()
    } else if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{}", rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_identity() {
        assert_eq!(resolve_path("/user/hdfs", "/"), "/");
        assert_eq!(resolve_path("/user/hdfs", "/a/b"), "/a/b");
        assert_eq!(resolve_path("", "/path/to/file"), "/path/to/file");
    }

    #[test]
    fn test_relative_path_uses_home() {
        assert_eq!(resolve_path("/user/hdfs", "a/b"), "/user/hdfs/a/b");
        assert_eq!(resolve_path("/user/hdfs", "file.txt"), "/user/hdfs/file.txt");
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(resolve_path("/user/hdfs", ""), "/");
        assert_eq!(resolve_path("", ""), "/");
    }

    #[test]
    fn test_uri_form_path() {
        assert_eq!(resolve_path("/user/hdfs", "hdfs://host/a/b"), "/a/b");
        assert_eq!(resolve_path("/user/hdfs", "hdfs://host:8020/a/b"), "/a/b");
        assert_eq!(resolve_path("/user/hdfs", "hdfs://host"), "/");
        assert_eq!(resolve_path("/user/hdfs", "scheme:/a/b"), "/a/b");
    }

    #[test]
    fn test_empty_home_degrades() {
        // A failed home-directory fetch leaves home empty; relative paths
        // then resolve straight under the root.
        assert_eq!(resolve_path("", "p"), "/p");
    }
}
