//! Dependency descriptors and identity naming.
//!
//! An identity is either a `organization/project` shorthand for a hosted
//! repository, or any location `git` can fetch from (URL, local path).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::{GlueError, GlueResult};

/// Host used to expand `organization/project` shorthands.
pub const DEFAULT_GIT_HOST: &str = "github.com";

/// Suffix stripped from the last identity segment.
const ARCHIVE_SUFFIX: &str = ".git";

/// Exactly two non-empty segments, no scheme or scp-style host.
static SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/:]+/[^/]+$").expect("shorthand regex is valid"));

/// Organization and project names derived from an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentity {
    pub organization_name: String,
    pub canonical_name: String,
}

/// Split an identity into organization and canonical project name.
///
/// The canonical name is the last segment without a trailing `.git`; the
/// organization is the first segment. For URL and scp-style locations the
/// segments are taken from the path after the host, so
/// `https://github.com/org/name.git` and `git@github.com:org/name.git`
/// both give `org` / `name`.
pub fn parse_identity(raw: &str) -> GlueResult<ParsedIdentity> {
    let segments: Vec<&str> = repository_path(raw)
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let malformed = || GlueError::MalformedIdentity {
        identity: raw.to_string(),
    };

    let [org, .., last] = segments[..] else {
        return Err(malformed());
    };

    let name = last.strip_suffix(ARCHIVE_SUFFIX).unwrap_or(last);
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(ParsedIdentity {
        organization_name: org.to_string(),
        canonical_name: name.to_string(),
    })
}

/// The part of an identity after any scheme and host.
fn repository_path(raw: &str) -> &str {
    if let Some((_, rest)) = raw.split_once("://") {
        return rest.split_once('/').map_or("", |(_, path)| path);
    }

    // scp-style `git@host:org/name`
    let first = raw.split('/').next().unwrap_or(raw);
    match first.split_once(':') {
        Some((host, _)) => &raw[host.len() + 1..],
        None => raw,
    }
}

/// Turn an identity into something `git` can fetch.
///
/// `org/name` becomes `https://<host>/org/name.git`; anything else is
/// assumed to already be a location and is returned as-is.
pub fn resolve_fetch_location(identity: &str, host: &str) -> String {
    if !is_shorthand(identity) {
        return identity.to_string();
    }

    let path = identity.strip_suffix(ARCHIVE_SUFFIX).unwrap_or(identity);
    format!("https://{}/{}{}", host, path, ARCHIVE_SUFFIX)
}

fn is_shorthand(identity: &str) -> bool {
    if !SHORTHAND.is_match(identity) {
        return false;
    }
    // `./lib` and `../lib` are relative paths
    !matches!(identity.split('/').next(), Some(".") | Some(".."))
}

/// A single dependency of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    identity: String,
    reference: String,
    include_path: Option<String>,
    transitive: bool,
}

impl Descriptor {
    /// Create a direct dependency.
    pub fn new(identity: impl Into<String>, reference: impl Into<String>) -> Self {
        Descriptor {
            identity: identity.into(),
            reference: reference.into(),
            include_path: None,
            transitive: false,
        }
    }

    /// Set the include-path override. An empty path means the dependency root.
    pub fn with_include_path(mut self, include_path: impl Into<String>) -> Self {
        let path = include_path.into();
        self.include_path = if path.is_empty() { None } else { Some(path) };
        self
    }

    /// Set whether the dependency was discovered through another one.
    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn include_path(&self) -> Option<&str> {
        self.include_path.as_deref()
    }

    /// Include path guaranteed to end in `/`, or empty when unset.
    pub fn include_path_with_separator(&self) -> String {
        match self.include_path.as_deref() {
            None => String::new(),
            Some(p) if p.ends_with('/') => p.to_string(),
            Some(p) => format!("{}/", p),
        }
    }

    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    pub(crate) fn set_transitive(&mut self, transitive: bool) {
        self.transitive = transitive;
    }

    /// Organization and project names for this dependency.
    pub fn names(&self) -> GlueResult<ParsedIdentity> {
        parse_identity(&self.identity)
    }

    /// Short project name, used as the checkout directory name.
    pub fn canonical_name(&self) -> GlueResult<String> {
        Ok(self.names()?.canonical_name)
    }

    pub fn organization_name(&self) -> GlueResult<String> {
        Ok(self.names()?.organization_name)
    }

    /// Location handed to `git`.
    pub fn fetch_location(&self, host: &str) -> String {
        resolve_fetch_location(&self.identity, host)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.identity, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_expands_to_hosted_url() {
        assert_eq!(
            resolve_fetch_location("acme/widgets", DEFAULT_GIT_HOST),
            "https://github.com/acme/widgets.git"
        );
        assert_eq!(
            resolve_fetch_location("nlohmann/json", "gitlab.example.org"),
            "https://gitlab.example.org/nlohmann/json.git"
        );
        assert_eq!(
            resolve_fetch_location("acme/widgets.git", DEFAULT_GIT_HOST),
            "https://github.com/acme/widgets.git"
        );
    }

    #[test]
    fn test_locations_pass_through() {
        for identity in [
            "https://github.com/acme/widgets.git",
            "git@github.com:acme/widgets.git",
            "/srv/git/acme/widgets",
            "acme/widgets/extra",
            "./vendored/lib",
            "../sibling/lib",
        ] {
            assert_eq!(resolve_fetch_location(identity, DEFAULT_GIT_HOST), identity);
        }
    }

    #[test]
    fn test_parse_identity_shorthand() {
        let parsed = parse_identity("boostorg/fusion").unwrap();
        assert_eq!(parsed.organization_name, "boostorg");
        assert_eq!(parsed.canonical_name, "fusion");
    }

    #[test]
    fn test_parse_identity_strips_archive_suffix() {
        let parsed = parse_identity("https://github.com/acme/widgets.git").unwrap();
        assert_eq!(parsed.organization_name, "acme");
        assert_eq!(parsed.canonical_name, "widgets");

        let parsed = parse_identity("git@github.com:acme/widgets.git").unwrap();
        assert_eq!(parsed.organization_name, "acme");
        assert_eq!(parsed.canonical_name, "widgets");
    }

    #[test]
    fn test_parse_identity_takes_first_segment_as_organization() {
        let parsed = parse_identity("acme/widgets/extra").unwrap();
        assert_eq!(parsed.organization_name, "acme");
        assert_eq!(parsed.canonical_name, "extra");

        let parsed = parse_identity("https://gitlab.example.org/acme/tools/widgets.git").unwrap();
        assert_eq!(parsed.organization_name, "acme");
        assert_eq!(parsed.canonical_name, "widgets");

        let parsed = parse_identity("/srv/git/widgets").unwrap();
        assert_eq!(parsed.organization_name, "srv");
        assert_eq!(parsed.canonical_name, "widgets");
    }

    #[test]
    fn test_parse_identity_without_slash_fails() {
        for raw in [
            "widgets",
            "",
            "widgets.git",
            "/",
            "acme/.git",
            "https://github.com/widgets",
            "git@github.com:widgets.git",
        ] {
            let err = parse_identity(raw).unwrap_err();
            assert!(
                matches!(err, GlueError::MalformedIdentity { .. }),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_include_path_with_separator() {
        let d = Descriptor::new("acme/widgets", "v1");
        assert_eq!(d.include_path_with_separator(), "");

        let d = d.with_include_path("include");
        assert_eq!(d.include_path_with_separator(), "include/");

        let d = Descriptor::new("acme/widgets", "v1").with_include_path("src/");
        assert_eq!(d.include_path_with_separator(), "src/");
    }

    #[test]
    fn test_empty_include_path_is_unset() {
        let d = Descriptor::new("acme/widgets", "v1").with_include_path("");
        assert_eq!(d.include_path(), None);
    }
}
