//! Tag listing: the record type, query options, and the lister itself.

use chrono::{DateTime, FixedOffset};
use semver::{Version, VersionReq};
use tracing::debug;

use crate::command::CommandRunner;
use crate::error::{GitTagsError, Result};
use crate::parser;

const PRETTY_FORMAT: &str = "--pretty=%d;%H;%cI";

/// A validated release tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Raw tag name as git reports it (e.g. "v1.2.0")
    pub tag: String,
    /// Semantic version parsed from the tag name; its `Display` form is the
    /// normalized version string (e.g. "1.2.0")
    pub version: Version,
    /// Full commit hash the tag points at, trimmed
    pub hash: String,
    /// Commit timestamp, when the line carried a parseable one
    pub date: Option<DateTime<FixedOffset>>,
}

/// Options for a tag query.
///
/// The default query lists every semver tag in the repository. A bare range
/// string converts into a range-only query, so callers can write
/// `lister.list("^1.1.0")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagQuery {
    /// Semver range the returned versions must satisfy (e.g. "^1.1.0")
    pub range: Option<String>,
    /// Revision range restricting the scan (e.g. "v1.0.0..HEAD")
    pub rev: Option<String>,
}

impl TagQuery {
    /// Query with no filtering at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Query filtered by a semver range.
    pub fn range(range: impl Into<String>) -> Self {
        TagQuery {
            range: Some(range.into()),
            rev: None,
        }
    }

    /// Restrict the scan to a revision range.
    pub fn with_rev(mut self, rev: impl Into<String>) -> Self {
        self.rev = Some(rev.into());
        self
    }
}

impl From<&str> for TagQuery {
    fn from(range: &str) -> Self {
        TagQuery::range(range)
    }
}

impl From<String> for TagQuery {
    fn from(range: String) -> Self {
        TagQuery::range(range)
    }
}

/// Lists semantic-version tags of a repository through an injected
/// [CommandRunner].
///
/// Each call runs exactly one git invocation, parses its decoration output,
/// and returns fresh records; nothing is cached between calls. Results may
/// legitimately differ between calls if the repository changes in the
/// meantime.
pub struct TagLister<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> TagLister<R> {
    pub fn new(runner: R) -> Self {
        TagLister { runner }
    }

    /// All valid semver tags matching `query`, sorted descending by version.
    ///
    /// Lines without a valid semver tag (branch decorations, HEAD pointers,
    /// non-release tags) are dropped silently. A failed git invocation is a
    /// whole-call failure; no partial list is returned.
    pub fn list(&self, query: impl Into<TagQuery>) -> Result<Vec<Tag>> {
        let query = query.into();
        let requirement = query.range.as_deref().map(parse_range).transpose()?;

        let output = self.runner.run(&log_args(&query))?;

        let mut tags: Vec<Tag> = output.lines().filter_map(parser::parse_line).collect();

        if let Some(requirement) = &requirement {
            tags.retain(|tag| requirement.matches(&tag.version));
        }

        // sort_by is stable, so equal versions keep parse order
        tags.sort_by(|a, b| b.version.cmp(&a.version));

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// The most recent tag matching `query`, or `None` when nothing matches.
    ///
    /// An empty repository is a valid, empty result, not an error.
    pub fn latest(&self, query: impl Into<TagQuery>) -> Result<Option<Tag>> {
        Ok(self.list(query)?.into_iter().next())
    }
}

/// Select the git invocation for a query.
///
/// Without a revision range, every tagged commit is listed with no history
/// traversal. With one, the walk is restricted to the range and simplified
/// to one entry per distinct decoration.
fn log_args(query: &TagQuery) -> Vec<&str> {
    match &query.rev {
        Some(rev) => vec![
            "log",
            rev,
            "--simplify-by-decoration",
            PRETTY_FORMAT,
            "--decorate=short",
        ],
        None => vec![
            "log",
            "--no-walk",
            "--tags",
            PRETTY_FORMAT,
            "--decorate=short",
        ],
    }
}

fn parse_range(range: &str) -> Result<VersionReq> {
    VersionReq::parse(range)
        .map_err(|err| GitTagsError::range(format!("'{}' is not a valid range: {}", range, err)))
}
