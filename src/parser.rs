//! Tag-line parsing for `git log` decoration output.
//!
//! Each input line carries three `;`-separated fields as produced by the
//! `--pretty=%d;%H;%cI` format: ref decorations, full commit hash, and an
//! ISO 8601 commit date. Parsing is two explicit stages: a field tokenizer
//! splitting on the separator, then a decoration scanner extracting `tag:`
//! candidates. A line contributes a record only when one of its candidates
//! validates as a semantic version.

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use tracing::debug;

use crate::tags::Tag;

// Decoration tokens look like `tag: v1.2.0`, delimited by commas inside an
// optional parenthesized group.
static TAG_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"tag:\s*([^,)]+)").unwrap());

/// Raw fields of one log line, before any validation.
#[derive(Debug, PartialEq, Eq)]
struct LineFields<'a> {
    decorations: &'a str,
    hash: &'a str,
    date: Option<&'a str>,
}

/// Split a line into decorations, hash, and optional date.
///
/// Lines missing the hash field (including empty lines left over from
/// trailing-newline splitting) yield `None`.
fn split_fields(line: &str) -> Option<LineFields<'_>> {
    let mut parts = line.splitn(3, ';');
    let decorations = parts.next()?;
    let hash = parts.next()?;
    let date = parts.next();
    Some(LineFields {
        decorations,
        hash,
        date,
    })
}

/// Every `tag: NAME` candidate in a decoration list, in order of appearance.
///
/// Non-tag decorations (`HEAD -> master`, branch names, `origin/HEAD`) are
/// ignored. Multiple tags can be co-located on one commit.
fn tag_candidates(decorations: &str) -> Vec<&str> {
    TAG_MARKER
        .captures_iter(decorations)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Select the first candidate that is a valid semantic version.
///
/// Returns the raw name together with its parsed version; `None` when no
/// candidate validates.
fn select_version_tag<'a>(candidates: &[&'a str]) -> Option<(&'a str, Version)> {
    candidates
        .iter()
        .find_map(|name| parse_version(name).map(|version| (*name, version)))
}

/// Parse a tag name as a semantic version, tolerating a leading `v`/`V`.
pub fn parse_version(tag: &str) -> Option<Version> {
    let stripped = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);
    Version::parse(stripped).ok()
}

fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(date = trimmed, %err, "unparseable commit date");
            None
        }
    }
}

/// Convert one log line into zero-or-one tag record.
///
/// Malformed lines and lines without a valid semver tag are expected noise
/// in decoration output; they yield `None` and never raise.
pub fn parse_line(line: &str) -> Option<Tag> {
    let fields = split_fields(line)?;
    let candidates = tag_candidates(fields.decorations);
    let (name, version) = select_version_tag(&candidates)?;

    let hash = fields.hash.trim();
    if hash.is_empty() {
        return None;
    }

    Some(Tag {
        tag: name.to_string(),
        version,
        hash: hash.to_string(),
        date: fields.date.and_then(parse_date),
    })
}
