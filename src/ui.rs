//! Terminal output helpers for the git-tags binary.

use console::style;

use crate::tags::Tag;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with a dim arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print one tag row: version, raw tag name, short hash, and date if known.
pub fn display_tag(tag: &Tag) {
    let short_hash = if tag.hash.len() > 7 {
        &tag.hash[..7]
    } else {
        tag.hash.as_str()
    };

    let date = tag
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    println!(
        "{:<16} {:<20} {} {}",
        style(tag.version.to_string()).green(),
        tag.tag,
        style(short_hash).dim(),
        style(date).dim()
    );
}

/// Print a list of tags, or a notice when nothing matched.
pub fn display_tag_list(tags: &[Tag]) {
    if tags.is_empty() {
        display_status("no matching tags");
        return;
    }
    for tag in tags {
        display_tag(tag);
    }
}
