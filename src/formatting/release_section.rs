// src/formatting/release_section.rs
//! Turns one release into a changelog section.
//!
//! Pure functions only: a [`Release`] goes in, a [`DocumentNode`] comes out.

use crate::constants::{PYPI_PROJECT_PREFIX, RELEASE_SECTION_ID_PREFIX};
use crate::model::{DocumentNode, Release};

/// Builds the section for `release`, or `None` for a draft.
///
/// With a `package_name`, the byline also links the matching PyPI release.
pub fn node_for_release(release: &Release, package_name: Option<&str>) -> Option<DocumentNode> {
    if release.is_draft {
        return None;
    }

    let tag = release.tag_name.as_str();
    let title = release_title(release.name.as_deref(), tag);

    let mut byline = vec![
        DocumentNode::text(format!("Released on {} - ", release.published_date())),
        DocumentNode::reference("GitHub", release.url.as_str()),
    ];
    if let Some(name) = package_name.filter(|name| !name.is_empty()) {
        byline.push(DocumentNode::text(" - "));
        byline.push(DocumentNode::reference(
            "PyPI",
            format!("{}{}/{}/", PYPI_PROJECT_PREFIX, name, tag),
        ));
    }

    Some(DocumentNode::Section {
        id: make_id(&format!("{}{}", RELEASE_SECTION_ID_PREFIX, tag)),
        title,
        children: vec![
            DocumentNode::paragraph(vec![DocumentNode::emphasis(byline)]),
            DocumentNode::raw_html(release.description_html()),
        ],
    })
}

/// Section title for a release.
///
/// An unnamed release is titled by its tag. A name that already mentions
/// the tag is used as is; otherwise the tag is prepended.
pub fn release_title(name: Option<&str>, tag: &str) -> String {
    match name {
        None | Some("") => tag.to_string(),
        Some(name) if name.contains(tag) => name.to_string(),
        Some(name) => format!("{}: {}", tag, name),
    }
}

/// Converts arbitrary text into a document identifier.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen, then drops leading digits/hyphens and trailing hyphens.
/// `release-1.0.0` becomes `release-1-0-0`.
///
/// Only ASCII letters and digits survive: non-ASCII letters are separators
/// and are not transliterated, so `release-v1-été` becomes `release-v1-t`.
pub fn make_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !id.is_empty() {
                id.push('-');
            }
            pending_separator = false;
            id.push(c);
        } else {
            pending_separator = true;
        }
    }

    id.trim_start_matches(|c: char| c.is_ascii_digit() || c == '-')
        .to_string()
}
