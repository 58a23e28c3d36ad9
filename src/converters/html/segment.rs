//! Deck text segmentation: stripping front-matter, splitting the body into
//! per-slide segments, and re-extracting the embedded image directive that
//! the assembler wrote into each segment.
//!
//! The delimiter is the literal sequence newline, `---`, newline. A content
//! line that happens to equal `---`, or a content line that happens to look
//! like an image directive, is indistinguishable from the real thing; this
//! mirrors the deck format itself and is intentionally not disambiguated.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::slide::Layout;

/// Sided directive, e.g. `![bg right:35%](https://...)`. Tried first.
static SIDED_IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[bg (left|right):\d+%\]\(([^)\s]+)\)").unwrap());

/// Full-bleed directive, e.g. `![bg](https://...)`. Tried only if no sided
/// directive matched.
static FULL_BLEED_IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[bg\]\(([^)\s]+)\)").unwrap());

/// One slide's worth of deck text after directive extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// The segment text with the matched directive (if any) removed.
    pub markdown: String,
    /// The captured directive: placement plus image URL.
    pub image: Option<(Layout, String)>,
}

/// Removes the leading front-matter block: everything between the first
/// `---` line and the next one. Returns the input unchanged if no
/// front-matter is found.
pub fn strip_front_matter(deck: &str) -> &str {
    let rest = deck.trim_start();
    if let Some(after_open) = rest.strip_prefix("---") {
        if let Some(close) = after_open.find("\n---") {
            return &after_open[close + 4..];
        }
    }
    deck
}

/// Splits the deck body on the `\n---\n` slide delimiter, dropping segments
/// that are empty or all-whitespace after trimming.
pub fn split_segments(body: &str) -> Vec<&str> {
    body.split("\n---\n")
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Extracts at most one image directive from a segment, sided form before
/// full-bleed form, and returns the segment text with the match removed.
/// Matching stops after the first hit.
pub fn parse_segment(text: &str) -> Segment {
    if let Some(caps) = SIDED_IMAGE_REGEX.captures(text) {
        let layout = match &caps[1] {
            "left" => Layout::ImageLeft,
            _ => Layout::ImageRight,
        };
        let url = caps[2].to_string();
        let markdown = SIDED_IMAGE_REGEX.replace(text, "").into_owned();
        return Segment { markdown, image: Some((layout, url)) };
    }

    if let Some(caps) = FULL_BLEED_IMAGE_REGEX.captures(text) {
        let url = caps[1].to_string();
        let markdown = FULL_BLEED_IMAGE_REGEX.replace(text, "").into_owned();
        return Segment { markdown, image: Some((Layout::FullBleed, url)) };
    }

    Segment { markdown: text.to_string(), image: None }
}
