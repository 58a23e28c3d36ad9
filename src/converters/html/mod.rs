//! Renders the canonical deck markdown into a self-contained HTML document
//! for on-screen preview.
//!
//! This is the inverse of the deck assembler: the deck text (possibly
//! hand-edited since assembly) is split back into per-slide segments, each
//! segment's embedded image directive is re-extracted, and the remaining
//! markdown subset is converted to HTML. The output embeds all CSS; nothing
//! external is referenced except the image URLs themselves.

mod constants;
mod segment;
mod text;

pub use segment::{parse_segment, split_segments, strip_front_matter, Segment};
pub use text::{apply_inline, escape_html_text, markdown_to_html};

use std::fmt::Write;

use crate::models::slide::Layout;
use constants::{ACCENT_PALETTE, BASE_STYLES, FULL_BLEED_OVERLAY};
use text::escape_html_attr;

/// Renders a deck markdown string into a complete HTML document.
///
/// Empty or all-whitespace segments produce no slide container. A segment
/// with no recognizable image directive renders as text-only.
pub fn render_deck(deck: &str) -> String {
    let body = strip_front_matter(deck);
    let segments = split_segments(body);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>");
    html.push_str(BASE_STYLES);
    html.push_str("</style>\n</head>\n<body>\n");

    for (index, raw) in segments.iter().enumerate() {
        render_slide(&mut html, raw, index);
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Emits one slide container: 1-based ordinal data attribute, cycled accent
/// color, layout-derived classes, converted content, and the side image pane
/// when one was captured.
fn render_slide(html: &mut String, raw_segment: &str, index: usize) {
    let segment = parse_segment(raw_segment);
    let ordinal = index + 1;
    let accent = ACCENT_PALETTE[index % ACCENT_PALETTE.len()];

    let mut classes = String::from("slide");
    let mut style = format!("background-color:{accent};");
    let mut side_image_url: Option<&str> = None;

    match &segment.image {
        Some((Layout::FullBleed, url)) => {
            classes.push_str(" full-bleed");
            style = format!(
                "background-image:{FULL_BLEED_OVERLAY},url('{}');",
                escape_html_attr(url)
            );
        }
        Some((layout, url)) => {
            classes.push(' ');
            classes.push_str(layout.as_str());
            side_image_url = Some(url);
        }
        None => {}
    }

    write!(
        html,
        "<div class=\"{classes}\" data-slide=\"{ordinal}\" style=\"{style}\">"
    )
    .expect("Writing to String failed");

    write!(html, "<div class=\"body\">{}</div>", markdown_to_html(&segment.markdown))
        .expect("Writing to String failed");

    if let Some(url) = side_image_url {
        write!(
            html,
            "<div class=\"pane\"><img src=\"{}\" alt=\"\"></div>",
            escape_html_attr(url)
        )
        .expect("Writing to String failed");
    }

    html.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::marp::assemble_deck;
    use crate::models::slide::Slide;

    fn full_bleed_deck() -> String {
        assemble_deck(&[Slide {
            title: "Intro".to_string(),
            content: "- a\n- b".to_string(),
            highlight: Some("Key fact.".to_string()),
            layout: Layout::FullBleed,
            image_prompt: "x".to_string(),
            image_url: Some("https://img/1.png".to_string()),
        }])
    }

    #[test]
    fn full_bleed_slide_renders_background_and_bullets() {
        let html = render_deck(&full_bleed_deck());
        assert!(html.contains("class=\"slide full-bleed\""));
        assert!(html.contains("url('https://img/1.png')"));
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains("<blockquote class=\"highlight\"><p>Key fact.</p></blockquote>"));
        // Full-bleed never emits an inline <img>.
        assert!(!html.contains("<img"));
    }

    #[test]
    fn sided_slide_gets_a_pane_image() {
        let deck = assemble_deck(&[Slide {
            title: "Side".to_string(),
            content: "- x".to_string(),
            highlight: None,
            layout: Layout::ImageLeft,
            image_prompt: "p".to_string(),
            image_url: Some("https://img/2.png".to_string()),
        }]);
        let html = render_deck(&deck);
        assert!(html.contains("class=\"slide image-left\""));
        assert!(html.contains("<img src=\"https://img/2.png\""));
    }

    #[test]
    fn ordinals_are_one_based_and_colors_cycle() {
        let slides: Vec<Slide> = (0..7)
            .map(|i| Slide {
                title: format!("S{i}"),
                content: "- p".to_string(),
                highlight: None,
                layout: Layout::ImageRight,
                image_prompt: "p".to_string(),
                image_url: None,
            })
            .collect();
        let html = render_deck(&assemble_deck(&slides));
        assert!(html.contains("data-slide=\"1\""));
        assert!(html.contains("data-slide=\"7\""));
        // Slide 6 wraps around to the first palette entry.
        let first = ACCENT_PALETTE[0];
        assert_eq!(html.matches(first).count(), 2);
    }

    #[test]
    fn slide_without_directive_renders_text_only() {
        let html = render_deck("# Lone\n\n- a\n");
        assert!(html.contains("<h1>Lone</h1>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("background-color:"));
    }

    #[test]
    fn document_is_self_contained() {
        let html = render_deck(&full_bleed_deck());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.ends_with("</html>\n"));
    }
}
