//! Deck assembly: deterministic serialization of a slide sequence into
//! Marp-flavored markdown.
//!
//! This is a pure function of its input. Any randomness (the layout
//! fallback) was already resolved during extraction, so the same slide
//! sequence always yields byte-identical output. The emitted directive
//! syntax is the contract shared with the preview renderer, which re-parses
//! it from the deck text.

use std::fmt::Write;

use crate::models::slide::{Layout, Slide};

/// The fixed Marp front-matter block that opens every deck.
pub const FRONT_MATTER: &str = "---\nmarp: true\ntheme: default\npaginate: true\n---\n\n";

/// Formats the embedded image directive for a layout. Sided layouts carry
/// the pane weight; full-bleed carries the URL only.
pub fn image_directive(layout: Layout, url: &str) -> String {
    match layout {
        Layout::ImageRight => format!("![bg right:35%]({url})"),
        Layout::ImageLeft => format!("![bg left:35%]({url})"),
        Layout::FullBleed => format!("![bg]({url})"),
    }
}

/// Serializes an ordered slide sequence into the canonical deck markdown.
///
/// Each slide block contains, in fixed order: title, image directive (only
/// when an image URL was resolved), highlight blockquote (only when present
/// and non-empty), then the content lines. Blocks are separated by a line
/// containing exactly `---`.
pub fn assemble_deck(slides: &[Slide]) -> String {
    let mut deck = String::from(FRONT_MATTER);

    for slide in slides {
        writeln!(deck, "# {}\n", slide.title).expect("Writing to String failed");

        if let Some(url) = &slide.image_url {
            writeln!(deck, "{}\n", image_directive(slide.layout, url))
                .expect("Writing to String failed");
        }

        if let Some(highlight) = &slide.highlight {
            let highlight = highlight.trim();
            if !highlight.is_empty() {
                writeln!(deck, "> {highlight}\n").expect("Writing to String failed");
            }
        }

        writeln!(deck, "{}", slide.content.trim_end()).expect("Writing to String failed");
        deck.push_str("\n---\n\n");
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str, layout: Layout, url: Option<&str>) -> Slide {
        Slide {
            title: title.to_string(),
            content: "- a\n- b".to_string(),
            highlight: Some("Key fact.".to_string()),
            layout,
            image_prompt: "x".to_string(),
            image_url: url.map(str::to_string),
        }
    }

    #[test]
    fn full_bleed_block_has_fixed_element_order() {
        let deck = assemble_deck(&[slide("Intro", Layout::FullBleed, Some("https://img/1.png"))]);

        let title_at = deck.find("# Intro").unwrap();
        let image_at = deck.find("![bg](https://img/1.png)").unwrap();
        let highlight_at = deck.find("> Key fact.").unwrap();
        let bullets_at = deck.find("- a\n- b").unwrap();
        let separator_at = deck.rfind("\n---\n").unwrap();

        assert!(title_at < image_at);
        assert!(image_at < highlight_at);
        assert!(highlight_at < bullets_at);
        assert!(bullets_at < separator_at);
    }

    #[test]
    fn sided_layouts_emit_weighted_directives() {
        let deck = assemble_deck(&[
            slide("R", Layout::ImageRight, Some("https://img/r.png")),
            slide("L", Layout::ImageLeft, Some("https://img/l.png")),
        ]);
        assert!(deck.contains("![bg right:35%](https://img/r.png)"));
        assert!(deck.contains("![bg left:35%](https://img/l.png)"));
    }

    #[test]
    fn slide_without_image_omits_the_directive() {
        let deck = assemble_deck(&[slide("NoImage", Layout::ImageRight, None)]);
        assert!(!deck.contains("![bg"));
        assert!(deck.contains("# NoImage"));
    }

    #[test]
    fn empty_highlight_is_not_rendered() {
        let mut s = slide("T", Layout::FullBleed, None);
        s.highlight = Some("  ".to_string());
        let deck = assemble_deck(&[s]);
        assert!(!deck.contains("> "));
    }

    #[test]
    fn assembly_is_deterministic() {
        let slides = vec![
            slide("One", Layout::ImageLeft, Some("https://img/1.png")),
            slide("Two", Layout::FullBleed, None),
        ];
        assert_eq!(assemble_deck(&slides), assemble_deck(&slides));
    }

    #[test]
    fn deck_opens_with_front_matter() {
        let deck = assemble_deck(&[slide("T", Layout::FullBleed, None)]);
        assert!(deck.starts_with("---\nmarp: true\ntheme: default\npaginate: true\n---\n"));
    }
}
