//! Markdown-subset to HTML conversion for the preview: block structure
//! (headings, highlight blockquotes, bullet lists, paragraphs) plus
//! non-greedy inline `**bold**` / `_italic_` formatting.

use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Non-greedy bold span. Applied before italics so `**a _b_**` nests
/// `<em>` inside `<strong>`.
static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Non-greedy italic span.
static ITALIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());

/// Escapes special HTML characters (`&`, `<`, `>`) for use in text content.
pub fn escape_html_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a string for use inside a double-quoted HTML attribute value.
pub fn escape_html_attr(text: &str) -> String {
    escape_html_text(text).replace('"', "&quot;")
}

/// Applies inline formatting to an already-escaped text fragment.
/// Unmatched `**` or `_` markers are left as literal characters.
pub fn apply_inline(text: &str) -> String {
    let bolded = BOLD_REGEX.replace_all(text, "<strong>$1</strong>");
    ITALIC_REGEX.replace_all(&bolded, "<em>$1</em>").into_owned()
}

/// Converts a slide segment's markdown into HTML blocks.
///
/// Supported lines: `# ` (h1), `## ` (h2), `> ` (highlight blockquote),
/// `- ` (bullet item; consecutive bullets group into one `<ul>`, a blank or
/// non-bullet line force-closes the open list), anything else non-blank
/// becomes a paragraph.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for line in markdown.lines() {
        let line = line.trim();

        if line.is_empty() {
            close_list(&mut html, &mut in_list);
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            write!(html, "<li>{}</li>", render_fragment(item)).expect("Writing to String failed");
            continue;
        }

        close_list(&mut html, &mut in_list);

        if let Some(heading) = line.strip_prefix("## ") {
            write!(html, "<h2>{}</h2>", render_fragment(heading))
                .expect("Writing to String failed");
        } else if let Some(heading) = line.strip_prefix("# ") {
            write!(html, "<h1>{}</h1>", render_fragment(heading))
                .expect("Writing to String failed");
        } else if let Some(quote) = line.strip_prefix("> ") {
            write!(
                html,
                "<blockquote class=\"highlight\"><p>{}</p></blockquote>",
                render_fragment(quote)
            )
            .expect("Writing to String failed");
        } else {
            write!(html, "<p>{}</p>", render_fragment(line)).expect("Writing to String failed");
        }
    }

    close_list(&mut html, &mut in_list);
    html
}

fn render_fragment(text: &str) -> String {
    apply_inline(&escape_html_text(text))
}

fn close_list(html: &mut String, in_list: &mut bool) {
    if *in_list {
        html.push_str("</ul>");
        *in_list = false;
    }
}
