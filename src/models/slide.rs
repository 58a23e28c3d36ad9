use rand::Rng;
use serde::{Deserialize, Serialize};

/// The image-placement policy for a slide. A closed enumeration: every slide
/// ends up with exactly one of these, falling back to a uniform random choice
/// when the source hint is missing or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Image fills the right 35% of the slide.
    ImageRight,
    /// Image fills the left 35% of the slide.
    ImageLeft,
    /// Image covers the whole slide behind the text.
    FullBleed,
}

impl Layout {
    /// All variants, in the order used for the random fallback.
    pub const ALL: [Layout; 3] = [Layout::ImageRight, Layout::ImageLeft, Layout::FullBleed];

    /// The canonical hint string for this layout, as it appears in AI
    /// responses (`visual_style`) and in CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::ImageRight => "image-right",
            Layout::ImageLeft => "image-left",
            Layout::FullBleed => "full-bleed",
        }
    }

    /// Parses a layout hint. Returns `None` for anything that is not one of
    /// the three canonical strings (underscore spellings are accepted since
    /// providers are inconsistent about them).
    pub fn from_hint(hint: &str) -> Option<Layout> {
        match hint.trim().to_lowercase().replace('_', "-").as_str() {
            "image-right" => Some(Layout::ImageRight),
            "image-left" => Some(Layout::ImageLeft),
            "full-bleed" => Some(Layout::FullBleed),
            _ => None,
        }
    }

    /// Picks a layout uniformly at random. Used when a slide record carries
    /// no usable hint, so that every slide still renders with some layout.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Layout {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Resolves an optional hint to a definite layout, falling back to a
    /// uniform random choice. This is a policy decision, not a parse error.
    pub fn resolve<R: Rng + ?Sized>(hint: Option<&str>, rng: &mut R) -> Layout {
        hint.and_then(Layout::from_hint)
            .unwrap_or_else(|| Layout::random(rng))
    }
}

/// One normalized slide: the unit of content flowing through the pipeline.
///
/// Created by the structure extractor, mutated exactly once by the image
/// attachment stage (to populate `image_url`), then consumed read-only by the
/// deck assembler. Ordinal position in the containing `Vec` is the only
/// identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Non-empty slide title.
    pub title: String,

    /// Multi-line body text. Each line is expected to be a `- ` bullet, but
    /// this is not enforced at construction; the text is carried opaquely and
    /// its lines are treated as bullet candidates at render time.
    pub content: String,

    /// Optional single-sentence callout. Absent or empty means not rendered.
    pub highlight: Option<String>,

    /// The resolved image-placement policy. Always definite on a constructed
    /// slide; it only affects markup when `image_url` is present.
    pub layout: Layout,

    /// Prompt used to drive image generation. Has no effect on rendering
    /// once an image URL is resolved.
    pub image_prompt: String,

    /// Resolved reference to generated image content. Absent until the image
    /// attachment stage completes for this slide, and stays absent if
    /// generation failed (a valid terminal state, not an error).
    pub image_url: Option<String>,
}

impl Slide {
    /// True if the slide carries a highlight worth rendering.
    pub fn has_highlight(&self) -> bool {
        self.highlight.as_deref().is_some_and(|h| !h.trim().is_empty())
    }
}
