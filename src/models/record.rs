use rand::Rng;
use serde::Deserialize;

use crate::models::slide::{Layout, Slide};

/// The raw decode target for one slide record inside the AI's JSON array.
///
/// Only `title`, `content`, and `image_prompt` are required; `highlight` and
/// `visual_style` stay optional with absence preserved as `None` rather than
/// coerced to an empty string at decode time.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideRecord {
    pub title: String,
    pub content: String,
    pub highlight: Option<String>,
    /// Layout hint as written by the provider; unrecognized values fall back
    /// to a random layout during normalization.
    pub visual_style: Option<String>,
    pub image_prompt: String,
}

impl SlideRecord {
    /// Normalizes this raw record into a `Slide`, resolving the layout hint
    /// (or its absence) with the injected randomness source.
    pub fn into_slide<R: Rng + ?Sized>(self, rng: &mut R) -> Slide {
        let layout = Layout::resolve(self.visual_style.as_deref(), rng);
        Slide {
            title: self.title,
            content: self.content,
            highlight: self.highlight,
            layout,
            image_prompt: self.image_prompt,
            image_url: None,
        }
    }
}
