//! End-to-end deck generation: prompt the text provider for an outline,
//! extract the slide structure, attach images, and assemble the deck.
//!
//! Failures in outline generation or extraction are fatal and surfaced as a
//! single terminal result. Per-slide image failures are absorbed by the
//! attachment stage, so once extraction succeeds the pipeline always reaches
//! assembly.

use rand::Rng;

use crate::client::{ImageProvider, TextProvider};
use crate::converters::marp::assemble_deck;
use crate::errors::Result;
use crate::extract::extract_slides;
use crate::images::attach_images;
use crate::progress::{EventSink, PipelineEvent};

const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";

/// Parameters for one deck generation run.
#[derive(Debug, Clone)]
pub struct DeckRequest {
    /// What the presentation should be about.
    pub topic: String,
    /// How many slides to ask the provider for.
    pub slide_count: usize,
    /// Text model identifier passed through to the provider.
    pub model: String,
}

impl DeckRequest {
    pub fn new(topic: impl Into<String>, slide_count: usize) -> Self {
        Self {
            topic: topic.into(),
            slide_count,
            model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Builds the outline prompt sent to the text provider. The requested JSON
/// field names are the ones the extractor decodes.
pub fn build_outline_prompt(request: &DeckRequest) -> String {
    format!(
        "Create a presentation outline with exactly {count} slides about: {topic}\n\n\
         Respond with only a JSON array. Each element must be an object with these fields:\n\
         - \"title\": short slide title\n\
         - \"content\": 2-4 bullet points, each line starting with \"- \"\n\
         - \"highlight\": one key sentence (optional)\n\
         - \"visual_style\": one of \"image-right\", \"image-left\", \"full-bleed\"\n\
         - \"image_prompt\": a description of an illustrative image for the slide\n\n\
         Do not include any text outside the JSON array.",
        count = request.slide_count,
        topic = request.topic,
    )
}

/// Runs the full pipeline and returns the assembled deck markdown.
///
/// The `Finished` event is emitted exactly once, on success and on fatal
/// failure alike, so observers can reset any in-progress indicator. The
/// randomness source drives only the layout fallback for slides whose
/// records carried no usable hint.
pub async fn generate_deck<T, I, R>(
    text_provider: &T,
    image_provider: &I,
    request: &DeckRequest,
    sink: &dyn EventSink,
    rng: &mut R,
) -> Result<String>
where
    T: TextProvider,
    I: ImageProvider,
    R: Rng + ?Sized,
{
    let result = drive(text_provider, image_provider, request, sink, rng).await;
    sink.emit(PipelineEvent::Finished);
    result
}

async fn drive<T, I, R>(
    text_provider: &T,
    image_provider: &I,
    request: &DeckRequest,
    sink: &dyn EventSink,
    rng: &mut R,
) -> Result<String>
where
    T: TextProvider,
    I: ImageProvider,
    R: Rng + ?Sized,
{
    sink.emit(PipelineEvent::StepStarted {
        step: "Generating outline".to_string(),
    });
    let prompt = build_outline_prompt(request);
    let blob = text_provider.generate_text(&request.model, &prompt).await?;

    sink.emit(PipelineEvent::StepStarted {
        step: "Extracting slide structure".to_string(),
    });
    let slides = extract_slides(&blob, rng)?;

    sink.emit(PipelineEvent::StepStarted {
        step: format!("Generating {} images", slides.len()),
    });
    let slides = attach_images(image_provider, slides, sink).await;

    sink.emit(PipelineEvent::StepStarted {
        step: "Assembling deck".to_string(),
    });
    Ok(assemble_deck(&slides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DeckError;
    use crate::progress::{CallbackSink, NullSink};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    struct CannedText(String);

    impl TextProvider for CannedText {
        async fn generate_text(&self, _model: &str, _prompt: &str) -> crate::errors::Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Fails for prompts containing "fail", succeeds otherwise.
    struct ScriptedImages;

    impl ImageProvider for ScriptedImages {
        async fn generate_image(&self, prompt: &str) -> crate::errors::Result<String> {
            if prompt.contains("fail") {
                Err(DeckError::InvalidInput("scripted failure".to_string()))
            } else {
                Ok(format!("https://img/{prompt}.png"))
            }
        }
    }

    fn outline(records: &str) -> String {
        format!("Here is your outline:\n```json\n[{records}]\n```\nEnjoy!")
    }

    #[tokio::test]
    async fn failed_image_omits_only_that_slides_directive() {
        let text = CannedText(outline(
            r#"{"title": "A", "content": "- a", "visual_style": "image-right", "image_prompt": "ok-a"},
               {"title": "B", "content": "- b", "visual_style": "image-right", "image_prompt": "fail-b"},
               {"title": "C", "content": "- c", "visual_style": "image-right", "image_prompt": "ok-c"}"#,
        ));
        let mut rng = StdRng::seed_from_u64(5);
        let deck = generate_deck(&text, &ScriptedImages, &DeckRequest::new("t", 3), &NullSink, &mut rng)
            .await
            .unwrap();

        assert!(deck.contains("![bg right:35%](https://img/ok-a.png)"));
        assert!(deck.contains("![bg right:35%](https://img/ok-c.png)"));
        assert_eq!(deck.matches("![bg").count(), 2);
        // All three slides are present regardless.
        assert!(deck.contains("# A"));
        assert!(deck.contains("# B"));
        assert!(deck.contains("# C"));
    }

    #[tokio::test]
    async fn empty_provider_text_is_a_fatal_empty_response() {
        let text = CannedText(String::new());
        let mut rng = StdRng::seed_from_u64(5);
        let err = generate_deck(&text, &ScriptedImages, &DeckRequest::new("t", 1), &NullSink, &mut rng)
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::EmptyResponse));
    }

    #[tokio::test]
    async fn finished_is_emitted_even_on_fatal_failure() {
        let events = RefCell::new(Vec::new());
        let sink = CallbackSink(|event: PipelineEvent| events.borrow_mut().push(event));
        let text = CannedText("not json at all".to_string());
        let mut rng = StdRng::seed_from_u64(5);

        let result =
            generate_deck(&text, &ScriptedImages, &DeckRequest::new("t", 1), &sink, &mut rng).await;
        assert!(result.is_err());
        assert_eq!(events.borrow().last(), Some(&PipelineEvent::Finished));
    }

    #[tokio::test]
    async fn steps_are_announced_in_pipeline_order() {
        let events = RefCell::new(Vec::new());
        let sink = CallbackSink(|event: PipelineEvent| events.borrow_mut().push(event));
        let text = CannedText(outline(
            r#"{"title": "A", "content": "- a", "visual_style": "full-bleed", "image_prompt": "ok"}"#,
        ));
        let mut rng = StdRng::seed_from_u64(5);

        generate_deck(&text, &ScriptedImages, &DeckRequest::new("t", 1), &sink, &mut rng)
            .await
            .unwrap();

        let steps: Vec<String> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::StepStarted { step } => Some(step.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            steps,
            vec![
                "Generating outline",
                "Extracting slide structure",
                "Generating 1 images",
                "Assembling deck",
            ]
        );
    }

    #[test]
    fn prompt_names_the_decoded_fields() {
        let prompt = build_outline_prompt(&DeckRequest::new("Rust", 5));
        assert!(prompt.contains("exactly 5 slides"));
        assert!(prompt.contains("Rust"));
        for field in ["title", "content", "highlight", "visual_style", "image_prompt"] {
            assert!(prompt.contains(field), "prompt should mention {field}");
        }
    }
}
