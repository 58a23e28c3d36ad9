//! Image attachment: resolving one generated image per slide.
//!
//! This stage fans out one image request per slide concurrently, then joins:
//! it completes only after every request has settled. One slide's failure
//! never fails the batch; the failed slide simply keeps `image_url` absent
//! and still renders text-only. There is no per-request timeout or retry.
//!
//! All futures are driven by `join_all` on the calling task, so progress
//! events are emitted one at a time even though the requests themselves are
//! concurrent.

use futures::future::join_all;
use log::warn;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::client::ImageProvider;
use crate::models::slide::Slide;
use crate::progress::{EventSink, PipelineEvent};

/// Resolves images for every slide and returns the updated sequence.
///
/// Results are collected into per-index slots keyed by each slide's original
/// ordinal, so the merge is independent of completion order. After each
/// settlement an `ImageProgress` event is emitted with the running
/// `completed / total` count; failures additionally emit `SlideImageFailed`.
pub async fn attach_images<P: ImageProvider>(
    provider: &P,
    mut slides: Vec<Slide>,
    sink: &dyn EventSink,
) -> Vec<Slide> {
    let total = slides.len();
    if total == 0 {
        return slides;
    }

    let completed = AtomicUsize::new(0);
    let prompts: Vec<String> = slides.iter().map(|s| s.image_prompt.clone()).collect();

    let requests = prompts.into_iter().enumerate().map(|(index, prompt)| {
        let completed = &completed;
        async move {
            let outcome = provider.generate_image(&prompt).await;
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            sink.emit(PipelineEvent::ImageProgress { completed: done, total });

            match outcome {
                Ok(url) => (index, Some(url)),
                Err(e) => {
                    warn!("image generation failed for slide {index}: {e}");
                    sink.emit(PipelineEvent::SlideImageFailed {
                        index,
                        reason: e.to_string(),
                    });
                    (index, None)
                }
            }
        }
    });

    for (index, url) in join_all(requests).await {
        if let Some(url) = url {
            slides[index].image_url = Some(url);
        }
    }

    slides
}
