//! Structure extraction: turning a raw text blob returned by a generative
//! provider into an ordered sequence of [`Slide`]s.
//!
//! Providers rarely return clean JSON. The blob may be wrapped in a fenced
//! code block, preceded or followed by prose, or both. This module strips
//! fence delimiters, slices out the bracketed array, and decodes it. It is
//! deliberately tolerant of surrounding noise but never repairs malformed
//! JSON inside the array itself.

use log::debug;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{DeckError, Result};
use crate::models::record::SlideRecord;
use crate::models::slide::Slide;

/// Regex matching code-fence delimiter markers, with or without a language
/// tag (```json, ```markdown, or a bare ```). Only the markers are removed,
/// never the fenced contents.
static CODE_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z0-9_-]*").unwrap());

/// Extracts slides from a raw provider response.
///
/// Layout hints are resolved during extraction (missing or unrecognized
/// hints fall back to a uniform random pick from `rng`), so the returned
/// slides are fully normalized and the downstream assembler stays
/// deterministic.
///
/// # Errors
///
/// * [`DeckError::EmptyResponse`] if `blob` is empty or all whitespace.
/// * [`DeckError::Extraction`] if the candidate text does not decode as a
///   JSON array of slide records; the error carries the decode message and
///   the cleaned candidate for diagnostics. No partial recovery is attempted.
pub fn extract_slides<R: Rng + ?Sized>(blob: &str, rng: &mut R) -> Result<Vec<Slide>> {
    if blob.trim().is_empty() {
        return Err(DeckError::EmptyResponse);
    }

    let candidate = isolate_json_array(blob);
    debug!("decoding slide array candidate ({} bytes)", candidate.len());

    let records: Vec<SlideRecord> =
        serde_json::from_str(&candidate).map_err(|e| DeckError::Extraction {
            message: e.to_string(),
            candidate: candidate.clone(),
        })?;

    Ok(records.into_iter().map(|r| r.into_slide(rng)).collect())
}

/// Cleans the blob and slices out the candidate JSON array text.
///
/// Fence markers are removed first. Then the substring from the first `[` to
/// the last `]` (inclusive) is taken; if either bracket is missing the whole
/// cleaned text is used instead, which will generally fail decoding — an
/// expected, reported failure mode rather than a crash.
fn isolate_json_array(blob: &str) -> String {
    let cleaned = CODE_FENCE_REGEX.replace_all(blob, "");

    let candidate = match (cleaned.find('['), cleaned.rfind(']')) {
        (Some(start), Some(end)) if start <= end => &cleaned[start..=end],
        _ => cleaned.as_ref(),
    };

    candidate.trim().to_string()
}
