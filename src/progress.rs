//! Pipeline observation: progress and diagnostics delivered to a
//! caller-owned sink instead of process-wide shared state.
//!
//! All events for one pipeline invocation are emitted from a single task, so
//! a sink never sees interleaved partial updates. Events are advisory
//! telemetry; dropping them does not affect correctness.

/// An observable event emitted while a deck is being generated.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A new pipeline stage started. `step` is a human-readable description.
    StepStarted { step: String },

    /// One more image request settled (success or failure).
    /// `completed / total` gives the fraction complete.
    ImageProgress { completed: usize, total: usize },

    /// A single slide's image request failed. The slide keeps rendering
    /// without an image; this is never a top-level failure.
    SlideImageFailed { index: usize, reason: String },

    /// The pipeline finished, successfully or not.
    Finished,
}

impl PipelineEvent {
    /// Fractional progress for image events, `0.0` otherwise.
    pub fn fraction(&self) -> f64 {
        match self {
            PipelineEvent::ImageProgress { completed, total } if *total > 0 => {
                *completed as f64 / *total as f64
            }
            _ => 0.0,
        }
    }
}

/// Receives pipeline events.
pub trait EventSink {
    fn emit(&self, event: PipelineEvent);
}

/// Adapts a plain closure into an [`EventSink`].
pub struct CallbackSink<F>(pub F);

impl<F: Fn(PipelineEvent)> EventSink for CallbackSink<F> {
    fn emit(&self, event: PipelineEvent) {
        (self.0)(event)
    }
}

/// A sink that discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: PipelineEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn closures_adapt_into_sinks() {
        let seen = RefCell::new(Vec::new());
        let sink = CallbackSink(|event: PipelineEvent| seen.borrow_mut().push(event));
        sink.emit(PipelineEvent::StepStarted { step: "go".to_string() });
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn fraction_is_completed_over_total() {
        let event = PipelineEvent::ImageProgress { completed: 3, total: 4 };
        assert!((event.fraction() - 0.75).abs() < f64::EPSILON);
        assert_eq!(PipelineEvent::Finished.fraction(), 0.0);
    }
}
