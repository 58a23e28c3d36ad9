pub mod client;
pub mod converters;
pub mod errors;
pub mod extract;
pub mod images;
pub mod models;
pub mod pipeline;
pub mod progress;

pub use client::{ImageProvider, OpenAiClient, TextProvider};
pub use converters::html::render_deck;
pub use converters::marp::assemble_deck;
pub use errors::{DeckError, Result};
pub use extract::extract_slides;
pub use images::attach_images;
pub use models::slide::{Layout, Slide};
pub use pipeline::{generate_deck, DeckRequest};
pub use progress::{CallbackSink, EventSink, NullSink, PipelineEvent};
