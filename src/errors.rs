use thiserror::Error;

/// Represents errors that can occur while generating or parsing a slide deck.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The text-generation provider returned an empty response. Reported
    /// distinctly from decode failures because it signals an upstream
    /// provider problem rather than a format problem.
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Error originating from the underlying HTTP client (`reqwest`).
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// An error reported by the AI provider itself (e.g., 4xx or 5xx status code).
    #[error("Provider returned an error: Status {status}, Message: {message}")]
    Provider {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Error occurred during the deserialization of a JSON response from the provider API.
    #[error("Failed to deserialize JSON response: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// The slide structure could not be extracted from the provider's text.
    /// Carries the cleaned candidate text that failed to decode, for diagnostics.
    #[error("Failed to extract slide structure: {message}")]
    Extraction { message: String, candidate: String },

    /// An error indicating invalid input was provided to a client function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, DeckError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
