use thiserror::Error;

/// Errors from a brief generation attempt.
///
/// The last three variants describe a provider reply that arrived but did
/// not carry a usable brief; their `Display` text is shown to API callers.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response envelope could not be deserialized.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("provider response contained no choices")]
    NoChoices,

    #[error("No tool calls returned by API")]
    NoToolCalls,

    #[error("Invalid JSON response from API")]
    InvalidArguments {
        #[source]
        source: serde_json::Error,
    },

    #[error("Incomplete response from API")]
    Incomplete { reason: String },
}
