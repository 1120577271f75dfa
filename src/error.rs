//! Error types for the temp-mail client.

use thiserror::Error;

/// Error type for all temp-mail client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure, non-success HTTP status, or undecodable response body.
    ///
    /// Non-2xx statuses carry the status code in the underlying
    /// [`reqwest::Error`]; the client never retries.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Messages were requested before a mailbox was created.
    ///
    /// Raised locally, before any network call is made.
    #[error("no mailbox yet: call create() before fetching messages")]
    NoMailbox,
}
