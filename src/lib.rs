//! # TempMail Client
//! Asynchronous wrapper around the temp-mail.org disposable email HTTP API, providing simple methods to create a temporary mailbox and poll it for messages from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need throwaway addresses in integration tests, demos, or automation scripts without running mail infrastructure: create a mailbox, hold on to the returned bearer token, and poll for messages ([`Message`]). Mailbox lifetime is entirely server-managed; there is no delete operation.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a general-purpose mail client, SMTP sender, or durable mailbox. It only proxies the temp-mail.org service and inherits its availability, spam filtering, and retention limits. There is no retry, pagination, or caching; message order and completeness are whatever the server returns.
//!
//! ## Proxies
//! Outbound requests honor `https_proxy`, `HTTPS_PROXY`, `http_proxy`, and `HTTP_PROXY` (first non-empty wins, in that order). Override with [`ClientBuilder::proxy`] or force a direct connection with [`ClientBuilder::no_proxy`]. The selected proxy is reported once via `log::info!` when the client is built.
//!
//! ## Errors
//! All network calls surface transport failures, non-2xx statuses, and undecodable responses as [`Error::Request`]. Fetching messages before a mailbox exists fails locally with [`Error::NoMailbox`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use tempmail_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tempmail_client::Error> {
//!     let mut client = Client::new()?;
//!     let mailbox = client.create().await?;
//!     println!("Created: {}", mailbox.mailbox);
//!
//!     let messages = client.get_messages().await?;
//!     for msg in messages {
//!         println!("From: {}, Subject: {}", msg.from, msg.subject);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;
mod proxy;

pub use client::{Client, ClientBuilder, create_mailbox, get_messages_by_token};
pub use error::Error;
pub use models::{Mailbox, Message};

/// Result type alias for temp-mail operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
