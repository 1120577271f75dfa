//! Public data models returned by the client.

use serde::{Deserialize, Serialize};

/// A disposable mailbox allocated by temp-mail.org.
///
/// The token is the only credential for reading the mailbox and is valid
/// solely for the address it was issued with. There is no renewal or expiry
/// handling; an expired token simply makes the next fetch fail.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Mailbox {
    /// Opaque bearer token authorizing reads of this mailbox.
    pub token: String,
    /// Full email address of the mailbox.
    pub mailbox: String,
}

/// Summary of one message delivered to a mailbox.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned message identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Delivery time as a unix timestamp (seconds).
    pub received_at: i64,
    /// Sender, as formatted by the server (e.g. `Jane Doe <jane@example.com>`).
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Truncated plain-text preview of the body.
    #[serde(default)]
    pub body_preview: String,
    /// Number of attachments on the message.
    #[serde(default)]
    pub attachments_count: u32,
}
