//! TempMail async client implementation.

use crate::{Error, Mailbox, Message, Result, proxy};
use log::info;
use reqwest::header::{CACHE_CONTROL, CONTENT_LENGTH, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

const BASE_URL: &str = "https://web2.temp-mail.org";
const USER_AGENT_VALUE: &str = "PostmanRuntime/7.51.1";

/// Wire envelope returned by `GET /messages`. The `mailbox` field the server
/// echoes back is dropped; only the message list is surfaced.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    messages: Vec<Message>,
}

/// Async client for the temp-mail.org disposable email service.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom
/// settings like a proxy or an alternate endpoint. The client remembers the
/// most recently created mailbox, so [`Client::get_messages`] needs no
/// arguments once [`Client::create`] has succeeded.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    proxy: Option<String>,
    session: Option<Mailbox>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new temp-mail client with default settings.
    ///
    /// No network request is made; the first call to the service happens in
    /// [`Client::create`].
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// let client = Client::new()?;
    /// # Ok::<(), tempmail_client::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Get the proxy URL requests are routed through.
    ///
    /// Returns `None` when the client connects directly.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Address of the current mailbox, if one has been created.
    pub fn mailbox(&self) -> Option<&str> {
        self.session.as_ref().map(|m| m.mailbox.as_str())
    }

    /// Create a temporary mailbox and remember it for later fetches.
    ///
    /// Calling this again silently requests a fresh mailbox and overwrites
    /// the stored one; the previous mailbox is abandoned on the server (the
    /// API exposes no delete operation).
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let mut client = Client::new()?;
    /// let mailbox = client.create().await?;
    /// println!("{}", mailbox.mailbox);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&mut self) -> Result<Mailbox> {
        let mailbox = self.request_mailbox().await?;
        self.session = Some(mailbox.clone());
        Ok(mailbox)
    }

    /// Get messages for the current mailbox.
    ///
    /// # Errors
    /// Fails with [`Error::NoMailbox`] before any network call if
    /// [`Client::create`] has not succeeded yet.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let mut client = Client::new()?;
    /// client.create().await?;
    /// for msg in client.get_messages().await? {
    ///     println!("{}: {}", msg.from, msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_messages(&self) -> Result<Vec<Message>> {
        let session = self.session.as_ref().ok_or(Error::NoMailbox)?;
        self.fetch_messages(&session.token).await
    }

    /// Request a fresh mailbox without storing it on the client.
    pub async fn request_mailbox(&self) -> Result<Mailbox> {
        let mailbox = self
            .http
            .post(format!("{}/mailbox", self.base_url))
            .headers(self.headers())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(mailbox)
    }

    /// Fetch messages for an arbitrary bearer token.
    ///
    /// The token is sent verbatim as `Authorization: Bearer <token>`.
    /// Ordering and completeness of the returned list are server-defined.
    pub async fn fetch_messages(&self, token: &str) -> Result<Vec<Message>> {
        let response: MessagesResponse = self
            .http
            .get(format!("{}/messages", self.base_url))
            .headers(self.headers())
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.messages)
    }

    /// Build the fixed headers sent on every API request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        headers
    }
}

/// How the builder decides on an outbound proxy.
#[derive(Debug, Clone)]
enum ProxyChoice {
    /// Resolve from `https_proxy`/`HTTPS_PROXY`/`http_proxy`/`HTTP_PROXY`.
    Environment,
    /// Use this URL, ignoring the environment.
    Url(String),
    /// Connect directly, ignoring the environment.
    Direct,
}

/// Builder for configuring a temp-mail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    proxy: ProxyChoice,
    env_lookup: fn(&str) -> Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Proxy resolved from the environment
    /// - Default user agent
    /// - Default temp-mail.org endpoint
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: ProxyChoice::Environment,
            env_lookup: proxy::env_lookup,
        }
    }

    /// Replace the variable lookup used for environment proxy resolution.
    ///
    /// Lets tests exercise the environment branch without mutating the
    /// process environment.
    #[cfg(test)]
    fn env_lookup(mut self, lookup: fn(&str) -> Option<String>) -> Self {
        self.env_lookup = lookup;
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// Takes precedence over any proxy environment variables.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = ProxyChoice::Url(proxy.into());
        self
    }

    /// Connect directly, ignoring any proxy environment variables.
    pub fn no_proxy(mut self) -> Self {
        self.proxy = ProxyChoice::Direct;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the default API base URL.
    ///
    /// Useful for testing or when temp-mail.org changes its endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the client.
    ///
    /// Constructs the underlying HTTP client once; no network request is
    /// made. When a proxy is selected it is reported with a single
    /// `log::info!` notice here, so each built client announces its route
    /// exactly once.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// let client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok::<(), tempmail_client::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let proxy = match self.proxy {
            ProxyChoice::Environment => proxy::resolve_with(self.env_lookup),
            ProxyChoice::Url(url) => Some(url),
            ProxyChoice::Direct => None,
        };

        // reqwest's own system-proxy detection is disabled so the precedence
        // above is authoritative and `no_proxy()` really means direct.
        let mut builder = reqwest::Client::builder().no_proxy();

        if let Some(url) = &proxy {
            info!("routing temp-mail requests through proxy {url}");
            builder = builder.proxy(reqwest::Proxy::all(url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            base_url: self.base_url,
            user_agent: self.user_agent,
            proxy,
            session: None,
        })
    }
}

/// Create a temporary mailbox using a client with default settings.
///
/// One-shot counterpart of [`Client::create`]; nothing is stored, so keep
/// the returned token to read the mailbox later.
pub async fn create_mailbox() -> Result<Mailbox> {
    Client::new()?.request_mailbox().await
}

/// Get the messages currently stored for a mailbox token, using a client
/// with default settings.
pub async fn get_messages_by_token(token: &str) -> Result<Vec<Message>> {
    Client::new()?.fetch_messages(token).await
}
