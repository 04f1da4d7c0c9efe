//! Shared HTTP client
//!
//! One lazy-initialized reqwest client with connection pooling, reused for
//! every chat-completion call. Creating a client per request would pay the
//! TLS handshake and builder overhead each time.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Global HTTP client for OpenAI API calls
///
/// 120s timeout covers the model's generation time for large file payloads;
/// keepalive and pooling make repeated analyses cheap.
static OPENAI_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .build()
        .expect("Failed to create OpenAI HTTP client")
});

/// Get the global OpenAI HTTP client
#[inline]
pub fn openai_client() -> &'static Client {
    &OPENAI_CLIENT
}
