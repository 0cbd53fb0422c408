//! Shared outbound HTTP client.

use std::sync::LazyLock;

static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Process-wide reqwest client so outbound calls reuse one connection pool.
pub fn shared_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}
