//! Identity provider abstraction
//!
//! The signed-in user itself is plain data ([`crate::domain::Identity`])
//! handed to constructors; the provider only carries the sign-out call.
//! Sign-out is best effort: the UI navigates away before the outcome is
//! known, so a failure here is logged and never surfaced.

use anyhow::Result;
use async_trait::async_trait;

/// Remote identity service surface consumed by the worker.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Invalidate the current session with the identity service
    async fn sign_out(&self) -> Result<()>;
}

/// HTTP client for the hosted identity service.
pub struct RestIdentity {
    base_url: String,
    client: reqwest::Client,
}

impl RestIdentity {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for RestIdentity {
    async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/session/sign-out", self.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("sign-out returned status {}", response.status());
        }
        Ok(())
    }
}

/// Local identity used in mock mode and tests. `fail_sign_out` simulates
/// an identity service that rejects the sign-out call.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    pub fail_sign_out: bool,
}

impl StaticIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_sign_out: true,
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out {
            anyhow::bail!("identity service rejected sign-out");
        }
        Ok(())
    }
}
