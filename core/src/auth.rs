//! Access-token extension point.
//!
//! The client does not acquire or refresh tokens. Whatever a `TokenProvider`
//! returns goes into `Authorization: Bearer <token>` unchanged. The default
//! `NoToken` returns the empty string, so an unconfigured client sends
//! `Bearer ` and the remote service answers 401.

use std::fmt;

/// Source of the bearer token attached to every request.
///
/// Plug an OAuth flow in here. It is called once per built request.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> String;
}

/// Provider that always yields the empty token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn access_token(&self) -> String {
        String::new()
    }
}

/// Provider returning a token obtained elsewhere.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

impl<F> TokenProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn access_token(&self) -> String {
        self()
    }
}
