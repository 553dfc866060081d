//! Zoom REST client: request building, dispatch, and response parsing.
//!
//! # Design
//! `ZoomClient` holds credentials, a base URI fixed at construction, a token
//! provider and a transport. It carries no mutable state between calls. Each
//! call is `build_request` (pure, produces an `HttpRequest`) followed by
//! `fetch` (runs the request through the transport and interprets the
//! status). The request value is dropped when the call returns, so nothing
//! from one call can leak into the next and the client can be shared across
//! threads when its transport allows it.
//!
//! Callers that want to do the I/O themselves can use `build_request` and
//! `parse_response` directly and skip the transport.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::args::{add_query_arg, Args};
use crate::auth::{NoToken, StaticToken, TokenProvider};
use crate::config::ZoomConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;

pub const DEFAULT_BASE_URI: &str = "https://api.zoom.us/v2/";

/// Timeout handed to the transport with every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const JSON_CONTENT_TYPE: &str = "application/json";

/// True when `code` is in `[200, 300)`.
pub fn is_status_ok(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Client for the Zoom REST API.
#[derive(Clone)]
pub struct ZoomClient<T = UreqTransport> {
    client_id: String,
    client_secret: String,
    base_uri: String,
    token: Arc<dyn TokenProvider>,
    transport: T,
}

impl ZoomClient<UreqTransport> {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_transport(client_id, client_secret, UreqTransport::new())
    }

    /// Build a client from configuration. A configured access token is sent
    /// as-is; without one the client sends the empty token.
    pub fn from_config(config: &ZoomConfig) -> Self {
        let mut client = Self::new(config.client_id.clone(), config.client_secret.clone());
        if let Some(uri) = &config.base_uri {
            client = client.with_base_uri(uri);
        }
        if let Some(token) = &config.access_token {
            client = client.with_token_provider(StaticToken::new(token.clone()));
        }
        client
    }
}

impl<T> ZoomClient<T> {
    pub fn with_transport(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_uri: DEFAULT_BASE_URI.to_string(),
            token: Arc::new(NoToken),
            transport,
        }
    }

    /// Replace the base URI. It always ends in a single `/` so routes are
    /// appended by plain concatenation.
    pub fn with_base_uri(mut self, base_uri: &str) -> Self {
        self.base_uri = format!("{}/", base_uri.trim_end_matches('/'));
        self
    }

    pub fn with_token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token = Arc::new(provider);
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Describe a call to `route` without sending it.
    ///
    /// GET arguments become a query string after falsy entries are removed.
    /// Any other method sends the arguments, unfiltered, as a JSON body.
    pub fn build_request(
        &self,
        route: &str,
        args: &Args,
        method: HttpMethod,
    ) -> Result<HttpRequest, ApiError> {
        let headers = vec![
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.token.access_token()),
            ),
        ];

        let (route, body) = match method {
            HttpMethod::Get => (add_query_arg(route, args), None),
            _ => (route.to_string(), Some(serde_json::to_string(args)?)),
        };

        Ok(HttpRequest {
            method,
            url: format!("{}{route}", self.base_uri),
            headers,
            body,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn build_get_users(&self, args: &Args) -> Result<HttpRequest, ApiError> {
        self.build_request("users", args, HttpMethod::Get)
    }

    pub fn build_get_meetings(&self, user_id: &str, args: &Args) -> Result<HttpRequest, ApiError> {
        self.build_request(&format!("users/{user_id}/meetings/"), args, HttpMethod::Get)
    }

    /// Interpret a received response.
    ///
    /// The body is decoded as JSON; anything undecodable, including an empty
    /// body, becomes `Value::Null`. A status outside `[200, 300)` yields
    /// `ApiError::Response` carrying that decoded body.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        let body = decode_body(&response.body);
        if !is_status_ok(response.status) {
            warn!(status = response.status, "zoom api returned an error status");
            return Err(ApiError::Response {
                status: response.status,
                body,
            });
        }
        Ok(body)
    }
}

impl<T: Transport> ZoomClient<T> {
    /// Send a built request and interpret the response.
    pub fn fetch(&self, request: HttpRequest) -> Result<Value, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending zoom api request");
        let response = self.transport.execute(&request).map_err(|e| {
            warn!(method = %request.method, url = %request.url, error = %e, "zoom api request failed");
            ApiError::Transport(Box::new(e))
        })?;
        debug!(status = response.status, url = %request.url, "received zoom api response");
        self.parse_response(response)
    }

    /// Build and send a call to any route.
    pub fn request(&self, method: HttpMethod, route: &str, args: &Args) -> Result<Value, ApiError> {
        self.fetch(self.build_request(route, args, method)?)
    }

    /// `GET users`: list users on the account.
    pub fn get_users(&self, args: &Args) -> Result<Value, ApiError> {
        self.fetch(self.build_get_users(args)?)
    }

    /// `GET users/{user_id}/meetings/`: list a user's meetings. `user_id` is
    /// used as given.
    pub fn get_meetings(&self, user_id: &str, args: &Args) -> Result<Value, ApiError> {
        self.fetch(self.build_get_meetings(user_id, args)?)
    }
}

impl<T> fmt::Debug for ZoomClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_uri", &self.base_uri)
            .finish_non_exhaustive()
    }
}

fn decode_body(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            if !body.is_empty() {
                debug!(error = %e, "response body is not json");
            }
            Value::Null
        }
    }
}
