//! Blocking client for the Zoom REST API.
//!
//! # Overview
//! Two calls are provided, `get_users` and `get_meetings`, plus the generic
//! `request` they are built on. Each call builds an `HttpRequest` value,
//! runs it through a `Transport`, and returns the decoded JSON body or an
//! `ApiError`.
//!
//! # Design
//! - `ZoomClient` holds no per-call state. Route, method, headers and body
//!   live in the `HttpRequest` built for that call.
//! - GET arguments are filtered (falsy entries dropped) and sent as a query
//!   string; other methods send them as a JSON body.
//! - The HTTP facility is a trait. `UreqTransport` is the default; tests plug
//!   in canned transports.
//! - Token acquisition is out of scope. `TokenProvider` is where an OAuth
//!   flow would plug in; by default the bearer token is empty.
//!
//! ```no_run
//! use serde_json::json;
//! use zoom_core::ZoomClient;
//!
//! let client = ZoomClient::new("client-id", "client-secret");
//! let args = json!({"status": "active"}).as_object().cloned().unwrap_or_default();
//! match client.get_users(&args) {
//!     Ok(users) => println!("{users}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod args;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use args::Args;
pub use auth::{NoToken, StaticToken, TokenProvider};
pub use client::{ZoomClient, DEFAULT_BASE_URI, REQUEST_TIMEOUT};
pub use config::{ConfigError, ZoomConfig};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::UreqTransport;
