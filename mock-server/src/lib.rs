//! In-memory imitation of the Zoom endpoints consumed by `zoom-core`.
//!
//! Routes live under `/v2` so a client pointed at `http://<addr>/v2/` sees the
//! same paths as against `https://api.zoom.us/v2/`. Every route requires a
//! non-empty bearer token; the token itself is not checked.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const MAX_PAGE_SIZE: usize = 300;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub uuid: String,
    pub id: u64,
    pub host_id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserList {
    pub page_count: usize,
    pub page_number: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeetingList {
    pub page_size: usize,
    pub total_records: usize,
    pub meetings: Vec<Meeting>,
}

/// Error payload in Zoom's shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: u32,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub status: Option<String>,
    pub page_size: Option<usize>,
    pub page_number: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListMeetingsParams {
    pub page_size: Option<usize>,
}

/// Users and meetings served by the mock.
#[derive(Debug, Default)]
pub struct Directory {
    pub users: Vec<User>,
    pub meetings: Vec<Meeting>,
}

impl Directory {
    /// Two active users, one pending, and a few meetings.
    pub fn seeded() -> Self {
        let user = |id: &str, first: &str, last: &str, status: &str| User {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            kind: 1,
            status: status.to_string(),
        };
        let meeting = |id: u64, host: &str, topic: &str, start: &str| Meeting {
            uuid: Uuid::new_v4().to_string(),
            id,
            host_id: host.to_string(),
            topic: topic.to_string(),
            kind: 2,
            start_time: start.to_string(),
            duration: 30,
            timezone: "UTC".to_string(),
        };
        Self {
            users: vec![
                user("abc123", "Ada", "Lovelace", "active"),
                user("def456", "Grace", "Hopper", "active"),
                user("ghi789", "Alan", "Turing", "pending"),
            ],
            meetings: vec![
                meeting(85746065432, "abc123", "Weekly sync", "2026-10-20T09:00:00Z"),
                meeting(85746065433, "abc123", "Design review", "2026-10-21T14:00:00Z"),
                meeting(91234567890, "def456", "Compiler office hours", "2026-10-22T16:30:00Z"),
            ],
        }
    }
}

pub type Db = Arc<Directory>;

pub fn app() -> Router {
    app_with(Directory::seeded())
}

pub fn app_with(directory: Directory) -> Router {
    let db: Db = Arc::new(directory);
    Router::new()
        .route("/v2/users", get(list_users))
        .route("/v2/users/{user_id}/meetings/", get(list_meetings))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, code: u32, message: impl Into<String>) -> Response {
    let body = ApiErrorBody {
        code,
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

/// Reject requests without `Authorization: Bearer <something>`.
fn authorize(headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer"))
        .map(str::trim)
        .unwrap_or_default();
    if token.is_empty() {
        tracing::debug!("rejecting request without access token");
        return Err(error(StatusCode::UNAUTHORIZED, 124, "Invalid access token."));
    }
    Ok(())
}

fn page_size(requested: Option<usize>) -> usize {
    match requested {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(n) => n.min(MAX_PAGE_SIZE),
    }
}

async fn list_users(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<ListUsersParams>,
) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    let status = params.status.as_deref().unwrap_or("active");
    let page_size = page_size(params.page_size);
    let page_number = params.page_number.unwrap_or(1).max(1);

    let matching: Vec<&User> = db.users.iter().filter(|u| u.status == status).collect();
    let total_records = matching.len();
    let users = matching
        .into_iter()
        .skip((page_number - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    Json(UserList {
        page_count: total_records.div_ceil(page_size),
        page_number,
        page_size,
        total_records,
        users,
    })
    .into_response()
}

async fn list_meetings(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Query(params): Query<ListMeetingsParams>,
) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    if !db.users.iter().any(|u| u.id == user_id || u.email == user_id) {
        return error(
            StatusCode::NOT_FOUND,
            1001,
            format!("User does not exist: {user_id}."),
        );
    }
    let page_size = page_size(params.page_size);
    let hosted: Vec<&Meeting> = db
        .meetings
        .iter()
        .filter(|m| {
            db.users
                .iter()
                .any(|u| u.id == m.host_id && (u.id == user_id || u.email == user_id))
        })
        .collect();

    Json(MeetingList {
        page_size,
        total_records: hosted.len(),
        meetings: hosted.into_iter().take(page_size).cloned().collect(),
    })
    .into_response()
}
