//! HTTP API Client
//!
//! Functions for communicating with the QueueLeaf REST API. Every request
//! carries JSON headers and cookie credentials; non-2xx responses become an
//! [`ApiError`] carrying the numeric status so callers can branch on 401
//! without probing error shapes.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::model::{DailyStat, GlobalStats, JoinRequest, PublicTicket, Queue, Ticket, TicketStatus};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://queueleaf-backend.onrender.com/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("apiBase") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Errors ============

/// A failed API call. `status` is the HTTP status, or 0 for network and
/// parse failures that never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn network(err: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: format!("Network error: {err}"),
        }
    }

    /// True when the backend rejected the session (redirect to login).
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// True when the backend refused because dependent rows exist, e.g.
    /// deleting a queue that still has tickets.
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

// ============ Request plumbing ============

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(ApiError { status, message });
    }

    response.json().await.map_err(|e| ApiError {
        status,
        message: format!("Parse error: {e}"),
    })
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_defaults(Request::get(&format!("{}{}", get_api_base(), path)))
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

async fn send_json<T: DeserializeOwned, B: serde::Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_defaults(builder)
        .json(body)
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

async fn send_empty<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = with_defaults(builder)
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

// ============ Auth ============

/// Check the current session (`GET /auth/me`).
pub async fn verify_auth() -> Result<(), ApiError> {
    let _: serde_json::Value = get_json("/auth/me").await?;
    Ok(())
}

pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let url = format!("{}/auth/login", get_api_base());
    let _: serde_json::Value =
        send_json(Request::post(&url), &LoginRequest { email, password }).await?;
    Ok(())
}

pub async fn logout() -> Result<(), ApiError> {
    let url = format!("{}/auth/logout", get_api_base());
    let _: serde_json::Value = send_empty(Request::post(&url)).await?;
    Ok(())
}

// ============ Queues ============

pub async fn fetch_queues() -> Result<Vec<Queue>, ApiError> {
    get_json("/queues").await
}

pub async fn create_queue(name: &str, avg_service_sec: u32) -> Result<Queue, ApiError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CreateQueueRequest<'a> {
        name: &'a str,
        avg_service_sec: u32,
    }

    let url = format!("{}/queues", get_api_base());
    send_json(
        Request::post(&url),
        &CreateQueueRequest {
            name,
            avg_service_sec,
        },
    )
    .await
}

pub async fn toggle_queue(queue_id: i64) -> Result<(), ApiError> {
    let url = format!("{}/queues/{}/toggle", get_api_base(), queue_id);
    let _: serde_json::Value = send_empty(Request::patch(&url)).await?;
    Ok(())
}

pub async fn set_queue_message(queue_id: i64, message: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct MessageRequest<'a> {
        message: &'a str,
    }

    let url = format!("{}/queues/{}/message", get_api_base(), queue_id);
    let _: serde_json::Value = send_json(Request::patch(&url), &MessageRequest { message }).await?;
    Ok(())
}

pub async fn set_queue_avg(queue_id: i64, avg_service_sec: u32) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct AvgRequest {
        avg_service_sec: u32,
    }

    let url = format!("{}/queues/{}/avg", get_api_base(), queue_id);
    let _: serde_json::Value =
        send_json(Request::patch(&url), &AvgRequest { avg_service_sec }).await?;
    Ok(())
}

/// Delete a queue. `force` retries past the backend's tickets-exist conflict.
pub async fn delete_queue(queue_id: i64, force: bool) -> Result<(), ApiError> {
    let suffix = if force { "?force=true" } else { "" };
    let url = format!("{}/queues/{}{}", get_api_base(), queue_id, suffix);
    let _: serde_json::Value = send_empty(Request::delete(&url)).await?;
    Ok(())
}

// ============ Tickets ============

#[derive(Debug, serde::Deserialize)]
pub struct JoinResponse {
    pub ticket: PublicTicket,
}

pub async fn create_ticket(request: &JoinRequest) -> Result<JoinResponse, ApiError> {
    let url = format!("{}/tickets", get_api_base());
    send_json(Request::post(&url), request).await
}

/// Full ticket list for a queue (staff view).
pub async fn fetch_tickets(queue_id: i64) -> Result<Vec<Ticket>, ApiError> {
    get_json(&format!("/tickets/{queue_id}")).await
}

/// A customer's own ticket, including position, ETA and queue snapshot.
pub async fn fetch_public_ticket(ticket_id: i64) -> Result<PublicTicket, ApiError> {
    get_json(&format!("/tickets/public/{ticket_id}")).await
}

pub async fn update_ticket_status(ticket_id: i64, status: TicketStatus) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct StatusRequest {
        status: TicketStatus,
    }

    let url = format!("{}/tickets/{}/status", get_api_base(), ticket_id);
    let _: serde_json::Value = send_json(Request::patch(&url), &StatusRequest { status }).await?;
    Ok(())
}

pub async fn leave_ticket(ticket_id: i64) -> Result<(), ApiError> {
    let url = format!("{}/tickets/{}/leave", get_api_base(), ticket_id);
    let _: serde_json::Value = send_empty(Request::patch(&url)).await?;
    Ok(())
}

// ============ Analytics ============

pub async fn fetch_global_stats() -> Result<GlobalStats, ApiError> {
    get_json("/analytics/global").await
}

pub async fn fetch_daily(days: u32) -> Result<Vec<DailyStat>, ApiError> {
    get_json(&format!("/analytics/daily?days={days}")).await
}

/// Custom date range; `start`/`end` are `YYYY-MM-DD`.
pub async fn fetch_custom_range(start: &str, end: &str) -> Result<Vec<DailyStat>, ApiError> {
    get_json(&format!("/analytics/custom?start={start}&end={end}")).await
}

pub async fn fetch_queue_daily(queue_id: i64, days: u32) -> Result<Vec<DailyStat>, ApiError> {
    get_json(&format!("/analytics/queue/{queue_id}/daily?days={days}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_detected_by_status() {
        let err = ApiError {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(err.is_unauthorized());

        let err = ApiError {
            status: 500,
            message: "boom".into(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn conflict_is_distinct_from_other_failures() {
        let conflict = ApiError {
            status: 409,
            message: "queue has tickets".into(),
        };
        assert!(conflict.is_conflict());
        assert!(!conflict.is_unauthorized());

        // Auth and network failures must never look like a conflict, the
        // dashboard only offers force-delete on a real one.
        for status in [0, 400, 401, 500] {
            let err = ApiError {
                status,
                message: "other".into(),
            };
            assert!(!err.is_conflict());
        }
    }

    #[test]
    fn network_errors_carry_status_zero() {
        let err = ApiError {
            status: 0,
            message: "Network error: failed".into(),
        };
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Network error: failed");
    }
}
