//! API Response types
//!
//! Standardized response envelope for the booking API.

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All endpoints return this shape:
/// ```json
/// {
///   "success": true,
///   "data": { ... }
/// }
/// ```
///
/// Error responses set `success = false` and populate `error` with a
/// human-readable message. Booking actions that attempt a customer
/// notification additionally carry `emailSent`, so the admin UI can
/// distinguish "action failed" from "action succeeded but the
/// customer was not notified".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the customer notification was dispatched (booking actions only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_sent: Option<bool>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            email_sent: None,
        }
    }

    /// Create a successful response carrying the notification outcome
    pub fn ok_with_email(data: T, email_sent: bool) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            email_sent: Some(email_sent),
        }
    }

    /// Create a successful response with no payload (e.g. deletions)
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            email_sent: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            email_sent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_sent_flag_is_omitted_unless_set() {
        let json = serde_json::to_string(&ApiResponse::ok(1)).unwrap();
        assert!(!json.contains("emailSent"));

        let json = serde_json::to_string(&ApiResponse::ok_with_email(1, false)).unwrap();
        assert!(json.contains("\"emailSent\":false"));
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_string(&ApiResponse::<()>::error("Booking not found")).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("Booking not found"));
    }
}
