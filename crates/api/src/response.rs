//! Shared response envelope types for API handlers.
//!
//! All note endpoints use a `{ "success": true, "data": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` construction
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(notes)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
