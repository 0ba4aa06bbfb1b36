//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::storage::{Wish, WishId};

// ============================================
// WISH DTOs
// ============================================

/// Append request body
///
/// Every field is optional at decode time; presence is checked by the handler
/// so that missing fields produce the API's own validation error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateWishRequest {
    /// Message body
    #[serde(default)]
    pub text: Option<String>,
    /// Client-supplied timestamp
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Optional client-supplied id
    #[serde(default)]
    pub id: Option<WishId>,
}

/// Append response body
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWishResponse {
    /// Always `true`
    pub success: bool,
    /// The stored wish
    pub wish: Wish,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Path of the backing file
    pub wishes_file: String,
    /// Number of stored wishes, when the file could be read
    pub total_wishes: Option<usize>,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
