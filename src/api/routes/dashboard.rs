//! Dashboard Route
//!
//! - GET /admin/wishes - HTML summary of every stored wish

use axum::{extract::State, response::Html};
use chrono::Local;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::render_dashboard;

/// GET /admin/wishes
///
/// Read-only; reflects the store at request time.
pub async fn show_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let wishes = state.store.load().await.map_err(ApiError::Dashboard)?;
    let html = render_dashboard(&wishes, &state.config.dashboard, Local::now());
    Ok(Html(html))
}
