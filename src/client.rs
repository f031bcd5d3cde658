//! Client for the remote schedule source.

use schedboard_core::{Role, ScheduleRecord};
use serde_json::Value;

/// Fetch the schedule rows for the current role.
///
/// Only the instructor role has a schedule. Any transport or decode failure
/// degrades to an empty list; the views render the empty state instead of an
/// error. No retry and no timeout policy; when fetches race, the last
/// response to resolve wins.
pub async fn fetch_schedule(endpoint: &str, role: Role) -> Vec<ScheduleRecord> {
    if role != Role::Instructor {
        return Vec::new();
    }

    try_fetch_schedule(endpoint).await.unwrap_or_default()
}

async fn try_fetch_schedule(endpoint: &str) -> reqwest::Result<Vec<ScheduleRecord>> {
    reqwest::get(endpoint).await?.json().await
}

/// Fetch the administrative count summary (flat object of label -> number).
/// Failures degrade to `None`.
pub async fn fetch_counts(endpoint: &str) -> Option<Value> {
    let response = reqwest::get(endpoint).await.ok()?;
    response.json().await.ok()
}
