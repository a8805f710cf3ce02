//! Today's submission count, computed from the user's submission calendar.
//!
//! "Today" is the server's local date while calendar keys are bucketed by
//! their UTC date. Near local midnight the two can disagree; the comparison
//! is kept exactly that way.

use std::collections::HashMap;

use anyhow::{Context, Result};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Local, NaiveDate};
use serde_json::{Value, json};

use super::AppState;
use super::dispatcher::ApiResult;
use super::error::ApiError;
use super::routes::Route;
use crate::api::client::GraphQlUpstream;

const CALENDAR_FAILURE: &str = "Failed to fetch submission calendar";

pub async fn user_profile_today(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult {
    let today = Local::now().date_naive();
    let total = submissions_on(state.dispatcher.upstream(), &username, today).await?;

    Ok(Json(json!({
        "username": username,
        "todaySubmissionCount": total,
    })))
}

async fn submissions_on(
    upstream: &dyn GraphQlUpstream,
    username: &str,
    day: NaiveDate,
) -> Result<i64, ApiError> {
    tracing::debug!(username, day = %day.format("%Y-%m-%d"), "counting submissions");

    let resp = upstream
        .post_query(Route::UserProfileToday.descriptor().query, json!({ "username": username }))
        .await
        .map_err(ApiError::internal(CALENDAR_FAILURE))?;

    if let Some(message) = resp.first_error() {
        return Err(ApiError::Upstream(message.to_string()));
    }

    let calendar = parse_calendar(resp.data.as_ref()).map_err(ApiError::internal(CALENDAR_FAILURE))?;
    Ok(count_on_day(&calendar, day))
}

/// The calendar arrives as a JSON document embedded in a string field.
pub fn parse_calendar(data: Option<&Value>) -> Result<HashMap<String, Value>> {
    let raw = data
        .and_then(|d| d["matchedUser"]["submissionCalendar"].as_str())
        .context("No submission calendar in response")?;
    serde_json::from_str(raw).context("Failed to parse submission calendar")
}

/// Sum the counts of every entry whose epoch key falls on `day` in UTC.
/// Keys that are not epoch seconds and counts that are not integers are
/// skipped.
pub fn count_on_day(calendar: &HashMap<String, Value>, day: NaiveDate) -> i64 {
    calendar
        .iter()
        .filter_map(|(timestamp, count)| {
            let secs: i64 = timestamp.trim().parse().ok()?;
            let date = DateTime::from_timestamp(secs, 0)?.date_naive();
            if date == day { count.as_i64() } else { None }
        })
        .sum()
}
