use axum::{
    Json,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
};
use serde_json::{Value, json};

use super::AppState;
use super::dispatcher::ApiResult;
use super::error::ApiError;
use super::routes::Route;
use crate::api::types::{
    LanguageStatsParams, ProblemFilters, TrendingParams, UserParams, passthrough,
};

/// Query-string pairs in request order. Repeated keys are kept and lookups
/// take the first occurrence, so `?first=1&first=2` reads as `1`.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn owned(&self, key: &str) -> Option<String> {
        self.first(key).map(String::from)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(pairs))
    }
}

/// Leading-integer parse: optional sign, then digits, with anything after
/// the digits ignored. `"20"` and `"20x"` give 20, `"abc"` gives nothing.
/// A digit run past the `i64` range saturates.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    Some(if negative { -magnitude } else { magnitude })
}

async fn user_details(state: &AppState, route: Route, params: UserParams) -> ApiResult {
    let route = route.descriptor();
    state
        .dispatcher
        .fetch_user_details(&params, route.formatter_or_identity(), route.query)
        .await
}

fn user(username: String) -> UserParams {
    UserParams {
        username,
        limit: None,
    }
}

fn user_with_limit(username: String, query: &QueryParams) -> UserParams {
    let limit = query
        .first("limit")
        .filter(|raw| !raw.is_empty())
        .map(passthrough);
    UserParams { username, limit }
}

pub async fn user_data(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult {
    user_details(&state, Route::UserData, user(username)).await
}

pub async fn user_badges(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult {
    user_details(&state, Route::UserBadges, user(username)).await
}

pub async fn user_contest(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult {
    user_details(&state, Route::UserContest, user(username)).await
}

pub async fn user_contest_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult {
    user_details(&state, Route::UserContestHistory, user(username)).await
}

pub async fn solved_problem(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult {
    user_details(&state, Route::SolvedProblem, user(username)).await
}

pub async fn submission(
    State(state): State<AppState>,
    Path(username): Path<String>,
    query: QueryParams,
) -> ApiResult {
    user_details(&state, Route::Submission, user_with_limit(username, &query)).await
}

pub async fn ac_submission(
    State(state): State<AppState>,
    Path(username): Path<String>,
    query: QueryParams,
) -> ApiResult {
    user_details(&state, Route::AcSubmission, user_with_limit(username, &query)).await
}

pub async fn calendar(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult {
    user_details(&state, Route::Calendar, user(username)).await
}

pub async fn daily_problem(State(state): State<AppState>) -> ApiResult {
    let route = Route::DailyProblem.descriptor();
    state
        .dispatcher
        .fetch_single_problem(route.formatter_or_identity(), route.query, None)
        .await
}

pub async fn select_problem(State(state): State<AppState>, query: QueryParams) -> ApiResult {
    let Some(title_slug) = query.first("titleSlug") else {
        return Err(ApiError::InvalidParameter {
            error: "Missing or invalid query parameter: titleSlug",
            solution: "put query after select",
            example: "localhost:3000/select?titleSlug=two-sum",
        });
    };

    let route = Route::SelectProblem.descriptor();
    state
        .dispatcher
        .fetch_single_problem(route.formatter_or_identity(), route.query, Some(title_slug))
        .await
}

pub async fn problems(State(state): State<AppState>, query: QueryParams) -> ApiResult {
    let filters = ProblemFilters {
        limit: query.owned("limit"),
        skip: query.owned("skip"),
        tags: query.owned("tags"),
        difficulty: query.owned("difficulty"),
    };

    let route = Route::Problems.descriptor();
    state
        .dispatcher
        .fetch_problems(&filters, route.formatter_or_identity(), route.query)
        .await
}

pub async fn trending_category_topics(
    State(state): State<AppState>,
    query: QueryParams,
) -> ApiResult {
    let Some(first) = query.first("first").and_then(parse_leading_int) else {
        return Err(ApiError::InvalidParameter {
            error: "Missing or invalid query parameter: limit",
            solution: "put query after discussion",
            example: "localhost:3000/trendingDiscuss?first=20",
        });
    };

    let route = Route::TrendingCategoryTopics.descriptor();
    state
        .dispatcher
        .fetch_trending_topics(&TrendingParams { first }, route.formatter_or_identity(), route.query)
        .await
}

pub async fn language_stats(State(state): State<AppState>, query: QueryParams) -> ApiResult {
    let Some(username) = query.owned("username").filter(|u| !u.is_empty()) else {
        return Err(ApiError::InvalidParameter {
            error: "Missing or invalid query parameter: username",
            solution: "put query after discussion",
            example: "localhost:3000/languageStats?username=uwi",
        });
    };

    let route = Route::LanguageStats.descriptor();
    state
        .dispatcher
        .fetch_data_raw_format(&LanguageStatsParams { username }, route.query)
        .await
}

/// Lists every route this service answers.
pub async fn index() -> Json<Value> {
    let routes: Vec<Value> = Route::ALL
        .iter()
        .map(|route| {
            let d = route.descriptor();
            json!({ "name": d.name, "path": d.path })
        })
        .collect();

    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "routes": routes,
    }))
}
