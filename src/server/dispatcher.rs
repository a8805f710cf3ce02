//! Issues the upstream call for a route and turns the result into a response.
//!
//! Every operation follows the same protocol: bind variables, post the query,
//! fail on a reported `errors` list, otherwise hand `data` to the formatter.

use std::sync::Arc;

use anyhow::Context;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::error::{ApiError, UPSTREAM_FAILURE};
use crate::api::client::GraphQlUpstream;
use crate::api::format::Formatter;
use crate::api::types::{ProblemFilters, TrendingParams, UserParams, passthrough};

pub type ApiResult = Result<Json<Value>, ApiError>;

const DEFAULT_PROBLEM_LIMIT: i64 = 20;
const DEFAULT_PROBLEM_SKIP: i64 = 0;

#[derive(Clone)]
pub struct Dispatcher {
    upstream: Arc<dyn GraphQlUpstream>,
}

impl Dispatcher {
    pub fn new(upstream: Arc<dyn GraphQlUpstream>) -> Self {
        Self { upstream }
    }

    pub fn upstream(&self) -> &dyn GraphQlUpstream {
        self.upstream.as_ref()
    }

    pub async fn fetch_user_details(
        &self,
        params: &UserParams,
        formatter: Formatter,
        query: &str,
    ) -> ApiResult {
        tracing::debug!(username = %params.username, limit = ?params.limit, "fetching user details");
        let data = self.execute(query, variables(params)?).await?;
        Ok(Json(formatter(&data)))
    }

    /// `None` means the daily problem: the caller passes the daily query and
    /// no variables are bound.
    pub async fn fetch_single_problem(
        &self,
        formatter: Formatter,
        query: &str,
        title_slug: Option<&str>,
    ) -> ApiResult {
        tracing::debug!(?title_slug, "fetching single problem");
        let variables = match title_slug {
            Some(slug) => json!({ "titleSlug": slug }),
            None => json!({}),
        };
        let data = self.execute(query, variables).await?;
        Ok(Json(formatter(&data)))
    }

    pub async fn fetch_problems(
        &self,
        filters: &ProblemFilters,
        formatter: Formatter,
        query: &str,
    ) -> ApiResult {
        tracing::debug!(?filters, "fetching problem list");
        let data = self.execute(query, problem_variables(filters)).await?;
        Ok(Json(formatter(&data)))
    }

    pub async fn fetch_trending_topics(
        &self,
        params: &TrendingParams,
        formatter: Formatter,
        query: &str,
    ) -> ApiResult {
        tracing::debug!(first = params.first, "fetching trending topics");
        let data = self.execute(query, variables(params)?).await?;
        Ok(Json(formatter(&data)))
    }

    pub async fn fetch_data_raw_format<P: Serialize + ?Sized>(
        &self,
        params: &P,
        query: &str,
    ) -> ApiResult {
        let data = self.execute(query, variables(params)?).await?;
        Ok(Json(data))
    }

    async fn execute(&self, query: &str, variables: Value) -> Result<Value, ApiError> {
        let resp = self
            .upstream
            .post_query(query, variables)
            .await
            .map_err(ApiError::internal(UPSTREAM_FAILURE))?;

        if let Some(message) = resp.first_error() {
            tracing::warn!(error = message, "upstream reported an error");
            return Err(ApiError::Upstream(message.to_string()));
        }

        Ok(resp.data.unwrap_or(Value::Null))
    }
}

fn variables<P: Serialize + ?Sized>(params: &P) -> Result<Value, ApiError> {
    serde_json::to_value(params)
        .context("Failed to encode query variables")
        .map_err(ApiError::internal(UPSTREAM_FAILURE))
}

fn passthrough_or(raw: Option<&str>, default: i64) -> Value {
    raw.filter(|s| !s.is_empty())
        .map_or_else(|| Value::from(default), passthrough)
}

fn problem_variables(filters: &ProblemFilters) -> Value {
    let tags: Vec<&str> = filters
        .tags
        .as_deref()
        .map(|tags| tags.split_whitespace().collect())
        .unwrap_or_default();

    let mut filter = Map::new();
    filter.insert("tags".into(), json!(tags));
    if let Some(difficulty) = &filters.difficulty {
        filter.insert("difficulty".into(), json!(difficulty));
    }

    json!({
        "categorySlug": "",
        "limit": passthrough_or(filters.limit.as_deref(), DEFAULT_PROBLEM_LIMIT),
        "skip": passthrough_or(filters.skip.as_deref(), DEFAULT_PROBLEM_SKIP),
        "filters": filter,
    })
}
