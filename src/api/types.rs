use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// Envelope returned by the GraphQL endpoint. `errors` wins over `data`
/// whenever it is present, even if the list is empty.
#[derive(Debug, Default, Deserialize)]
pub struct GraphQLResponse<T = Value> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: Option<String>,
}

impl<T> GraphQLResponse<T> {
    /// Message of the first reported error, if the upstream reported any.
    pub fn first_error(&self) -> Option<&str> {
        let errors = self.errors.as_ref()?;
        Some(
            errors
                .first()
                .and_then(|e| e.message.as_deref())
                .unwrap_or(UNKNOWN_UPSTREAM_ERROR),
        )
    }
}

pub const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error from LeetCode";

// Route parameter types
#[derive(Debug, Clone, Serialize)]
pub struct UserParams {
    pub username: String,
    /// Forwarded as given; see [`passthrough`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct ProblemFilters {
    pub limit: Option<String>,
    pub skip: Option<String>,
    pub tags: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingParams {
    pub first: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageStatsParams {
    pub username: String,
}

/// A query-string value as a GraphQL variable: a number when it parses as
/// one, the raw string otherwise. The upstream decides what is acceptable.
pub fn passthrough(raw: &str) -> Value {
    raw.parse::<i64>().map_or_else(|_| Value::from(raw), Value::from)
}
