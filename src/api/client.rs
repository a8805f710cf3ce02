use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::types::{GraphQLRequest, GraphQLResponse};

pub const LEETCODE_GRAPHQL: &str = "https://leetcode.com/graphql";
const LEETCODE_ORIGIN: &str = "https://leetcode.com";

/// The single upstream this service talks to. Handlers only ever see this
/// trait, so tests can swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQlUpstream: Send + Sync {
    /// Post `query` with `variables` and return the decoded envelope.
    /// Transport and decode failures are errors; GraphQL `errors` are not.
    async fn post_query(&self, query: &str, variables: Value) -> Result<GraphQLResponse>;
}

#[derive(Clone)]
pub struct LeetCodeClient {
    client: Client,
    endpoint: String,
}

impl LeetCodeClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    fn graphql_request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Content-Type", "application/json")
            .header("Referer", LEETCODE_ORIGIN)
    }
}

#[async_trait]
impl GraphQlUpstream for LeetCodeClient {
    async fn post_query(&self, query: &str, variables: Value) -> Result<GraphQLResponse> {
        let body = GraphQLRequest { query, variables };

        let resp = self
            .graphql_request(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await
            .context("Failed to send GraphQL request")?;

        let status = resp.status();
        tracing::trace!(%status, "upstream responded");

        resp.json()
            .await
            .with_context(|| format!("Failed to parse GraphQL response (HTTP {status})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode, header},
        routing::post,
    };
    use serde_json::json;

    /// Serves `app` on an ephemeral local port and returns its GraphQL URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/graphql")
    }

    #[tokio::test]
    async fn sends_json_body_and_leetcode_headers() {
        let app = Router::new().route(
            "/graphql",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let value = |name: header::HeaderName| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from)
                };
                Json(json!({
                    "data": {
                        "contentType": value(header::CONTENT_TYPE),
                        "referer": value(header::REFERER),
                        "body": body,
                    }
                }))
            }),
        );
        let client = LeetCodeClient::new(&serve(app).await).unwrap();

        let resp = client
            .post_query("query q { a }", json!({ "username": "uwi" }))
            .await
            .unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data["contentType"], "application/json");
        assert_eq!(data["referer"], "https://leetcode.com");
        assert_eq!(
            data["body"],
            json!({ "query": "query q { a }", "variables": { "username": "uwi" } })
        );
    }

    #[tokio::test]
    async fn error_status_with_graphql_body_is_decoded() {
        let app = Router::new().route(
            "/graphql",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": [{ "message": "nope" }] })),
                )
            }),
        );
        let client = LeetCodeClient::new(&serve(app).await).unwrap();

        let resp = client.post_query("{ a }", json!({})).await.unwrap();
        assert_eq!(resp.first_error(), Some("nope"));
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let app = Router::new().route(
            "/graphql",
            post(|| async {
                (
                    StatusCode::BAD_GATEWAY,
                    [(header::CONTENT_TYPE, "text/html")],
                    "<html>bad gateway</html>",
                )
            }),
        );
        let client = LeetCodeClient::new(&serve(app).await).unwrap();

        let err = client.post_query("{ a }", json!({})).await.unwrap_err();
        assert!(format!("{err:#}").contains("HTTP 502"), "{err:#}");
    }
}
