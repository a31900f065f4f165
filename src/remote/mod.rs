//! Hosted table backend client
//!
//! Thin PostgREST-style client over reqwest: per-table select with server-side
//! filtering, ordering, and limits, plus insert and update-by-id returning the
//! stored representation. No retry and no backoff; failures propagate to the
//! caller as [`DataError::Remote`].

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::entity::query::{parse_order, Match, Where};
use crate::error::{DataError, Result};

/// Client for one hosted backend, shared by all tables
#[derive(Clone)]
pub struct RemoteTableClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl RemoteTableClient {
    /// Build a client when the config carries both credentials
    pub fn from_config(config: &RemoteConfig) -> Option<Self> {
        let (Some(url), Some(access_key)) = (config.url.clone(), config.access_key.clone()) else {
            return None;
        };

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("resilientgov-data/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Some(Self {
            http,
            base_url: url.trim_end_matches('/').to_string(),
            access_key,
        })
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.endpoint(table))
            .header("apikey", &self.access_key)
            .bearer_auth(&self.access_key)
    }

    /// Fetch rows from `table` with optional filtering, ordering, and limit
    pub async fn select(
        &self,
        table: &str,
        where_: Option<&Where>,
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>> {
        let mut params: Vec<(String, String)> = vec![("select".to_string(), "*".to_string())];
        if let Some(where_) = where_ {
            for (field, m) in where_.clauses() {
                params.push((field.clone(), filter_param(m)));
            }
        }
        if let Some(order_by) = order_by {
            params.push(("order".to_string(), order_param(order_by)));
        }
        if let Some(limit) = limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        debug!(table, ?params, "remote select");
        let response = self
            .request(Method::GET, table)
            .query(&params)
            .send()
            .await?;
        let response = check_status(response, table).await?;
        Ok(response.json().await?)
    }

    /// Insert one row and return its stored representation
    pub async fn insert(&self, table: &str, payload: &Value) -> Result<Value> {
        debug!(table, "remote insert");
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        let response = check_status(response, table).await?;
        let rows: Vec<Value> = response.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| DataError::Remote(format!("{table}: insert returned no rows")))
    }

    /// Patch the row with the given id and return its stored representation
    pub async fn update(&self, table: &str, id: &str, patch: &Value) -> Result<Value> {
        debug!(table, id, "remote update");
        let response = self
            .request(Method::PATCH, table)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        let response = check_status(response, table).await?;
        let rows: Vec<Value> = response.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| DataError::not_found(table, id))
    }
}

async fn check_status(response: reqwest::Response, table: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DataError::Remote(format!(
        "{table}: {status}: {}",
        body.chars().take(200).collect::<String>()
    )))
}

fn order_param(order_by: &str) -> String {
    let (field, descending) = parse_order(order_by);
    if descending {
        format!("{field}.desc")
    } else {
        format!("{field}.asc")
    }
}

fn filter_param(m: &Match) -> String {
    match m {
        Match::Eq(value) => format!("eq.{}", literal(value)),
        Match::In(values) => {
            let rendered: Vec<String> = values.iter().map(quoted).collect();
            format!("in.({})", rendered.join(","))
        }
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unconfigured_yields_no_client() {
        assert!(RemoteTableClient::from_config(&RemoteConfig::disabled()).is_none());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = RemoteTableClient::from_config(&RemoteConfig {
            url: Some("https://example.supabase.co/".to_string()),
            access_key: Some("key".to_string()),
            request_timeout_ms: 1000,
        })
        .unwrap();
        assert_eq!(
            client.endpoint("infrastructure_assets"),
            "https://example.supabase.co/rest/v1/infrastructure_assets"
        );
    }

    #[test]
    fn test_order_param_directions() {
        assert_eq!(order_param("overall_risk_score"), "overall_risk_score.asc");
        assert_eq!(order_param("-overall_risk_score"), "overall_risk_score.desc");
    }

    #[test]
    fn test_filter_params() {
        assert_eq!(filter_param(&Match::Eq(json!("active"))), "eq.active");
        assert_eq!(filter_param(&Match::Eq(json!(83))), "eq.83");
        assert_eq!(
            filter_param(&Match::In(vec![json!("high"), json!("critical")])),
            "in.(\"high\",\"critical\")"
        );
        assert_eq!(
            filter_param(&Match::In(vec![json!(1), json!(2)])),
            "in.(1,2)"
        );
    }
}
