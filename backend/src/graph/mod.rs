//! Minimal Microsoft Graph client for the donation workbook.
//!
//! Covers exactly the five calls the service needs: the OAuth2
//! client-credentials token exchange, resolving a site URL and a workbook
//! path into opaque Graph IDs, appending a row to a workbook table, and
//! listing the workbook's tables for the 404 diagnostic. Every call is a
//! single best-effort HTTP round trip; there are no retries and nothing is
//! cached across requests.

use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, CONTROLS};
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

use crate::config::Config;

/// Characters escaped when an opaque ID or table name is interpolated as a
/// URL path segment. Excel table names may legally contain `?` or `#`, which
/// would otherwise turn into a query string or fragment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn segment(s: &str) -> PercentEncode<'_> {
    utf8_percent_encode(s, PATH_SEGMENT)
}

/// Production identity endpoint host.
pub const DEFAULT_LOGIN_BASE: &str = "https://login.microsoftonline.com";
/// Production Graph endpoint, including the API version segment.
pub const DEFAULT_GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// Scope requested in the client-credentials grant.
const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Graph (or the identity endpoint) answered with a non-success status.
    /// The upstream body is preserved verbatim so handlers can pass it
    /// through to the caller.
    #[error("{context}: {body}")]
    Upstream {
        context: String,
        status: u16,
        body: String,
    },

    #[error("Malformed Graph response: missing field '{0}'")]
    MissingField(&'static str),
}

/// Thin wrapper over a shared `reqwest::Client`.
///
/// The base URLs are constructor parameters so tests can point the client at
/// a local mock server; production code passes the `DEFAULT_*` constants.
#[derive(Clone)]
pub struct GraphClient {
    http: Client,
    login_base: String,
    graph_base: String,
}

impl GraphClient {
    pub fn new(
        http: Client,
        login_base: impl Into<String>,
        graph_base: impl Into<String>,
    ) -> Self {
        Self {
            http,
            login_base: login_base.into(),
            graph_base: graph_base.into(),
        }
    }

    /// Performs the client-credentials grant using the configured Azure app
    /// registration.
    ///
    /// Returns `Ok(None)` when any of tenant ID, client ID or client secret
    /// is unconfigured; that is not an error, it tells the caller to fall
    /// back to other credential sources. A rejection from the identity
    /// endpoint is an error carrying the response body.
    pub async fn get_access_token(&self, config: &Config) -> Result<Option<String>, GraphError> {
        let (Some(tenant_id), Some(client_id), Some(client_secret)) = (
            config.tenant_id.as_deref(),
            config.client_id.as_deref(),
            config.client_secret.as_deref(),
        ) else {
            return Ok(None);
        };

        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ];

        let res = self
            .http
            .post(format!("{}/{}/oauth2/v2.0/token", self.login_base, tenant_id))
            .form(&params)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GraphError::Upstream {
                context: "Failed to get access token".to_string(),
                status,
                body,
            });
        }

        let body: Value = res.json().await?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(GraphError::MissingField("access_token"))?;
        Ok(Some(token.to_string()))
    }

    /// Resolves a human-readable SharePoint site URL into the site's opaque
    /// Graph ID by splitting it into hostname and server-relative path.
    pub async fn get_site_id(&self, token: &str, site_url: &str) -> Result<String, GraphError> {
        let parsed = Url::parse(site_url)?;
        let hostname = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;
        // The root site is addressed by hostname alone; any other site needs
        // the `:/server/relative/path` suffix.
        let suffix = match parsed.path() {
            "" | "/" => String::new(),
            path => format!(":{}", path),
        };

        let res = self
            .http
            .get(format!("{}/sites/{}{}", self.graph_base, hostname, suffix))
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GraphError::Upstream {
                context: format!("Failed to resolve Site ID for {}", site_url),
                status,
                body,
            });
        }

        let body: Value = res.json().await?;
        body.get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(GraphError::MissingField("id"))
    }

    /// Resolves a server-relative workbook path (e.g. `/Donations.xlsx`) into
    /// the drive item's opaque Graph ID.
    pub async fn get_item_id(
        &self,
        token: &str,
        site_id: &str,
        file_path: &str,
    ) -> Result<String, GraphError> {
        let res = self
            .http
            .get(format!(
                "{}/sites/{}/drive/root:{}",
                self.graph_base,
                segment(site_id),
                file_path
            ))
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GraphError::Upstream {
                context: format!("Failed to resolve Item ID for {}", file_path),
                status,
                body,
            });
        }

        let body: Value = res.json().await?;
        body.get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(GraphError::MissingField("id"))
    }

    /// Appends rows to a named workbook table and returns Graph's raw
    /// row-creation result untouched, so the handler can pass it through.
    pub async fn add_table_row(
        &self,
        token: &str,
        site_id: &str,
        item_id: &str,
        table_name: &str,
        values: &[Vec<String>],
    ) -> Result<Value, GraphError> {
        let res = self
            .http
            .post(format!(
                "{}/sites/{}/drive/items/{}/workbook/tables/{}/rows/add",
                self.graph_base,
                segment(site_id),
                segment(item_id),
                segment(table_name)
            ))
            .bearer_auth(token)
            .json(&json!({ "values": values }))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GraphError::Upstream {
                context: "Graph API call failed".to_string(),
                status,
                body,
            });
        }

        Ok(res.json().await?)
    }

    /// Lists the names of all tables in the workbook. Only used to enrich
    /// the error response after a 404 from `add_table_row`.
    pub async fn list_tables(
        &self,
        token: &str,
        site_id: &str,
        item_id: &str,
    ) -> Result<Vec<String>, GraphError> {
        let res = self
            .http
            .get(format!(
                "{}/sites/{}/drive/items/{}/workbook/tables",
                self.graph_base,
                segment(site_id),
                segment(item_id)
            ))
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GraphError::Upstream {
                context: "Failed to list workbook tables".to_string(),
                status,
                body,
            });
        }

        let body: Value = res.json().await?;
        let names = body
            .get("value")
            .and_then(Value::as_array)
            .map(|tables| {
                tables
                    .iter()
                    .filter_map(|t| t.get("name").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(names)
    }
}
