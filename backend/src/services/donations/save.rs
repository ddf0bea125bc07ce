//! # Donation Save Service
//!
//! Implements `POST /api/save-donation`. The handler walks four precedence
//! chains (token, site, item, table), then appends the donation as a single
//! row to the resolved workbook table via the Graph client.
//!
//! ## Precedence chains (first non-empty wins)
//!
//! - token: `Authorization` header -> body `token` -> `SHAREPOINT_TOKEN` ->
//!   client-credentials exchange; none available is a 401.
//! - site: body `siteId` -> `SHAREPOINT_SITE_ID` -> resolved from
//!   `SHAREPOINT_SITE_URL`; none is a 400.
//! - item: body `itemId` -> `SHAREPOINT_ITEM_ID` -> resolved from
//!   `SHAREPOINT_EXCEL_FILE_PATH`; none is a 400.
//! - table: body `tableName` -> `SHAREPOINT_TABLE_NAME` ->
//!   `SHAREPOINT_WORKSHEET_NAME`; none is a 400.
//!
//! On a 404 from the row append the handler makes a best-effort call to list
//! the workbook's tables and includes their names in the error payload; a
//! failure of that secondary call is logged and swallowed. All other
//! non-success Graph statuses pass through with the upstream body. The donor
//! fields themselves are not validated here; the client form is the only
//! gatekeeper.

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::SaveDonationRequest;
use log::{error, info};
use serde_json::json;

use crate::config::Config;
use crate::graph::{GraphClient, GraphError};

pub async fn process(
    req: HttpRequest,
    config: web::Data<Config>,
    graph: web::Data<GraphClient>,
    payload: web::Json<SaveDonationRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let token = match resolve_token(&req, &config, &graph, &payload).await {
        Ok(token) => token,
        Err(response) => return response,
    };

    let site = match resolve_site(&config, &graph, &token, &payload).await {
        Ok(site) => site,
        Err(response) => return response,
    };

    let item = match resolve_item(&config, &graph, &token, &site, &payload).await {
        Ok(item) => item,
        Err(response) => return response,
    };

    let table = match resolve_table(&config, &payload) {
        Ok(table) => table,
        Err(response) => return response,
    };

    info!("Calling Graph API to add row to table '{}'...", table);
    let values = vec![payload.record.row_values()];

    match graph.add_table_row(&token, &site, &item, &table, &values).await {
        Ok(result) => HttpResponse::Ok().json(json!({ "success": true, "result": result })),
        Err(GraphError::Upstream { status, body, .. }) => {
            error!("Graph API call failed: {} {}", status, body);

            if status == 404 {
                // Best-effort diagnostic: tell the caller which tables exist.
                info!("Attempting to list available tables...");
                match graph.list_tables(&token, &site, &item).await {
                    Ok(names) => {
                        let available = if names.is_empty() {
                            "None found".to_string()
                        } else {
                            names.join(", ")
                        };
                        return HttpResponse::NotFound().json(json!({
                            "error": format!("Table '{}' not found in workbook.", table),
                            "availableTables": available,
                            "details": body,
                        }));
                    }
                    Err(e) => error!("Failed to list tables: {}", e),
                }
            }

            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status)
                .json(json!({ "error": "Graph API call failed", "details": body }))
        }
        Err(e) => server_error(e),
    }
}

/// Walks the credential precedence chain. The client-credentials exchange is
/// only attempted once every cheaper source has come up empty.
async fn resolve_token(
    req: &HttpRequest,
    config: &Config,
    graph: &GraphClient,
    payload: &SaveDonationRequest,
) -> Result<String, HttpResponse> {
    let header_token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .map(str::to_string);

    let mut token = header_token
        .or_else(|| payload.token.clone().filter(|t| !t.is_empty()))
        .or_else(|| config.static_token.clone());

    if token.is_none() {
        token = graph
            .get_access_token(config)
            .await
            .map_err(server_error)?;
    }

    token.ok_or_else(|| {
        error!("Missing authorization token");
        HttpResponse::Unauthorized().json(json!({
            "error": "Missing authorization token. Configure SHAREPOINT_TOKEN or Azure App Credentials.",
        }))
    })
}

async fn resolve_site(
    config: &Config,
    graph: &GraphClient,
    token: &str,
    payload: &SaveDonationRequest,
) -> Result<String, HttpResponse> {
    let mut site = payload
        .site_id
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| config.site_id.clone());

    if site.is_none() {
        if let Some(site_url) = &config.site_url {
            info!("Resolving Site ID from URL: {}", site_url);
            let resolved = graph.get_site_id(token, site_url).await.map_err(|e| {
                HttpResponse::BadRequest().json(json!({ "error": e.to_string() }))
            })?;
            site = Some(resolved);
        }
    }

    site.ok_or_else(|| {
        error!("Could not resolve SharePoint Site ID");
        HttpResponse::BadRequest().json(json!({
            "error": "Could not resolve SharePoint Site ID. Check SHAREPOINT_SITE_ID or SHAREPOINT_SITE_URL.",
        }))
    })
}

async fn resolve_item(
    config: &Config,
    graph: &GraphClient,
    token: &str,
    site: &str,
    payload: &SaveDonationRequest,
) -> Result<String, HttpResponse> {
    let mut item = payload
        .item_id
        .clone()
        .filter(|i| !i.is_empty())
        .or_else(|| config.item_id.clone());

    if item.is_none() {
        if let Some(file_path) = &config.excel_file_path {
            info!("Resolving Item ID from path: {}", file_path);
            let resolved = graph.get_item_id(token, site, file_path).await.map_err(|e| {
                HttpResponse::BadRequest().json(json!({ "error": e.to_string() }))
            })?;
            item = Some(resolved);
        }
    }

    item.ok_or_else(|| {
        error!("Could not resolve Excel File ID");
        HttpResponse::BadRequest().json(json!({
            "error": "Could not resolve Excel File ID. Check SHAREPOINT_ITEM_ID or SHAREPOINT_EXCEL_FILE_PATH.",
        }))
    })
}

fn resolve_table(config: &Config, payload: &SaveDonationRequest) -> Result<String, HttpResponse> {
    payload
        .table_name
        .clone()
        .filter(|t| !t.is_empty())
        .or_else(|| config.table_name.clone())
        .or_else(|| config.worksheet_name.clone())
        .ok_or_else(|| {
            error!("Missing SharePoint Table Name");
            HttpResponse::BadRequest().json(json!({
                "error": "Missing SharePoint Table Name. Check SHAREPOINT_TABLE_NAME or SHAREPOINT_WORKSHEET_NAME.",
            }))
        })
}

fn server_error(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(json!({ "error": "Server error", "details": e.to_string() }))
}
