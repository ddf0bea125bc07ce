//! Process configuration for the donation service.
//!
//! Every setting comes from the environment and is read exactly once at
//! startup; the resulting `Config` is cloned into the Actix application data
//! so handlers never touch `std::env` themselves. All values are optional:
//! which ones must be present depends on the credential and target precedence
//! chains in the save-donation handler.

use std::env;

/// Environment-derived settings, one field per variable.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `AZURE_TENANT_ID` - tenant for the client-credentials grant.
    pub tenant_id: Option<String>,
    /// `AZURE_CLIENT_ID`
    pub client_id: Option<String>,
    /// `AZURE_CLIENT_SECRET`
    pub client_secret: Option<String>,
    /// `SHAREPOINT_TOKEN` - static bearer token, used before attempting the
    /// client-credentials exchange.
    pub static_token: Option<String>,
    /// `SHAREPOINT_SITE_ID` - pre-resolved Graph site ID.
    pub site_id: Option<String>,
    /// `SHAREPOINT_SITE_URL` - human-readable site URL, resolved per request
    /// when no site ID is available.
    pub site_url: Option<String>,
    /// `SHAREPOINT_ITEM_ID` - pre-resolved Graph drive item ID.
    pub item_id: Option<String>,
    /// `SHAREPOINT_EXCEL_FILE_PATH` - server-relative workbook path, resolved
    /// per request when no item ID is available.
    pub excel_file_path: Option<String>,
    /// `SHAREPOINT_TABLE_NAME`
    pub table_name: Option<String>,
    /// `SHAREPOINT_WORKSHEET_NAME` - fallback for the table name.
    pub worksheet_name: Option<String>,
    /// `STAFF_ACCESS_CODE` - secret unlocking the staff-only UI mode.
    pub staff_access_code: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            tenant_id: env_opt("AZURE_TENANT_ID"),
            client_id: env_opt("AZURE_CLIENT_ID"),
            client_secret: env_opt("AZURE_CLIENT_SECRET"),
            static_token: env_opt("SHAREPOINT_TOKEN"),
            site_id: env_opt("SHAREPOINT_SITE_ID"),
            site_url: env_opt("SHAREPOINT_SITE_URL"),
            item_id: env_opt("SHAREPOINT_ITEM_ID"),
            excel_file_path: env_opt("SHAREPOINT_EXCEL_FILE_PATH"),
            table_name: env_opt("SHAREPOINT_TABLE_NAME"),
            worksheet_name: env_opt("SHAREPOINT_WORKSHEET_NAME"),
            staff_access_code: env_opt("STAFF_ACCESS_CODE"),
        }
    }
}

/// Reads a variable, treating unset and empty the same way.
fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
