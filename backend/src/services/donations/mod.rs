//! # Donation Service Module
//!
//! Exposes the single persistence endpoint of the application: appending a
//! donation as a row to the SharePoint-hosted Excel table through the
//! Microsoft Graph API.
//!
//! ## Sub-modules:
//! - `save`: Handles credential and target resolution plus the row append.

mod save;

use actix_web::web::{post, resource};
use actix_web::Resource;

/// Configures and returns the donation resource, mounted under the shared
/// `/api` scope by `services::configure_routes`.
///
/// # Registered Routes:
///
/// *   **`POST /api/save-donation`**:
///     - **Handler**: `save::process`
///     - **Description**: Accepts the donation fields plus optional SharePoint
///       target overrides and an optional inline token, resolves credentials
///       and the destination table, and appends one row to the workbook.
pub fn configure_routes() -> Resource {
    resource("/save-donation").route(post().to(save::process))
}
