//! # Receipt Service Module
//!
//! Renders the printable one-page donation receipt. Receipt generation is
//! completely independent of persistence: it never talks to the Graph API
//! and works even when no SharePoint target is configured.

mod pdf;

use actix_web::web::{post, resource};
use actix_web::Resource;

/// Configures and returns the receipt resource, mounted under the shared
/// `/api` scope by `services::configure_routes`.
///
/// # Registered Routes:
///
/// *   **`POST /api/receipts`**:
///     - **Handler**: `pdf::process`
///     - **Description**: Takes the donation fields as JSON and returns the
///       rendered PDF as an `application/pdf` attachment.
pub fn configure_routes() -> Resource {
    resource("/receipts").route(post().to(pdf::process))
}
