mod verify;

use actix_web::web::{post, resource};
use actix_web::Resource;

/// Configures and returns the staff-verification resource, mounted under the
/// shared `/api` scope by `services::configure_routes`.
pub fn configure_routes() -> Resource {
    resource("/verify-staff").route(post().to(verify::process))
}
