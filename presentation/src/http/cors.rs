//! CORS middleware

use tower_http::cors::{Any, CorsLayer};

/// Allow any origin, method and header
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
