//! Route configuration.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::commands::{self, ai, contact, images, tools};
use crate::core::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let tool_routes = Router::new()
        .route("/base64/encode", post(tools::base64_encode))
        .route("/base64/decode", post(tools::base64_decode))
        .route("/base64/file/encode", post(tools::base64_file_encode))
        .route("/base64/file/decode", post(tools::base64_file_decode))
        .route("/palette", post(tools::palette))
        .route("/password", post(tools::password))
        .route("/json/format", post(tools::json_format))
        .route("/json/minify", post(tools::json_minify))
        .route("/qr", post(tools::qr_code))
        .route("/images/compress", post(images::compress_images));

    let api_routes = Router::new()
        .route("/health", get(commands::health_check))
        // Upstream proxies
        .route("/ai/chat", post(ai::chat))
        .route("/ai/image", post(ai::generate_image))
        .route("/ai-suggest", post(ai::suggest))
        .route("/contact", post(contact::send_contact))
        .nest("/tools", tool_routes);

    let body_limit = state.config().server.max_body_bytes;

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
