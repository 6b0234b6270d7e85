//! Root handler

use axum::Json;
use roster_service::MessageResponse;

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::welcome())
}
