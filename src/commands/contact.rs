//! Contact form endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use tracing::info;

use crate::contact::ContactRequest;
use crate::core::AppState;
use super::{ApiError, ApiResult};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn send_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(req) = payload?;
    let message = req.validate()?;
    let mailer = state.mailer().ok_or_else(ApiError::misconfigured)?;

    mailer
        .send(&message.to_email())
        .await
        .map_err(ApiError::delivery_failed)?;
    info!("Contact request received ({})", message.project_type);
    Ok(Json(ContactResponse {
        success: true,
        message: "Email sent",
    }))
}
