use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::model::{GenerateBody, GenerationRequest, SeriesBible};
use crate::server::error::ApiError;
use crate::server::state::SharedState;

/// POST /api/generate. The body is decoded from raw bytes so the content
/// type header plays no part; a malformed body is not rejected up front but
/// surfaces as the generic 500 error payload like any other failure on this
/// path.
pub async fn generate(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<SeriesBible>, ApiError> {
    let body: GenerateBody =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let request = GenerationRequest::from(body);
    let bible = state.producer.generate(&request).await?;
    Ok(Json(bible))
}

#[derive(Debug, Deserialize)]
pub struct LeadBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub game: String,
}

#[derive(Debug, Serialize)]
pub struct LeadAck {
    pub success: bool,
}

/// POST /api/record-email. Acknowledges success no matter what happened to
/// the log write; the only failure acknowledgment is an unparseable body.
pub async fn record_email(body: Bytes) -> (StatusCode, Json<LeadAck>) {
    match serde_json::from_slice::<LeadBody>(&body) {
        Ok(body) => {
            crate::leads::record_lead(&body.email, &body.game);
            (StatusCode::OK, Json(LeadAck { success: true }))
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(LeadAck { success: false }),
        ),
    }
}
