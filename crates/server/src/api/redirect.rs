//! Redirect API handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use reshare_core::{InvocationEvent, InvocationResponse, RedirectResponse};
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /
///
/// Redirect an OpenURL request to the matching ReShare search.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let event = InvocationEvent::with_params(params);

    match state.handler().handle(&event).await {
        Ok(redirect) => redirect_response(redirect),
        Err(e) => {
            error!(error = %e, "Invocation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// POST /invoke
///
/// Run the handler on a raw invocation event and return the response object.
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    Json(event): Json<InvocationEvent>,
) -> Result<Json<InvocationResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.handler().handle(&event).await {
        Ok(redirect) => Ok(Json(InvocationResponse::from(redirect))),
        Err(e) => {
            error!(error = %e, "Invocation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

fn redirect_response(redirect: RedirectResponse) -> Response {
    let status =
        StatusCode::from_u16(redirect.status_code).unwrap_or(StatusCode::TEMPORARY_REDIRECT);
    (status, [(header::LOCATION, redirect.location)]).into_response()
}
