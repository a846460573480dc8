use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
};
use hello_addon_core::AddonResponse;

use crate::{
    errors::{AppError, AppResult},
    infra::app_state::AppState,
};

/// Single entry point for every path and method.
pub async fn addon_handler(State(state): State<AppState>, uri: Uri) -> AppResult<Response> {
    let response = state.dispatcher.dispatch(uri.path());
    into_http_response(&response)
}

pub fn into_http_response(response: &AddonResponse) -> AppResult<Response> {
    let body = response.to_bytes()?;
    let status = StatusCode::from_u16(response.status())
        .map_err(|_| AppError::internal("Invalid response status"))?;

    let mut builder = Response::builder().status(status);
    for (name, value) in response.headers() {
        builder = builder.header(*name, *value);
    }

    Ok(builder.body(Body::from(body))?)
}
