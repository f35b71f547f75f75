//! Router assembly: pet CRUD, common routes, OpenAPI document, JSON 404/405/500 fallbacks.

mod common;
mod openapi;
mod pet;

pub use common::common_routes;
pub use openapi::{openapi_routes, ApiDoc, OPENAPI_PATH};
pub use pet::pet_routes;

use crate::error::{ErrorBody, INTERNAL_SERVER_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND};
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router. Unmatched routes answer 404 `{"error":"Not found"}`, unsupported methods
/// on known paths answer 405 with the same error shape, handler panics answer 500.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(pet_routes(state))
        .merge(openapi_routes())
        .fallback(not_found)
        .layer(map_response(json_method_not_allowed))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    ErrorBody::response(StatusCode::NOT_FOUND, NOT_FOUND)
}

/// Routing answers 405 with an empty body; no handler returns 405 itself, so every one is rewritten.
async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let mut json = ErrorBody::response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED);
    if let Some(allow) = response.headers().get(header::ALLOW) {
        json.headers_mut().insert(header::ALLOW, allow.clone());
    }
    json
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "handler panicked");
    ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}
