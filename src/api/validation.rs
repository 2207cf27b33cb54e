//! Boundary validation shared by every route.
//!
//! Required query parameters are declared on the handler's typed
//! `web::Query<T>` and rejected here, before the handler runs, so handlers
//! never re-check presence.

use crate::utils::error::error_body;
use actix_web::{error::InternalError, http::StatusCode, web};

/// Query extractor config for a route whose parameters are mandatory.
/// `status` is the code the route has always answered with on a missing or
/// malformed parameter.
pub fn required_query(status: StatusCode) -> web::QueryConfig {
    web::QueryConfig::default().error_handler(move |err, req| {
        log::info!("🚫 {} {} rejected: {}", req.method(), req.path(), err);
        let message = err.to_string();
        InternalError::from_response(err, error_body(status, &message)).into()
    })
}

/// JSON body config: malformed or incomplete payloads are a 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, req| {
            log::info!("🚫 {} {} rejected: {}", req.method(), req.path(), err);
            let message = err.to_string();
            InternalError::from_response(err, error_body(StatusCode::BAD_REQUEST, &message)).into()
        })
}
