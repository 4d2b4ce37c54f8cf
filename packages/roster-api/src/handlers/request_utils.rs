//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::{body::Bytes, Request, Response};
use tokio::time;

use crate::router::RouterError;
use roster_core::error::StoreError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Helper function to read request body with timeout
pub async fn read_request_body_with_timeout(
    req: Request<hyper::body::Incoming>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parse the `{id}` path parameter as an entity id
pub fn parse_id_param(params: &MatchitParams<'_, '_>) -> Result<u64, RouterError> {
    let id_str = params.get("id").unwrap_or("0");
    id_str
        .parse()
        .map_err(|e| RouterError::BadRequest(format!("Invalid entity ID '{}': {}", id_str, e)))
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::NotFound { .. } => RouterError::NotFound(e.to_string()),
        StoreError::LockPoisoned => RouterError::InternalError(format!("Store error: {}", e)),
    }
}

/// Helper to build a JSON response with the given status and body
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::entity::EntityKind;

    #[test]
    fn test_map_not_found_to_router_not_found() {
        let error = StoreError::NotFound {
            kind: EntityKind::Student,
            id: 999,
        };
        match map_store_error_to_router_error(error) {
            RouterError::NotFound(msg) => {
                assert!(msg.contains("student"));
                assert!(msg.contains("999"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_map_lock_poisoned_to_internal_error() {
        match map_store_error_to_router_error(StoreError::LockPoisoned) {
            RouterError::InternalError(msg) => assert!(msg.contains("Store error")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }

    #[test]
    fn test_build_response_sets_json_content_type() {
        let response = build_response(201, b"{}".to_vec()).unwrap();
        assert_eq!(response.status(), 201);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }
}
