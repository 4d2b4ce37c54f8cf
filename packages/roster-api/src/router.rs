//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use roster_core::{config::RosterConfig, entity::EntityKind, roster::Roster};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Roster instance holding one store per entity kind
    pub roster: Arc<Roster>,
    /// Service configuration
    pub config: Arc<RosterConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with one collection and one item route per
    /// entity kind.
    pub fn new(roster: Arc<Roster>, config: Arc<RosterConfig>) -> Self {
        let mut router = MatchitRouter::new();

        for kind in EntityKind::all() {
            let collection = format!("/api/{}", kind.as_str());
            let item = format!("/api/{}/{{id}}", kind.as_str());
            router
                .insert(collection, RouteHandler::Entity(kind))
                .expect("Failed to insert collection route");
            router
                .insert(item, RouteHandler::Entity(kind))
                .expect("Failed to insert item route");
        }

        Self {
            inner: router,
            state: AppState { roster, config },
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// # Arguments
    /// * `req` - HTTP request
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route(
        &self,
        req: Request<hyper::body::Incoming>,
    ) -> Result<Response<Bytes>, RouterError> {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => {
                let handler = matched.value;
                handler
                    .handle(req, matched.params, self.state.clone())
                    .await
            }
            Err(_) => {
                // Return 404 for unmatched routes
                let error_response = crate::handlers::error_response(
                    404,
                    "Not Found".to_string(),
                    Some(format!("No route found for {}", path)),
                );
                let body = serde_json::to_vec(&error_response).map_err(|e| {
                    RouterError::InternalError(format!("Failed to serialize error response: {}", e))
                })?;
                Ok(Response::builder()
                    .status(404)
                    .header("Content-Type", "application/json")
                    .body(Bytes::from(body))
                    .map_err(|e| {
                        RouterError::InternalError(format!("Failed to build response: {}", e))
                    })?)
            }
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Entity(EntityKind),
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle(
        &self,
        req: Request<hyper::body::Incoming>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        match self {
            RouteHandler::Entity(kind) => {
                let has_id_param = params.get("id").is_some();
                if req.method() == hyper::Method::GET && !has_id_param {
                    handlers::list_entities(req, params, *kind, state).await
                } else if req.method() == hyper::Method::GET && has_id_param {
                    handlers::read_entity(req, params, *kind, state).await
                } else if req.method() == hyper::Method::POST && !has_id_param {
                    handlers::create_entity(req, params, *kind, state).await
                } else if req.method() == hyper::Method::PUT && has_id_param {
                    handlers::update_entity(req, params, *kind, state).await
                } else if req.method() == hyper::Method::DELETE && has_id_param {
                    handlers::delete_entity(req, params, *kind, state).await
                } else {
                    Err(RouterError::MethodNotAllowed)
                }
            }
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    Timeout,
    BadRequest(String),
    NotFound(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let (status, message) = match &err {
            RouterError::MethodNotAllowed => (405, "Method Not Allowed"),
            RouterError::InternalError(msg) => (500, msg.as_str()),
            RouterError::Timeout => (408, "Request Timeout"),
            RouterError::BadRequest(msg) => (400, msg.as_str()),
            RouterError::NotFound(msg) => (404, msg.as_str()),
        };

        let error_response = crate::handlers::error_response(status, message.to_string(), None);
        let body = serde_json::to_vec(&error_response)
            .unwrap_or_else(|e| format!("{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\",\"details\":null}}}}", e).into_bytes());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(500)
                    .body(Bytes::from("Internal Server Error"))
                    .expect("Failed to build fallback error response")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_router() -> Router {
        Router::new(
            Arc::new(Roster::new()),
            Arc::new(RosterConfig::default()),
        )
    }

    #[test]
    fn test_routes_match_both_kinds() {
        let router = test_router();
        for kind in EntityKind::all() {
            let collection = format!("/api/{}", kind.as_str());
            let matched = router.inner.at(&collection).unwrap();
            assert!(matched.params.get("id").is_none());

            let item = format!("/api/{}/7", kind.as_str());
            let matched = router.inner.at(&item).unwrap();
            assert_eq!(matched.params.get("id"), Some("7"));
        }
    }

    #[test]
    fn test_unknown_paths_do_not_match() {
        let router = test_router();
        assert!(router.inner.at("/api/course").is_err());
        assert!(router.inner.at("/api/student/1/grades").is_err());
        assert!(router.inner.at("/student").is_err());
    }

    #[test]
    fn test_router_error_conversion_statuses() {
        let cases = [
            (RouterError::MethodNotAllowed, 405),
            (RouterError::BadRequest("bad".to_string()), 400),
            (RouterError::NotFound("missing".to_string()), 404),
            (RouterError::Timeout, 408),
            (RouterError::InternalError("boom".to_string()), 500),
        ];
        for (err, status) in cases {
            let response: Response<Bytes> = err.into();
            assert_eq!(response.status(), status);
            let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
            assert_eq!(body["success"], serde_json::json!(false));
            assert_eq!(body["error"]["code"], status.to_string());
        }
    }
}
