//! CRUD (Create, Read, Update, Delete) operation handlers.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use roster_core::entity::{EntityDraft, EntityKind};

use super::request_utils::{
    build_response, map_store_error_to_router_error, parse_id_param,
    read_request_body_with_timeout, MatchitParams,
};

/// Lists all entities of one kind.
///
/// # Endpoint
/// `GET /api/{kind}`
///
/// # Response
/// - **200 OK**: JSON array of entities in insertion order (empty array
///   when the store is empty)
/// ```json
/// [
///   {"id": 1, "name": "Alice", "email": "a@x.com"}
/// ]
/// ```
///
/// # Errors
/// - **500 Internal Server Error**: Store failure
///
/// # Example
/// ```bash
/// curl http://localhost:8080/api/student
/// ```
pub async fn list_entities(
    _req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    kind: EntityKind,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let entities = state
        .roster
        .store(kind)
        .list()
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&entities)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}

/// Reads one entity by id.
///
/// # Endpoint
/// `GET /api/{kind}/{id}`
///
/// # Response
/// - **200 OK**: The entity as JSON
/// ```json
/// {"id": 1, "name": "Alice", "email": "a@x.com"}
/// ```
///
/// # Errors
/// - **400 Bad Request**: Non-numeric id segment
/// - **404 Not Found**: No entity with the given id
/// - **500 Internal Server Error**: Store failure
///
/// # Example
/// ```bash
/// curl http://localhost:8080/api/student/1
/// ```
pub async fn read_entity(
    _req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    kind: EntityKind,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params)?;

    let entity = state
        .roster
        .store(kind)
        .get(id)
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&entity)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}

/// Creates a new entity.
///
/// # Endpoint
/// `POST /api/{kind}`
///
/// # Request Body
/// ```json
/// {"name": "Alice", "email": "a@x.com"}
/// ```
///
/// # Response
/// - **201 Created**: The stored entity with its assigned id
/// ```json
/// {"id": 1, "name": "Alice", "email": "a@x.com"}
/// ```
///
/// # Errors
/// - **400 Bad Request**: Unparsable JSON body
/// - **500 Internal Server Error**: Store failure
///
/// # Notes
/// - Ids are assigned by the store; any client-supplied `id` is ignored
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8080/api/student \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Alice", "email": "a@x.com"}'
/// ```
pub async fn create_entity(
    req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    kind: EntityKind,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    // Read and parse request body
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;

    let draft: EntityDraft = serde_json::from_slice(&body_bytes)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;

    let entity = state
        .roster
        .store(kind)
        .create(draft)
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&entity)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(201, json)
}

/// Fully updates an entity's name and email.
///
/// # Endpoint
/// `PUT /api/{kind}/{id}`
///
/// # Request Body
/// ```json
/// {"name": "Alicia", "email": "alicia@x.com"}
/// ```
///
/// # Response
/// - **200 OK**: The updated entity; the id never changes
///
/// # Errors
/// - **400 Bad Request**: Non-numeric id segment or unparsable JSON body
/// - **404 Not Found**: No entity with the given id
/// - **500 Internal Server Error**: Store failure
///
/// # Example
/// ```bash
/// curl -X PUT http://localhost:8080/api/student/1 \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Alicia", "email": "alicia@x.com"}'
/// ```
pub async fn update_entity(
    req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    kind: EntityKind,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params)?;

    // Read and parse request body
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;

    let draft: EntityDraft = serde_json::from_slice(&body_bytes)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;

    let entity = state
        .roster
        .store(kind)
        .update(id, draft)
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&entity)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}

/// Deletes an entity by id.
///
/// # Endpoint
/// `DELETE /api/{kind}/{id}`
///
/// # Response
/// - **200 OK**: The deleted entity
///
/// # Errors
/// - **400 Bad Request**: Non-numeric id segment
/// - **404 Not Found**: No entity with the given id
/// - **500 Internal Server Error**: Store failure
///
/// # Notes
/// - Deleted ids are never reassigned to later creates
///
/// # Example
/// ```bash
/// curl -X DELETE http://localhost:8080/api/student/1
/// ```
pub async fn delete_entity(
    _req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    kind: EntityKind,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params)?;

    let entity = state
        .roster
        .store(kind)
        .delete(id)
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&entity)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}
