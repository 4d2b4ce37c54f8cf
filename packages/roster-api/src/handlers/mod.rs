//! HTTP endpoint implementations for entity CRUD.

pub mod entity_handlers;
pub mod request_utils;
pub mod response;

pub use entity_handlers::{
    create_entity, delete_entity, list_entities, read_entity, update_entity,
};
pub use request_utils::{
    build_response, map_store_error_to_router_error, parse_id_param,
    read_request_body_with_timeout, MatchitParams,
};
pub use response::{error_response, ApiError, ErrorResponse};
