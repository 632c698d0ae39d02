//! Standard messages shared by guards and the error responder.

/// Body message for every 500-class failure.
pub const INTERNAL_ERROR: &str = "Internal Server Error";

pub const INVALID_API_KEY: &str = "Access Denied. Invalid or missing API key.";
pub const API_KEY_HINT: &str = "Use the x-api-key header.";

pub const INVALID_JSON: &str = "Invalid JSON format.";
pub const BODY_UNREADABLE: &str = "Request body could not be read.";

/// Message for unmatched routes.
pub fn route_not_found(path: &str) -> String {
    format!("Cannot find {} on this server!", path)
}
