//! Server side wrappers around the Central API.

pub mod api;
pub mod central_utils;
pub mod server_extra;
