//! Central connection settings and HTTP helpers.

pub mod central_client;
