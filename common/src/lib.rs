//! Compound search filter configuration and query shaping shared by the frontend and backend.

extern crate serde;


pub mod search_category;
pub mod search_attributes;
pub mod search_filter_config;
pub mod search_filter;
pub mod search_query;
pub mod url_query;
pub mod entity_counts;
pub mod feature_flags;
pub mod workload_cve_view;
