pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod compound_search_filter;
pub mod search_filter_chips;
