//! Routes served next to the dioxus server functions.

pub mod download_diagnostic_bundle;
