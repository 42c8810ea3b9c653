pub mod home_page;
pub mod workload_cves_page;
pub mod diagnostic_bundle_page;
