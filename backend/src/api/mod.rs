//! Central API calls used by the search pages.

mod entity_counts;
pub use entity_counts::{ENTITY_TYPE_COUNTS_QUERY, fetch_entity_type_counts};

mod feature_flags;
pub use feature_flags::list_feature_flags;
