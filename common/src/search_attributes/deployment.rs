//! Deployment attributes.

use super::{AttributeDescriptor, InputType, SelectOption};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Active", value: "false" },
    SelectOption { label: "Inactive", value: "true" },
];

pub const ID: AttributeDescriptor = AttributeDescriptor::new("ID", "Deployment ID", "Deployment ID", InputType::Text);
pub const NAME: AttributeDescriptor =
    AttributeDescriptor::new("Name", "Deployment name", "Deployment", InputType::Autocomplete);
pub const LABEL: AttributeDescriptor =
    AttributeDescriptor::new("Label", "Deployment label", "Deployment Label", InputType::Autocomplete);
pub const ANNOTATION: AttributeDescriptor =
    AttributeDescriptor::new("Annotation", "Deployment annotation", "Deployment Annotation", InputType::Autocomplete);
pub const STATUS: AttributeDescriptor =
    AttributeDescriptor::new("Status", "Deployment status", "Inactive Deployment", InputType::Select { options: STATUS_OPTIONS });

pub const ATTRIBUTES: &[AttributeDescriptor] = &[ID, NAME, LABEL, ANNOTATION, STATUS];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Deployment", SearchCategory::Deployments, ATTRIBUTES)
}
