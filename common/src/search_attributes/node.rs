//! Node attributes.

use super::{AttributeDescriptor, InputType};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

pub const NAME: AttributeDescriptor = AttributeDescriptor::new("Name", "Node name", "Node", InputType::Autocomplete);
pub const OPERATING_SYSTEM: AttributeDescriptor =
    AttributeDescriptor::new("Operating system", "Node operating system", "Operating System", InputType::Text);
pub const LABEL: AttributeDescriptor = AttributeDescriptor::new("Label", "Node label", "Node Label", InputType::Autocomplete);
pub const ANNOTATION: AttributeDescriptor =
    AttributeDescriptor::new("Annotation", "Node annotation", "Node Annotation", InputType::Autocomplete);
pub const SCAN_TIME: AttributeDescriptor =
    AttributeDescriptor::new("Scan time", "Node scan time", "Node Scan Time", InputType::DatePicker);

pub const ATTRIBUTES: &[AttributeDescriptor] = &[NAME, OPERATING_SYSTEM, LABEL, ANNOTATION, SCAN_TIME];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Node", SearchCategory::Nodes, ATTRIBUTES)
}
