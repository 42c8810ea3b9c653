//! Image attributes.

use super::{AttributeDescriptor, InputType};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

pub const NAME: AttributeDescriptor = AttributeDescriptor::new("Name", "Image name", "Image", InputType::Autocomplete);
pub const OPERATING_SYSTEM: AttributeDescriptor =
    AttributeDescriptor::new("Operating system", "Image operating system", "Image OS", InputType::Text);
pub const TAG: AttributeDescriptor = AttributeDescriptor::new("Tag", "Image tag", "Image Tag", InputType::Text);
pub const LABEL: AttributeDescriptor = AttributeDescriptor::new("Label", "Image label", "Image Label", InputType::Autocomplete);
pub const REGISTRY: AttributeDescriptor =
    AttributeDescriptor::new("Registry", "Image registry", "Image Registry", InputType::Text);
pub const CREATED_TIME: AttributeDescriptor =
    AttributeDescriptor::new("Created time", "Image created time", "Image Created Time", InputType::DatePicker);
pub const SCAN_TIME: AttributeDescriptor =
    AttributeDescriptor::new("Scan time", "Image scan time", "Image Scan Time", InputType::DatePicker);

pub const ATTRIBUTES: &[AttributeDescriptor] = &[NAME, OPERATING_SYSTEM, TAG, LABEL, REGISTRY, CREATED_TIME, SCAN_TIME];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Image", SearchCategory::Images, ATTRIBUTES)
}
