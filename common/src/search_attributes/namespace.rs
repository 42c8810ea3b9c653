//! Namespace attributes.

use super::{AttributeDescriptor, InputType};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

pub const ID: AttributeDescriptor = AttributeDescriptor::new("ID", "Namespace ID", "Namespace ID", InputType::Text);
pub const NAME: AttributeDescriptor =
    AttributeDescriptor::new("Name", "Namespace name", "Namespace", InputType::Autocomplete);
pub const LABEL: AttributeDescriptor =
    AttributeDescriptor::new("Label", "Namespace label", "Namespace Label", InputType::Autocomplete);
pub const ANNOTATION: AttributeDescriptor =
    AttributeDescriptor::new("Annotation", "Namespace annotation", "Namespace Annotation", InputType::Autocomplete);

pub const ATTRIBUTES: &[AttributeDescriptor] = &[ID, NAME, LABEL, ANNOTATION];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Namespace", SearchCategory::Namespaces, ATTRIBUTES)
}
