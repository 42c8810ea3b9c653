//! Image component attributes.

use super::{AttributeDescriptor, InputType, SelectOption};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

const SOURCE_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "OS", value: "OS" },
    SelectOption { label: "Python", value: "PYTHON" },
    SelectOption { label: "Java", value: "JAVA" },
    SelectOption { label: "Ruby", value: "RUBY" },
    SelectOption { label: "Node js", value: "NODEJS" },
    SelectOption { label: "Go", value: "GO" },
    SelectOption { label: "Dotnet Core Runtime", value: "DOTNETCORERUNTIME" },
    SelectOption { label: "Infrastructure", value: "INFRASTRUCTURE" },
];

pub const NAME: AttributeDescriptor =
    AttributeDescriptor::new("Name", "Image component name", "Component", InputType::Autocomplete);
pub const SOURCE: AttributeDescriptor =
    AttributeDescriptor::new("Source", "Image component source", "Component Source", InputType::Select { options: SOURCE_OPTIONS });
pub const VERSION: AttributeDescriptor =
    AttributeDescriptor::new("Version", "Image component version", "Component Version", InputType::Text);

pub const ATTRIBUTES: &[AttributeDescriptor] = &[NAME, SOURCE, VERSION];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Image component", SearchCategory::ImageComponents, ATTRIBUTES)
}
