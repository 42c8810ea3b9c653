//! Image CVE attributes.

use super::{AttributeDescriptor, FIXABLE_OPTIONS, InputType, SEVERITY_OPTIONS};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

pub const NAME: AttributeDescriptor = AttributeDescriptor::new("Name", "CVE", "CVE", InputType::Autocomplete);
pub const DISCOVERED_TIME: AttributeDescriptor =
    AttributeDescriptor::new("Discovered time", "CVE discovered time", "CVE Created Time", InputType::DatePicker);
pub const CVSS: AttributeDescriptor = AttributeDescriptor::new("CVSS", "CVSS", "CVSS", InputType::DropdownSlider);
pub const SEVERITY: AttributeDescriptor =
    AttributeDescriptor::new("Severity", "CVE severity", "Severity", InputType::Select { options: SEVERITY_OPTIONS });
pub const FIXABLE: AttributeDescriptor =
    AttributeDescriptor::new("Fixable", "CVE fixable", "Fixable", InputType::Select { options: FIXABLE_OPTIONS });
pub const EPSS_PROBABILITY: AttributeDescriptor =
    AttributeDescriptor::new("EPSS probability", "CVE EPSS probability", "EPSS Probability", InputType::ConditionNumber)
        .with_feature_flags(&["ROX_SCANNER_V4"]);
pub const ADVISORY_NAME: AttributeDescriptor =
    AttributeDescriptor::new("Advisory name", "Advisory name", "Advisory Name", InputType::Text)
        .with_feature_flags(&["ROX_SCANNER_V4", "ROX_CVE_ADVISORY_SEPARATION"]);

pub const ATTRIBUTES: &[AttributeDescriptor] =
    &[NAME, DISCOVERED_TIME, CVSS, SEVERITY, FIXABLE, EPSS_PROBABILITY, ADVISORY_NAME];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Image CVE", SearchCategory::ImageVulnerabilities, ATTRIBUTES)
}
