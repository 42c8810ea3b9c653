//! Static attribute registries for every searchable entity.
//!
//! Each submodule declares the attributes of one entity as constants, an
//! `ATTRIBUTES` slice in canonical order and an `entity_spec()` that feeds
//! [`crate::search_filter_config::SearchFilterConfig::build`].

use serde::{Serialize, Serializer};

pub mod conditions;

pub mod cluster;
pub mod deployment;
pub mod image;
pub mod image_component;
pub mod image_cve;
pub mod namespace;
pub mod node;
pub mod node_cve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Widget used to collect the value of an attribute. Serializes as its
/// widget name; select options travel next to it on the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Autocomplete,
    Select { options: &'static [SelectOption] },
    DropdownSlider,
    DatePicker,
    ConditionNumber,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Autocomplete => "autocomplete",
            Self::Select { .. } => "select",
            Self::DropdownSlider => "dropdown-slider",
            Self::DatePicker => "date-picker",
            Self::ConditionNumber => "condition-number",
        }
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            Self::Select { options } => options,
            _ => &[],
        }
    }

    /// Values typed into these widgets are matched as regular expressions by the backend.
    pub fn is_free_text(&self) -> bool {
        matches!(self, Self::Text | Self::Autocomplete)
    }
}

impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "SerializedAttribute")]
pub struct AttributeDescriptor {
    pub display_name: &'static str,
    pub filter_chip_label: &'static str,
    pub search_term: &'static str,
    pub input_type: InputType,
    /// Every flag listed here must be enabled for the attribute to be offered.
    pub feature_flag_dependency: &'static [&'static str],
}

impl AttributeDescriptor {
    pub const fn new(
        display_name: &'static str,
        filter_chip_label: &'static str,
        search_term: &'static str,
        input_type: InputType,
    ) -> Self {
        Self {
            display_name,
            filter_chip_label,
            search_term,
            input_type,
            feature_flag_dependency: &[],
        }
    }

    pub const fn with_feature_flags(self, flags: &'static [&'static str]) -> Self {
        Self { feature_flag_dependency: flags, ..self }
    }

    pub fn is_enabled_by(&self, is_enabled: impl Fn(&str) -> bool) -> bool {
        self.feature_flag_dependency.iter().all(|flag| is_enabled(*flag))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SerializedAttribute {
    display_name: &'static str,
    filter_chip_label: &'static str,
    search_term: &'static str,
    input_type: InputType,
    #[serde(skip_serializing_if = "has_no_options")]
    options: &'static [SelectOption],
    feature_flag_dependency: &'static [&'static str],
}

fn has_no_options(options: &&'static [SelectOption]) -> bool {
    options.is_empty()
}

impl From<AttributeDescriptor> for SerializedAttribute {
    fn from(attribute: AttributeDescriptor) -> Self {
        Self {
            display_name: attribute.display_name,
            filter_chip_label: attribute.filter_chip_label,
            search_term: attribute.search_term,
            input_type: attribute.input_type,
            options: attribute.input_type.options(),
            feature_flag_dependency: attribute.feature_flag_dependency,
        }
    }
}

/// Severity options shared by the image and node CVE registries.
pub(crate) const SEVERITY_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Critical", value: "CRITICAL_VULNERABILITY_SEVERITY" },
    SelectOption { label: "Important", value: "IMPORTANT_VULNERABILITY_SEVERITY" },
    SelectOption { label: "Moderate", value: "MODERATE_VULNERABILITY_SEVERITY" },
    SelectOption { label: "Low", value: "LOW_VULNERABILITY_SEVERITY" },
    SelectOption { label: "Unknown", value: "UNKNOWN_VULNERABILITY_SEVERITY" },
];

pub(crate) const FIXABLE_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Fixable", value: "true" },
    SelectOption { label: "Not fixable", value: "false" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_flags_use_and_semantics() {
        let attribute = AttributeDescriptor::new("EPSS", "EPSS", "EPSS Probability", InputType::ConditionNumber)
            .with_feature_flags(&["ROX_A", "ROX_B"]);
        assert!(attribute.is_enabled_by(|_| true));
        assert!(!attribute.is_enabled_by(|flag| flag == "ROX_A"));
        assert!(!attribute.is_enabled_by(|_| false));
    }

    #[test]
    fn attribute_without_dependency_is_always_enabled() {
        assert!(image::NAME.is_enabled_by(|_| false));
    }

    #[test]
    fn input_type_serializes_as_its_widget_name() {
        assert_eq!(serde_json::to_value(InputType::Select { options: FIXABLE_OPTIONS }).unwrap(), serde_json::json!("select"));
        assert_eq!(serde_json::to_value(InputType::DropdownSlider).unwrap(), serde_json::json!("dropdown-slider"));
        assert_eq!(serde_json::to_value(InputType::Text).unwrap(), serde_json::json!("text"));
    }

    #[test]
    fn select_options_sit_next_to_the_input_type() {
        let fixable = AttributeDescriptor::new("Fixable", "CVE fixable", "Fixable", InputType::Select { options: FIXABLE_OPTIONS });
        assert_eq!(
            serde_json::to_value(fixable).unwrap(),
            serde_json::json!({
                "displayName": "Fixable",
                "filterChipLabel": "CVE fixable",
                "searchTerm": "Fixable",
                "inputType": "select",
                "options": [
                    { "label": "Fixable", "value": "true" },
                    { "label": "Not fixable", "value": "false" },
                ],
                "featureFlagDependency": [],
            }),
        );

        let name = serde_json::to_value(image::NAME).unwrap();
        assert_eq!(name["inputType"], "autocomplete");
        assert!(name.get("options").is_none());
    }

    #[test]
    fn input_type_names_match_widget_names() {
        assert_eq!(InputType::DropdownSlider.as_str(), "dropdown-slider");
        assert_eq!(InputType::Select { options: FIXABLE_OPTIONS }.as_str(), "select");
        assert!(InputType::Autocomplete.is_free_text());
        assert!(!InputType::DatePicker.is_free_text());
    }

    #[test]
    fn attribute_keys_are_unique_in_every_registry() {
        let registries = [
            image::ATTRIBUTES,
            image_cve::ATTRIBUTES,
            image_component::ATTRIBUTES,
            deployment::ATTRIBUTES,
            namespace::ATTRIBUTES,
            cluster::ATTRIBUTES,
            node::ATTRIBUTES,
            node_cve::ATTRIBUTES,
        ];
        for attributes in registries {
            let mut names = attributes.iter().map(|a| a.display_name).collect::<Vec<_>>();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), attributes.len());
        }
    }
}
