//! Cluster attributes.

use super::{AttributeDescriptor, InputType, SelectOption};
use crate::{search_category::SearchCategory, search_filter_config::EntitySpec};

const TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Generic", value: "GENERIC_CLUSTER" },
    SelectOption { label: "Kubernetes", value: "KUBERNETES_CLUSTER" },
    SelectOption { label: "OpenShift 3", value: "OPENSHIFT_CLUSTER" },
    SelectOption { label: "OpenShift 4", value: "OPENSHIFT4_CLUSTER" },
];

const PLATFORM_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "AKS", value: "AKS" },
    SelectOption { label: "ARO", value: "ARO" },
    SelectOption { label: "EKS", value: "EKS" },
    SelectOption { label: "GKE", value: "GKE" },
    SelectOption { label: "OCP", value: "OCP" },
    SelectOption { label: "OSD", value: "OSD" },
    SelectOption { label: "ROSA", value: "ROSA" },
];

pub const ID: AttributeDescriptor = AttributeDescriptor::new("ID", "Cluster ID", "Cluster ID", InputType::Autocomplete);
pub const NAME: AttributeDescriptor = AttributeDescriptor::new("Name", "Cluster", "Cluster", InputType::Autocomplete);
pub const LABEL: AttributeDescriptor =
    AttributeDescriptor::new("Label", "Cluster label", "Cluster Label", InputType::Autocomplete);
pub const TYPE: AttributeDescriptor =
    AttributeDescriptor::new("Type", "Cluster type", "Cluster Type", InputType::Select { options: TYPE_OPTIONS });
pub const PLATFORM_TYPE: AttributeDescriptor = AttributeDescriptor::new(
    "Platform type",
    "Cluster platform type",
    "Cluster Platform Type",
    InputType::Select { options: PLATFORM_TYPE_OPTIONS },
);
pub const KUBERNETES_VERSION: AttributeDescriptor = AttributeDescriptor::new(
    "Kubernetes version",
    "Cluster Kubernetes version",
    "Cluster Kubernetes Version",
    InputType::Text,
);

pub const ATTRIBUTES: &[AttributeDescriptor] = &[ID, NAME, LABEL, TYPE, PLATFORM_TYPE, KUBERNETES_VERSION];

pub fn entity_spec() -> EntitySpec {
    EntitySpec::new("Cluster", SearchCategory::Clusters, ATTRIBUTES)
}
