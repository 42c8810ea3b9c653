//! Compound search filter configuration: builder, accessors and adapters.
//!
//! A [`SearchFilterConfig`] is an insertion-ordered map from entity display
//! name to [`EntityDescriptor`]. Ordering is significant everywhere: the
//! first entity and the first attribute of an entity are the defaults the
//! UI selects, and filter chips are listed in the same order.
//!
//! None of these functions fail. Lookups on missing entities or attributes
//! degrade to `None`, an empty collection or an empty string, which the UI
//! renders as an empty state.

use indexmap::IndexMap;
use serde::Serialize;

use crate::search_attributes::{
    AttributeDescriptor, cluster, deployment, image, image_component, image_cve, namespace, node, node_cve,
};
use crate::search_category::SearchCategory;

/// Builder input for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySpec {
    pub display_name: &'static str,
    pub search_category: SearchCategory,
    pub attributes: Vec<AttributeDescriptor>,
}

impl EntitySpec {
    pub fn new(display_name: &'static str, search_category: SearchCategory, attributes: &[AttributeDescriptor]) -> Self {
        Self {
            display_name,
            search_category,
            attributes: attributes.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    pub display_name: &'static str,
    pub search_category: SearchCategory,
    pub attributes: IndexMap<&'static str, AttributeDescriptor>,
}

impl EntityDescriptor {
    /// Keys attributes by display name. A repeated display name keeps the
    /// position of its first occurrence and the value of its last one.
    pub fn from_spec(spec: EntitySpec) -> Self {
        let mut attributes = IndexMap::with_capacity(spec.attributes.len());
        for attribute in spec.attributes {
            attributes.insert(attribute.display_name, attribute);
        }
        Self {
            display_name: spec.display_name,
            search_category: spec.search_category,
            attributes,
        }
    }

    /// Restricts the descriptor to the `selected` attribute names.
    ///
    /// The result keeps registry order, not selection order. Names that are
    /// not in the registry are dropped without complaint.
    pub fn with_attributes(&self, selected: &[&str]) -> Self {
        Self {
            display_name: self.display_name,
            search_category: self.search_category,
            attributes: self
                .attributes
                .iter()
                .filter(|(name, _)| selected.contains(*name))
                .map(|(name, attribute)| (*name, *attribute))
                .collect(),
        }
    }

    pub fn default_attribute(&self) -> Option<&AttributeDescriptor> {
        self.attributes.values().next()
    }
}

/// Chip shown above a table for one searchable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChipDescriptor {
    pub display_name: &'static str,
    pub search_filter_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct SearchFilterConfig(IndexMap<&'static str, EntityDescriptor>);

impl SearchFilterConfig {
    /// Later specs with an already seen display name replace the earlier entity in place.
    pub fn build(specs: impl IntoIterator<Item = EntitySpec>) -> Self {
        let mut entities = IndexMap::new();
        for spec in specs {
            let entity = EntityDescriptor::from_spec(spec);
            entities.insert(entity.display_name, entity);
        }
        Self(entities)
    }

    pub fn from_entity_list(entities: Vec<EntityDescriptor>) -> Self {
        Self(entities.into_iter().map(|entity| (entity.display_name, entity)).collect())
    }

    pub fn to_entity_list(&self) -> Vec<EntityDescriptor> {
        self.0.values().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entities(&self) -> Vec<&'static str> {
        self.0.keys().copied().collect()
    }

    pub fn default_entity(&self) -> Option<&'static str> {
        self.0.keys().next().copied()
    }

    pub fn get_entity(&self, entity: &str) -> Option<&EntityDescriptor> {
        self.0.get(entity)
    }

    pub fn get_attribute(&self, entity: &str, attribute: &str) -> Option<&AttributeDescriptor> {
        self.get_entity(entity)?.attributes.get(attribute)
    }

    pub fn entity_attributes(&self, entity: &str) -> Vec<AttributeDescriptor> {
        self.get_entity(entity)
            .map(|e| e.attributes.values().copied().collect())
            .unwrap_or_default()
    }

    /// First attribute name of `entity`, or `""` when there is none.
    pub fn default_attribute(&self, entity: &str) -> &'static str {
        self.get_entity(entity)
            .and_then(|e| e.attributes.keys().next().copied())
            .unwrap_or("")
    }

    /// Every attribute of every entity, entity order first.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> + '_ {
        self.0.values().flat_map(|entity| entity.attributes.values())
    }

    pub fn make_filter_chip_descriptors(&self) -> Vec<FilterChipDescriptor> {
        self.attributes()
            .map(|attribute| FilterChipDescriptor {
                display_name: attribute.filter_chip_label,
                search_filter_name: attribute.search_term,
            })
            .collect()
    }

    /// Drops every attribute whose feature flag dependencies are not all enabled.
    /// Entities left without attributes stay in the config.
    pub fn with_feature_flags(&self, is_enabled: impl Fn(&str) -> bool) -> Self {
        Self(
            self.0
                .iter()
                .map(|(name, entity)| {
                    let attributes = entity
                        .attributes
                        .iter()
                        .filter(|(_, attribute)| attribute.is_enabled_by(&is_enabled))
                        .map(|(key, attribute)| (*key, *attribute))
                        .collect();
                    (*name, EntityDescriptor { attributes, ..entity.clone() })
                })
                .collect(),
        )
    }
}

/// Lookups over the list-shaped representation of a config.
///
/// A `None` list stands for a config that was never provided and makes every
/// lookup return `None`.
pub mod list {
    use super::EntityDescriptor;
    use crate::search_attributes::AttributeDescriptor;

    pub fn get_entity<'a>(config: Option<&'a [EntityDescriptor]>, entity: &str) -> Option<&'a EntityDescriptor> {
        config?.iter().find(|e| e.display_name == entity)
    }

    pub fn get_attribute<'a>(
        config: Option<&'a [EntityDescriptor]>,
        entity: &str,
        attribute: &str,
    ) -> Option<&'a AttributeDescriptor> {
        get_entity(config, entity)?
            .attributes
            .values()
            .find(|a| a.display_name == attribute)
    }

    pub fn get_default_entity_name(config: Option<&[EntityDescriptor]>) -> Option<&'static str> {
        config?.first().map(|e| e.display_name)
    }

    pub fn get_entity_attributes(config: Option<&[EntityDescriptor]>, entity: &str) -> Option<Vec<AttributeDescriptor>> {
        get_entity(config, entity).map(|e| e.attributes.values().copied().collect())
    }

    pub fn get_default_attribute_name(config: Option<&[EntityDescriptor]>, entity: &str) -> Option<&'static str> {
        get_entity(config, entity)?.attributes.values().next().map(|a| a.display_name)
    }
}

/// Entities offered on the workload CVE pages.
pub fn workload_cve_search_filter_config() -> SearchFilterConfig {
    SearchFilterConfig::build([
        image::entity_spec(),
        image_cve::entity_spec(),
        image_component::entity_spec(),
        deployment::entity_spec(),
        namespace::entity_spec(),
        cluster::entity_spec(),
    ])
}

/// Entities offered on the node CVE pages.
pub fn node_cve_search_filter_config() -> SearchFilterConfig {
    SearchFilterConfig::build([node::entity_spec(), node_cve::entity_spec(), cluster::entity_spec()])
}
