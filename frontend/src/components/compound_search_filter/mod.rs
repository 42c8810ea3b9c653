//! Entity / attribute / value picker that turns user input into search
//! payload items.

use dioxus::prelude::*;

use common::search_filter::{OnSearchPayloadItem, SearchFilter};
use common::search_filter_config::SearchFilterConfig;

mod entity_selector;
mod attribute_selector;
mod search_value_input;

use attribute_selector::AttributeSelector;
use entity_selector::EntitySelector;
use search_value_input::SearchValueInput;


#[derive(Clone, Copy)]
struct CompoundSearchFilterContext {
    search_filter: ReadSignal<SearchFilter>,
    on_search: Callback<Vec<OnSearchPayloadItem>>,
}

#[component]
pub fn CompoundSearchFilter(
    config: ReadSignal<SearchFilterConfig>,
    search_filter: ReadSignal<SearchFilter>,
    on_search: Callback<Vec<OnSearchPayloadItem>>,
) -> Element {
    let mut selected_entity = use_signal(|| config.peek().default_entity().unwrap_or_default().to_string());
    let mut selected_attribute = use_signal(|| config.peek().default_attribute(&selected_entity.peek()).to_string());
    use_context_provider(|| CompoundSearchFilterContext { search_filter, on_search });

    // the config changes once feature flags arrive; keep the selection valid
    use_effect(move || {
        let config = config.read();
        let entity = selected_entity.peek().clone();
        let attribute = selected_attribute.peek().clone();
        if config.get_entity(&entity).is_none() {
            let entity = config.default_entity().unwrap_or_default();
            selected_entity.set(entity.to_string());
            selected_attribute.set(config.default_attribute(entity).to_string());
        } else if config.get_attribute(&entity, &attribute).is_none() {
            selected_attribute.set(config.default_attribute(&entity).to_string());
        }
    });

    let on_entity_select = move |entity: String| {
        let default_attribute = config.peek().default_attribute(&entity).to_string();
        selected_entity.set(entity);
        selected_attribute.set(default_attribute);
    };
    let on_attribute_select = move |attribute: String| {
        selected_attribute.set(attribute);
    };

    let entities = config.read().entities();
    let attributes = config.read().entity_attributes(&selected_entity.read());
    let attribute = config.read().get_attribute(&selected_entity.read(), &selected_attribute.read()).copied();
    let value_input = match attribute {
        Some(attribute) => rsx! {
            SearchValueInput { key: "{selected_entity}-{attribute.search_term}", attribute }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            id: "x-compound-search-filter",
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                flex-wrap: wrap;
            ",
            if entities.len() > 1 {
                EntitySelector { entities, selected_entity: selected_entity(), on_select: on_entity_select }
            }
            AttributeSelector { attributes, selected_attribute: selected_attribute(), on_select: on_attribute_select }
            {value_input}
        }
    }
}
