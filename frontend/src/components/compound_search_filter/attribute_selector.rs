use dioxus::prelude::*;

use common::search_attributes::AttributeDescriptor;

#[component]
pub fn AttributeSelector(attributes: Vec<AttributeDescriptor>, selected_attribute: String, on_select: Callback<String>) -> Element {
    rsx! {
        select {
            class: "x-select",
            aria_label: "compound search filter attribute selector toggle",
            onchange: move |e: Event<FormData>| on_select(e.value()),
            for attribute in attributes {
                option {
                    key: "{attribute.display_name}",
                    value: attribute.display_name,
                    selected: attribute.display_name == selected_attribute,
                    "{attribute.display_name}"
                }
            }
        }
    }
}
