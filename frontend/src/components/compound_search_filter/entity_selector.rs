use dioxus::prelude::*;

#[component]
pub fn EntitySelector(entities: Vec<&'static str>, selected_entity: String, on_select: Callback<String>) -> Element {
    rsx! {
        select {
            class: "x-select",
            aria_label: "compound search filter entity selector toggle",
            onchange: move |e: Event<FormData>| on_select(e.value()),
            for entity in entities {
                option {
                    key: "{entity}",
                    value: entity,
                    selected: entity == selected_entity,
                    "{entity}"
                }
            }
        }
    }
}
