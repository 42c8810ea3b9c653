//! Value widgets, one per attribute input type.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use common::search_attributes::conditions::{DateCondition, NumericCondition};
use common::search_attributes::{AttributeDescriptor, InputType, SelectOption};
use common::search_filter::OnSearchPayloadItem;

use super::CompoundSearchFilterContext;

#[component]
pub fn SearchValueInput(attribute: AttributeDescriptor) -> Element {
    match attribute.input_type {
        InputType::Text | InputType::Autocomplete => rsx! { TextValueInput { attribute } },
        InputType::Select { options } => rsx! { SelectValueInput { attribute, options: options.to_vec() } },
        InputType::ConditionNumber => rsx! { ConditionNumberInput { attribute, slider: false } },
        InputType::DropdownSlider => rsx! { ConditionNumberInput { attribute, slider: true } },
        InputType::DatePicker => rsx! { DateValueInput { attribute } },
    }
}

#[component]
fn TextValueInput(attribute: AttributeDescriptor) -> Element {
    let on_search = use_context::<CompoundSearchFilterContext>().on_search;
    let mut value = use_signal(String::new);
    let mut submit = move |_: ()| {
        let typed = value.peek().trim().to_string();
        if typed.is_empty() {
            return;
        }
        on_search(vec![OnSearchPayloadItem::append_string(attribute.search_term, typed)]);
        value.set(String::new());
    };
    rsx! {
        input {
            class: "x-text-input",
            r#type: "text",
            aria_label: "compound search filter text input",
            placeholder: "Filter results by {attribute.filter_chip_label}",
            value: "{value}",
            oninput: move |e: Event<FormData>| value.set(e.value()),
            onkeydown: move |e: Event<KeyboardData>| {
                if e.key() == Key::Enter {
                    submit(());
                }
            },
        }
        button {
            class: "x-icon-button",
            aria_label: "Apply text input to search",
            onclick: move |_| submit(()),
            Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
        }
    }
}

#[component]
fn SelectValueInput(attribute: AttributeDescriptor, options: Vec<SelectOption>) -> Element {
    rsx! {
        div {
            class: "x-select-options",
            aria_label: "Filter by {attribute.display_name}",
            for select_option in options {
                SelectOptionCheckbox { key: "{select_option.value}", search_term: attribute.search_term, option: select_option }
            }
        }
    }
}

#[component]
fn SelectOptionCheckbox(search_term: &'static str, option: SelectOption) -> Element {
    let context = use_context::<CompoundSearchFilterContext>();
    let search_filter = context.search_filter;
    let on_search = context.on_search;
    let is_checked = use_memo(move || search_filter.read().values(search_term).iter().any(|v| v == option.value));
    rsx! {
        label {
            style: "display:flex; align-items:center; gap: 4px;",
            input {
                r#type: "checkbox",
                checked: is_checked(),
                onchange: move |_| {
                    let item = if is_checked() {
                        OnSearchPayloadItem::remove(search_term, option.value)
                    } else {
                        OnSearchPayloadItem::append_toggle(search_term, option.value)
                    };
                    on_search(vec![item]);
                },
            }
            "{option.label}"
        }
    }
}

/// Operator plus number. The slider variant is bounded to the CVSS range.
#[component]
fn ConditionNumberInput(attribute: AttributeDescriptor, slider: bool) -> Element {
    let on_search = use_context::<CompoundSearchFilterContext>().on_search;
    let mut condition = use_signal(NumericCondition::default);
    let mut operand = use_signal(|| if slider { "0".to_string() } else { String::new() });
    let submit = move |_: ()| {
        if let Some(value) = condition.peek().search_value(&operand.peek()) {
            on_search(vec![OnSearchPayloadItem::assign_single(attribute.search_term, value)]);
        }
    };
    rsx! {
        select {
            class: "x-select",
            aria_label: "Condition selector",
            onchange: move |e: Event<FormData>| {
                if let Some(selected) = NumericCondition::from_label(&e.value()) {
                    condition.set(selected);
                }
            },
            for c in NumericCondition::ALL {
                option {
                    value: c.label(),
                    selected: c == condition(),
                    "{c.label()}"
                }
            }
        }
        if slider {
            input {
                r#type: "range",
                min: "0",
                max: "10",
                step: "0.1",
                value: "{operand}",
                oninput: move |e: Event<FormData>| operand.set(e.value()),
            }
            span { style: "min-width: 32px;", "{operand}" }
        } else {
            input {
                class: "x-text-input",
                r#type: "number",
                aria_label: "Condition value input",
                value: "{operand}",
                oninput: move |e: Event<FormData>| operand.set(e.value()),
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        submit(());
                    }
                },
            }
        }
        button {
            class: "x-secondary-button",
            aria_label: "Apply condition and number input to search",
            onclick: move |_| submit(()),
            "Apply"
        }
    }
}

#[component]
fn DateValueInput(attribute: AttributeDescriptor) -> Element {
    let on_search = use_context::<CompoundSearchFilterContext>().on_search;
    let mut condition = use_signal(DateCondition::default);
    let mut date = use_signal(String::new);
    let submit = move |_: ()| {
        if let Some(value) = condition.peek().search_value(&date.peek()) {
            on_search(vec![OnSearchPayloadItem::assign_single(attribute.search_term, value)]);
        }
    };
    rsx! {
        select {
            class: "x-select",
            aria_label: "Condition selector",
            onchange: move |e: Event<FormData>| {
                if let Some(selected) = DateCondition::from_label(&e.value()) {
                    condition.set(selected);
                }
            },
            for c in DateCondition::ALL {
                option {
                    value: c.label(),
                    selected: c == condition(),
                    "{c.label()}"
                }
            }
        }
        input {
            class: "x-text-input",
            r#type: "date",
            aria_label: "Filter by date",
            value: "{date}",
            oninput: move |e: Event<FormData>| date.set(e.value()),
        }
        button {
            class: "x-secondary-button",
            aria_label: "Apply date input to search",
            onclick: move |_| submit(()),
            "Apply"
        }
    }
}
