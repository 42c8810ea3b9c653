//! Form for downloading the Central diagnostic bundle.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;

use common::url_query::DiagnosticBundleRequest;

use crate::app::DIAGNOSTIC_BUNDLE_DOWNLOAD_ROUTE;

/// Splits a comma separated list of cluster names, dropping blanks.
pub fn parse_cluster_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// `None` for a blank input, otherwise the trimmed timestamp.
pub fn parse_starting_time(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn DiagnosticBundlePage() -> Element {
    let mut request = use_signal(DiagnosticBundleRequest::default);
    let mut cluster_input = use_signal(String::new);
    let mut starting_time_input = use_signal(String::new);
    let download_href = use_memo(move || format!("{}{}", DIAGNOSTIC_BUNDLE_DOWNLOAD_ROUTE, request.read().query_string()));

    rsx! {
        Title { "Diagnostic bundle" }
        div {
            id: "x-diagnostic-bundle-page",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                max-width: 640px;
                padding: 24px 32px;
                box-sizing: border-box;
            ",
            h1 { style: "font-size: 28px; font-weight: 500; margin: 0;", "Diagnostic bundle" }

            label {
                class: "x-form-field",
                span { "Clusters (comma separated, empty for all)" }
                input {
                    class: "x-text-input",
                    r#type: "text",
                    value: "{cluster_input}",
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        request.write().selected_cluster_names = parse_cluster_names(&value);
                        cluster_input.set(value);
                    },
                }
            }

            label {
                class: "x-form-field",
                span { "Starting time (ISO 8601, empty for everything retained)" }
                input {
                    class: "x-text-input",
                    r#type: "text",
                    placeholder: "2020-10-20T20:21:22.000Z",
                    value: "{starting_time_input}",
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        request.write().starting_time_iso = parse_starting_time(&value);
                        starting_time_input.set(value);
                    },
                }
            }

            label {
                style: "display:flex; align-items:center; gap: 6px;",
                input {
                    r#type: "checkbox",
                    checked: request.read().is_database_diagnostics_only,
                    onchange: move |_| {
                        let current = request.peek().is_database_diagnostics_only;
                        request.write().is_database_diagnostics_only = !current;
                    },
                }
                "Database diagnostics only"
            }

            label {
                style: "display:flex; align-items:center; gap: 6px;",
                input {
                    r#type: "checkbox",
                    checked: request.read().include_compliance_operator_resources,
                    onchange: move |_| {
                        let current = request.peek().include_compliance_operator_resources;
                        request.write().include_compliance_operator_resources = !current;
                    },
                }
                "Include compliance operator resources"
            }

            a {
                class: "x-primary-button",
                href: "{download_href}",
                download: "",
                Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
                "Download diagnostic bundle"
            }
            pre { "{download_href}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cluster_names_are_trimmed_and_blanks_dropped() {
        assert_eq!(parse_cluster_names(" prod , ,staging,"), vec!["prod".to_string(), "staging".to_string()]);
        assert!(parse_cluster_names("").is_empty());
    }

    #[test]
    fn starting_time_is_optional() {
        assert_eq!(parse_starting_time("  "), None);
        assert_eq!(parse_starting_time(" 2020-10-20T20:21:22.000Z "), Some("2020-10-20T20:21:22.000Z".to_string()));
    }

    #[test]
    fn form_state_builds_the_download_query() {
        let request = DiagnosticBundleRequest {
            selected_cluster_names: parse_cluster_names("test-cluster"),
            starting_time_iso: parse_starting_time("2020-10-20T20:21:22.000Z"),
            is_database_diagnostics_only: true,
            include_compliance_operator_resources: false,
        };
        assert_eq!(
            format!("{}{}", DIAGNOSTIC_BUNDLE_DOWNLOAD_ROUTE, request.query_string()),
            "/_download_diagnostic_bundle?database-only=true&since=2020-10-20T20%3A21%3A22.000Z&cluster=test-cluster",
        );
    }
}
