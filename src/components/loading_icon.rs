use dioxus::prelude::*;

#[component]
pub fn LoadingIcon() -> Element {
    rsx! {
        div { class: "spinner", role: "status", aria_label: "Loading" }
    }
}
