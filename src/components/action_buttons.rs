use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ActionButtons(
    state: Signal<AppState>,
    on_refresh: EventHandler<()>,
    on_open_reset: EventHandler<()>,
) -> Element {
    let is_loading = state.read().is_loading;

    rsx! {
        div { class: "button-group",
            button {
                class: "secondary",
                disabled: is_loading,
                onclick: move |_| on_refresh.call(()),
                if is_loading { "Refreshing..." } else { "Refresh" }
            }
            button {
                class: "primary danger",
                onclick: move |_| on_open_reset.call(()),
                "Reset the Island..."
            }
        }
    }
}
