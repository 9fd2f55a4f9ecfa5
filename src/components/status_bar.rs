use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatusBar(state: Signal<AppState>) -> Element {
    let (message, running) = {
        let state = state.read();
        (state.message.clone(), state.running_agent_count())
    };
    let reset_hint = match running {
        Some(0) => "Reset available",
        Some(_) => "Stop all agents before resetting",
        None => "Agent status unknown",
    };

    rsx! {
        div { class: "status-bar",
            if let Some(msg) = message {
                div {
                    class: if msg.is_error { "message error" } else { "message success" },
                    "{msg.text}"
                }
            }

            div { class: "status-section",
                div { class: "status-label", "Reset:" }
                div { class: "status-value", "{reset_hint}" }
            }
        }
    }
}
