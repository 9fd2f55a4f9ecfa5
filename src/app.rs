use crate::components::*;
use crate::island::{AppConfig, SharedIslandApi};
use crate::state::{AppState, Message};
use dioxus::prelude::*;
use tracing::{info, warn};

#[allow(non_snake_case)]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let api = use_context::<SharedIslandApi>();
    let mut state = use_signal(move || AppState::new(config));

    use_effect({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                refresh_agents(state, api, false).await;
            });
        }
    });

    let on_refresh = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                refresh_agents(state, api, true).await;
            });
        }
    };

    let on_open_reset = move |_| {
        state.write().clear_message();
        state.write().open_reset_modal();
    };

    let on_close_reset = move |_| {
        state.write().close_reset_modal();
        let api = api.clone();
        spawn(async move {
            refresh_agents(state, api, false).await;
        });
    };

    let (show, all_monkeys_are_dead, configure_url, server_url, agent_summary) = {
        let read_state = state.read();
        (
            read_state.show_reset_modal,
            read_state.all_monkeys_are_dead(),
            read_state.configure_page_link(),
            read_state.config.server_url.clone(),
            read_state.agent_summary(),
        )
    };

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header {
                server_url: server_url,
                agent_summary: agent_summary,
                all_monkeys_are_dead: all_monkeys_are_dead
            }
            div { class: "content",
                div { class: "section",
                    div { class: "section-title", "Island maintenance" }
                    p {
                        "Delete the data gathered by agents or reset the Island to its initial state. "
                        "Both actions require every agent to be stopped."
                    }
                    ActionButtons {
                        state: state,
                        on_refresh: on_refresh,
                        on_open_reset: on_open_reset
                    }
                }
            }
            StatusBar { state: state }
            IslandResetModal {
                show: show,
                all_monkeys_are_dead: all_monkeys_are_dead,
                configure_url: configure_url,
                on_close: on_close_reset
            }
        }
    }
}

async fn refresh_agents(mut state: Signal<AppState>, api: SharedIslandApi, announce: bool) {
    state.write().set_loading(true);

    let result = api.agents().await;

    state.write().set_loading(false);

    match result {
        Ok(agents) => {
            info!(count = agents.len(), "agent status refreshed");
            let mut write_state = state.write();
            write_state.set_agents(agents);
            if announce {
                write_state.set_message(Message::success("Agent status updated"));
            }
        }
        Err(e) => {
            warn!(error = %e, "failed to query agents");
            let mut write_state = state.write();
            write_state.agents = None;
            write_state.set_message(Message::error(format!(
                "Failed to get agent status: {}",
                e
            )));
        }
    }
}
