use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDashboard;

/// Title bar naming the connected Island and whether agents block a reset.
#[component]
pub fn Header(server_url: String, agent_summary: String, all_monkeys_are_dead: bool) -> Element {
    let badge_class = if all_monkeys_are_dead {
        "agent-badge idle"
    } else {
        "agent-badge busy"
    };

    rsx! {
        div { class: "header",
            Icon { width: 28, height: 28, icon: MdDashboard }
            div { class: "header-titles",
                h1 { "Island Console" }
                span { class: "header-subtitle", "{server_url}" }
            }
            span { class: badge_class, title: "Agent status", "{agent_summary}" }
        }
    }
}
