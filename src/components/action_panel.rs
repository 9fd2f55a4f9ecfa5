use crate::components::LoadingIcon;
use crate::island::{ActionStatus, ResetAction};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdCheck;

#[component]
pub fn ActionPanel(
    action: ResetAction,
    status: ActionStatus,
    on_start: EventHandler<ResetAction>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "action-panel",
            div { class: "action-description", {children} }
            div { class: "action-control",
                match status {
                    ActionStatus::Idle => rsx! {
                        button {
                            class: "primary danger",
                            onclick: move |_| on_start.call(action),
                            "{action.label()}"
                        }
                    },
                    ActionStatus::Pending => rsx! { LoadingIcon {} },
                    ActionStatus::Succeeded => rsx! {
                        span { class: "status-success", title: "Done",
                            Icon { width: 32, height: 32, icon: MdCheck }
                        }
                    },
                    ActionStatus::Failed(error) => rsx! {
                        div { class: "action-failed",
                            div { class: "message error", "{error}" }
                            button {
                                class: "secondary danger",
                                onclick: move |_| on_start.call(action),
                                "Retry"
                            }
                        }
                    },
                }
            }
        }
    }
}
