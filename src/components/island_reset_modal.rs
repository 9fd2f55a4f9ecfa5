use crate::components::ActionPanel;
use crate::island::{DialogView, ResetAction, ResetDialogState, SharedIslandApi, perform_action};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_alert_icons::MdWarning;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

/// Confirmation dialog for deleting agent data or resetting the whole Island.
///
/// Panel statuses live as long as the component, so hiding the dialog keeps
/// them. Closing from the header or backdrop clears the delete panel only.
#[component]
pub fn IslandResetModal(
    show: bool,
    all_monkeys_are_dead: bool,
    configure_url: Option<String>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_context::<SharedIslandApi>();
    let mut dialog = use_signal(ResetDialogState::new);

    let start_action = use_callback(move |action: ResetAction| {
        if !dialog.write().start(action) {
            return;
        }

        let api = api.clone();
        spawn(async move {
            let result = perform_action(api.as_ref(), action).await;
            let completion = dialog.write().finish(action, result);
            if completion.close_requested {
                on_close.call(());
            }
        });
    });

    let close = move |_: Event<MouseData>| {
        dialog.write().close();
        on_close.call(());
    };

    let view = DialogView::for_props(show, all_monkeys_are_dead);
    if view == DialogView::Hidden {
        return rsx! {};
    }

    let (delete_status, reset_all_status) = {
        let dialog = dialog.read();
        (
            dialog.status(ResetAction::DeleteAgentData).clone(),
            dialog.status(ResetAction::ResetAll).clone(),
        )
    };

    rsx! {
        div { class: "dialog-overlay", onclick: close,
            div {
                class: "island-reset-modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "Reset the Island" }
                    button { class: "close-button", title: "Close", onclick: close,
                        Icon { width: 18, height: 18, icon: MdClose }
                    }
                }
                div { class: "modal-body",
                    if view == DialogView::Guard {
                        div { class: "alert alert-warning",
                            Icon { width: 18, height: 18, icon: MdWarning }
                            span { "Can't reset the Island while Monkey agents are still running!" }
                        }
                    } else {
                        ActionPanel {
                            action: ResetAction::DeleteAgentData,
                            status: delete_status,
                            on_start: start_action,
                            p { "Delete data gathered by Monkey agents." }
                            p { "This will reset the Map and reports." }
                        }
                        hr {}
                        ActionPanel {
                            action: ResetAction::ResetAll,
                            status: reset_all_status,
                            on_start: start_action,
                            p { "Reset everything." }
                            p {
                                "You might want to "
                                if let Some(url) = configure_url {
                                    a { href: "{url}", "export configuration" }
                                } else {
                                    "export configuration"
                                }
                                " before doing this."
                            }
                        }
                    }
                }
            }
        }
    }
}
