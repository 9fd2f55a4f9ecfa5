mod action_buttons;
mod action_panel;
mod header;
mod island_reset_modal;
mod loading_icon;
mod status_bar;

pub use action_buttons::ActionButtons;
pub use action_panel::ActionPanel;
pub use header::Header;
pub use island_reset_modal::IslandResetModal;
pub use loading_icon::LoadingIcon;
pub use status_bar::StatusBar;
