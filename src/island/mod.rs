pub mod client;
pub mod config;
pub mod dialog;
pub mod types;

pub use client::{IslandClient, SharedIslandApi, configure_page_url};
pub use config::{AppConfig, load_or_init_config};
pub use dialog::{DialogView, ResetDialogState, perform_action};
pub use types::{ActionStatus, Agent, ResetAction, all_agents_dead};
