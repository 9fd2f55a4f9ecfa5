use crate::island::{Agent, AppConfig, all_agents_dead, configure_page_url};
use reqwest::Url;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` until the first agent query finishes.
    pub agents: Option<Vec<Agent>>,
    pub show_reset_modal: bool,
    pub message: Option<Message>,
    pub is_loading: bool,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            agents: None,
            show_reset_modal: false,
            message: None,
            is_loading: false,
        }
    }

    /// Unknown agent state counts as "still running".
    pub fn all_monkeys_are_dead(&self) -> bool {
        self.agents.as_deref().is_some_and(all_agents_dead)
    }

    pub fn running_agent_count(&self) -> Option<usize> {
        self.agents
            .as_ref()
            .map(|agents| agents.iter().filter(|a| !a.is_dead()).count())
    }

    pub fn agent_summary(&self) -> String {
        match (&self.agents, self.running_agent_count()) {
            (Some(agents), Some(0)) if agents.is_empty() => "No agents".to_string(),
            (Some(_), Some(0)) => "All agents stopped".to_string(),
            (Some(_), Some(1)) => "1 agent running".to_string(),
            (Some(_), Some(n)) => format!("{} agents running", n),
            _ => "Unknown".to_string(),
        }
    }

    /// Where the user can export the configuration before a full reset.
    pub fn configure_page_link(&self) -> Option<String> {
        let base = Url::parse(&self.config.server_url).ok()?;
        configure_page_url(&base).ok().map(String::from)
    }

    pub fn set_agents(&mut self, agents: Vec<Agent>) {
        self.agents = Some(agents);
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn open_reset_modal(&mut self) {
        self.show_reset_modal = true;
    }

    pub fn close_reset_modal(&mut self) {
        self.show_reset_modal = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, stopped: bool) -> Agent {
        Agent {
            id: id.to_string(),
            stop_time: stopped.then(|| "2024-01-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_unknown_agents_block_reset() {
        let state = AppState::default();
        assert!(!state.all_monkeys_are_dead());
        assert_eq!(state.agent_summary(), "Unknown");
    }

    #[test]
    fn test_agent_summary() {
        let mut state = AppState::default();

        state.set_agents(vec![]);
        assert!(state.all_monkeys_are_dead());
        assert_eq!(state.agent_summary(), "No agents");

        state.set_agents(vec![agent("a", true), agent("b", true)]);
        assert!(state.all_monkeys_are_dead());
        assert_eq!(state.agent_summary(), "All agents stopped");

        state.set_agents(vec![agent("a", false), agent("b", true)]);
        assert!(!state.all_monkeys_are_dead());
        assert_eq!(state.agent_summary(), "1 agent running");

        state.set_agents(vec![agent("a", false), agent("b", false)]);
        assert_eq!(state.agent_summary(), "2 agents running");
    }

    #[test]
    fn test_configure_page_link() {
        let state = AppState::default();
        assert_eq!(
            state.configure_page_link().as_deref(),
            Some("https://localhost:5000/configure")
        );

        let broken = AppState::new(AppConfig {
            server_url: "::".to_string(),
            ..AppConfig::default()
        });
        assert!(broken.configure_page_link().is_none());
    }

    #[test]
    fn test_modal_visibility() {
        let mut state = AppState::default();
        state.open_reset_modal();
        assert!(state.show_reset_modal);
        state.close_reset_modal();
        assert!(!state.show_reset_modal);
    }
}
