use serde::{Deserialize, Serialize};

/// Status value the Island reports for a successful action.
pub const STATUS_OK: &str = "OK";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ResetAction {
    DeleteAgentData,
    ResetAll,
}

impl ResetAction {
    /// Value of the `action` query parameter on the `/api` endpoint.
    pub fn as_query(&self) -> &'static str {
        match self {
            ResetAction::DeleteAgentData => "delete-agent-data",
            ResetAction::ResetAll => "reset",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResetAction::DeleteAgentData => "Delete data",
            ResetAction::ResetAll => "Reset the Island",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl ActionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending)
    }

    /// Idle and Failed panels show a button that starts the action.
    pub fn can_start(&self) -> bool {
        matches!(self, ActionStatus::Idle | ActionStatus::Failed(_))
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ActionReply {
    pub status: String,
}

impl ActionReply {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Agent {
    pub id: String,
    #[serde(default)]
    pub stop_time: Option<String>,
}

impl Agent {
    pub fn is_dead(&self) -> bool {
        self.stop_time.is_some()
    }
}

/// True when no agent is still running. An empty list counts as all dead.
pub fn all_agents_dead(agents: &[Agent]) -> bool {
    agents.iter().all(Agent::is_dead)
}

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct LoginReply {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, stop_time: Option<&str>) -> Agent {
        Agent {
            id: id.to_string(),
            stop_time: stop_time.map(str::to_string),
        }
    }

    #[test]
    fn test_action_query_values() {
        assert_eq!(ResetAction::DeleteAgentData.as_query(), "delete-agent-data");
        assert_eq!(ResetAction::ResetAll.as_query(), "reset");
    }

    #[test]
    fn test_reply_is_ok_only_for_literal_ok() {
        let ok: ActionReply = serde_json::from_str(r#"{"status":"OK"}"#).expect("valid json");
        assert!(ok.is_ok());

        let lower: ActionReply = serde_json::from_str(r#"{"status":"ok"}"#).expect("valid json");
        assert!(!lower.is_ok());

        let error: ActionReply =
            serde_json::from_str(r#"{"status":"ERROR"}"#).expect("valid json");
        assert!(!error.is_ok());
    }

    #[test]
    fn test_reply_without_status_fails_to_parse() {
        assert!(serde_json::from_str::<ActionReply>(r#"{"result":"OK"}"#).is_err());
    }

    #[test]
    fn test_all_agents_dead() {
        assert!(all_agents_dead(&[]));
        assert!(all_agents_dead(&[
            agent("a", Some("2024-01-01T00:00:00Z")),
            agent("b", Some("2024-01-01T00:05:00Z")),
        ]));
        assert!(!all_agents_dead(&[
            agent("a", Some("2024-01-01T00:00:00Z")),
            agent("b", None),
        ]));
    }

    #[test]
    fn test_agent_missing_stop_time_is_running() {
        let agents: Vec<Agent> =
            serde_json::from_str(r#"[{"id":"a1","start_time":"2024-01-01T00:00:00Z"}]"#)
                .expect("valid json");
        assert!(!agents[0].is_dead());
    }

    #[test]
    fn test_can_start() {
        assert!(ActionStatus::Idle.can_start());
        assert!(ActionStatus::Failed("boom".into()).can_start());
        assert!(!ActionStatus::Pending.can_start());
        assert!(!ActionStatus::Succeeded.can_start());
    }
}
