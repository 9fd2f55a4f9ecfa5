use crate::island::client::{ApiError, IslandApi};
use crate::island::types::{ActionStatus, ResetAction};
use tracing::{info, warn};

/// What the reset dialog shows for a given set of props.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogView {
    Hidden,
    Guard,
    Actions,
}

impl DialogView {
    pub fn for_props(show: bool, all_monkeys_are_dead: bool) -> Self {
        match (show, all_monkeys_are_dead) {
            (false, _) => DialogView::Hidden,
            (true, false) => DialogView::Guard,
            (true, true) => DialogView::Actions,
        }
    }
}

/// Result of applying a finished request to the dialog.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Completion {
    pub close_requested: bool,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ResetDialogState {
    pub delete_status: ActionStatus,
    pub reset_all_status: ActionStatus,
}

impl ResetDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, action: ResetAction) -> &ActionStatus {
        match action {
            ResetAction::DeleteAgentData => &self.delete_status,
            ResetAction::ResetAll => &self.reset_all_status,
        }
    }

    fn status_mut(&mut self, action: ResetAction) -> &mut ActionStatus {
        match action {
            ResetAction::DeleteAgentData => &mut self.delete_status,
            ResetAction::ResetAll => &mut self.reset_all_status,
        }
    }

    /// Moves the action to Pending. Returns false when the action cannot be
    /// started from its current status; the caller must not send a request.
    pub fn start(&mut self, action: ResetAction) -> bool {
        let status = self.status_mut(action);
        if !status.can_start() {
            return false;
        }
        *status = ActionStatus::Pending;
        true
    }

    pub fn finish(&mut self, action: ResetAction, result: Result<(), ApiError>) -> Completion {
        match result {
            Ok(()) => {
                *self.status_mut(action) = ActionStatus::Succeeded;
                Completion {
                    close_requested: action == ResetAction::ResetAll,
                }
            }
            Err(e) => {
                *self.status_mut(action) = ActionStatus::Failed(e.to_string());
                Completion::default()
            }
        }
    }

    /// Closing the dialog only clears the delete panel. A delete still in
    /// flight stays Pending so reopening cannot send it twice.
    pub fn close(&mut self) {
        if !self.delete_status.is_pending() {
            self.delete_status = ActionStatus::Idle;
        }
    }
}

/// Sends the request for `action` and checks the reply status.
pub async fn perform_action(api: &dyn IslandApi, action: ResetAction) -> Result<(), ApiError> {
    info!(action = action.as_query(), "sending island action");

    let reply = api.run_action(action).await.inspect_err(|e| {
        warn!(action = action.as_query(), error = %e, "island action failed");
    })?;

    if !reply.is_ok() {
        warn!(
            action = action.as_query(),
            status = %reply.status,
            "island rejected action"
        );
        return Err(ApiError::Rejected {
            status: reply.status,
        });
    }

    info!(action = action.as_query(), "island action completed");
    Ok(())
}
