use crate::{Error, Result};
use tracing::{debug, warn};

/// Stages a request moves through, in order. Each request traverses the
/// chain at most once; there are no retries and no loops.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Received,
    Routed,
    Validated,
    PromptBuilt,
    UpstreamInvoked,
    Sanitized,
    Responded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestEvent {
    RouteMatched,
    InputAccepted,
    PromptConstructed,
    UpstreamDispatched,
    ResultSanitized,
    ResponseSent,
}

pub struct RequestLifecycle {
    state: RequestState,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self {
            state: RequestState::Received,
        }
    }

    pub fn current_state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            RequestState::Responded | RequestState::Failed(_)
        )
    }

    pub fn advance(&mut self, event: RequestEvent) -> Result<()> {
        let new_state = match (&self.state, &event) {
            (RequestState::Received, RequestEvent::RouteMatched) => RequestState::Routed,
            (RequestState::Routed, RequestEvent::InputAccepted) => RequestState::Validated,
            (RequestState::Validated, RequestEvent::PromptConstructed) => {
                RequestState::PromptBuilt
            }
            (RequestState::PromptBuilt, RequestEvent::UpstreamDispatched) => {
                RequestState::UpstreamInvoked
            }
            (RequestState::UpstreamInvoked, RequestEvent::ResultSanitized) => {
                RequestState::Sanitized
            }
            (RequestState::Sanitized, RequestEvent::ResponseSent) => RequestState::Responded,
            _ => {
                warn!(
                    "Invalid lifecycle transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::internal(format!(
                    "Invalid lifecycle transition from {:?} with event {:?}",
                    self.state, event
                )));
            }
        };

        debug!("Request lifecycle: {:?} -> {:?}", self.state, new_state);
        self.state = new_state;
        Ok(())
    }

    /// Terminal failure, reachable from every non-terminal state. `kind`
    /// records the error code that ended the request.
    pub fn fail(&mut self, kind: &str) {
        if self.is_terminal() {
            warn!(
                "Ignoring failure '{}' in terminal state {:?}",
                kind, self.state
            );
            return;
        }
        debug!("Request lifecycle: {:?} -> Failed({})", self.state, kind);
        self.state = RequestState::Failed(kind.to_string());
    }
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
