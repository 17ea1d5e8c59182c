//! Fetch state of the detail page.
//!
//! Every fetch carries a token from `RequestTokens`. Only the most recently
//! started fetch may settle the state; older responses are dropped.

use std::rc::Rc;
use yew::prelude::*;
use crate::error::{ApiError, DetailError};
use crate::shop::models::AgencyDetail;

/// Monotonic source of request tokens.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: u64,
}

impl RequestTokens {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success(AgencyDetail),
    Failed(DetailError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailState {
    token: u64,
    pub status: FetchStatus,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            token: 0,
            status: FetchStatus::Idle,
        }
    }
}

pub enum DetailAction {
    /// A fetch for new parameters started.
    Start(u64),
    /// Parameters became invalid; pending fetches must not land.
    Abandon(u64),
    Resolved {
        token: u64,
        result: Result<AgencyDetail, ApiError>,
    },
}

impl DetailState {
    /// Next state, or `None` when the action is stale.
    pub fn apply(&self, action: DetailAction) -> Option<Self> {
        match action {
            DetailAction::Start(token) if token > self.token => Some(Self {
                token,
                status: FetchStatus::Loading,
            }),
            DetailAction::Abandon(token) if token > self.token => Some(Self {
                token,
                status: FetchStatus::Idle,
            }),
            DetailAction::Resolved { token, result } if token == self.token => {
                let status = match result {
                    Ok(detail) => FetchStatus::Success(detail),
                    Err(err) => FetchStatus::Failed(DetailError::from(&err)),
                };
                Some(Self { token, status })
            }
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Idle | FetchStatus::Loading)
    }

    pub fn detail(&self) -> Option<&AgencyDetail> {
        match &self.status {
            FetchStatus::Success(detail) => Some(detail),
            _ => None,
        }
    }
}

impl Reducible for DetailState {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => {
                log::debug!("dropping stale agency detail update");
                self
            }
        }
    }
}
