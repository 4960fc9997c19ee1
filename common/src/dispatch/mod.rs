//! Action dispatcher for the promotions page.
//!
//! Every button on the page maps to an [`Action`]. Handling one is split in
//! three steps so the UI can hand the network part to its event loop:
//!
//! 1. [`PromotionPage::begin`] reads the form and builds the request
//!    (`Clear` is handled right there and builds nothing).
//! 2. [`perform`] sends it through a [`Transport`] and interprets the reply.
//! 3. [`PromotionPage::complete`] applies the outcome to the form, the
//!    results table and the status line.
//!
//! [`dispatch`] chains the three for callers that can hold the page across
//! the await. Overlapping requests are not coordinated: whichever completion
//! is applied last wins.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::form::FormState;
use crate::model::results::SearchResults;
use crate::query::SearchFilters;
use crate::requests::{
    interpret, ApiError, ApiRequest, RawResponse, Reply, FALLBACK_ERROR_MESSAGE,
};

/// Status line text after a successful create/update/cancel/retrieve/search.
pub const SUCCESS_MESSAGE: &str = "Success";
/// Status line text after a successful delete.
pub const DELETED_MESSAGE: &str = "Promotion Deleted!";

/// User actions available on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Cancel,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Retrieve,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Cancel,
        Action::Clear,
        Action::Search,
    ];

    /// DOM id of the button that triggers this action.
    pub fn button_id(self) -> &'static str {
        match self {
            Action::Create => "create-btn",
            Action::Update => "update-btn",
            Action::Cancel => "cancel-btn",
            Action::Retrieve => "retrieve-btn",
            Action::Delete => "delete-btn",
            Action::Clear => "clear-btn",
            Action::Search => "search-btn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Update => "Update",
            Action::Cancel => "Cancel",
            Action::Retrieve => "Retrieve",
            Action::Delete => "Delete",
            Action::Clear => "Clear",
            Action::Search => "Search",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sends one request and hands back the raw response.
///
/// Implementations must not retry; a network failure is reported as
/// [`ApiError::Transport`].
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// A request built for an action, not yet sent.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub action: Action,
    pub request: ApiRequest,
}

/// The interpreted outcome of a sent request.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub action: Action,
    pub outcome: Result<Reply, ApiError>,
}

/// Everything the page shows: the edit form, the last search results and the
/// status line.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PromotionPage {
    pub form: FormState,
    /// `None` until the first successful search.
    pub results: Option<SearchResults>,
    pub status: String,
}

impl PromotionPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the request for `action` from the current form.
    ///
    /// Returns `None` for `Clear`, which is applied immediately.
    pub fn begin(&mut self, action: Action) -> Option<PendingRequest> {
        let form = &self.form;
        let request = match action {
            Action::Create => ApiRequest::create(form.encode_from_form()),
            Action::Update => ApiRequest::update(&form.id, form.encode_from_form()),
            Action::Cancel => ApiRequest::cancel(&form.id),
            Action::Retrieve => ApiRequest::retrieve(&form.id),
            Action::Delete => ApiRequest::delete(&form.id),
            Action::Search => {
                ApiRequest::search(&SearchFilters::from_form(form).to_query_string())
            }
            Action::Clear => {
                self.form.clear_all();
                return None;
            }
        };

        debug!("{} -> {} {}", action, request.method, request.path);
        Some(PendingRequest { action, request })
    }

    /// Applies a finished request to the page.
    pub fn complete(&mut self, completion: Completion) {
        let Completion { action, outcome } = completion;

        match outcome {
            Ok(reply) => self.apply_success(action, reply),
            Err(err) => {
                warn!("{} failed: {}", action, err);
                self.apply_failure(action, &err);
            }
        }
    }

    fn apply_success(&mut self, action: Action, reply: Reply) {
        match (action, reply) {
            (Action::Delete, _) => {
                self.form.clear_form();
                self.status = DELETED_MESSAGE.to_string();
            }
            (Action::Search, Reply::Records(records)) => {
                debug!("search returned {} promotions", records.len());
                self.results = Some(SearchResults::from_records(&records));
                self.status = SUCCESS_MESSAGE.to_string();
            }
            (
                Action::Create | Action::Update | Action::Cancel | Action::Retrieve,
                Reply::Record(record),
            ) => {
                self.form.decode_into_form(&record);
                self.status = SUCCESS_MESSAGE.to_string();
            }
            (action, reply) => {
                // Only reachable when a transport pairs the wrong reply with an action.
                warn!("{} completed with mismatched reply {:?}", action, reply);
                self.status = FALLBACK_ERROR_MESSAGE.to_string();
            }
        }
    }

    fn apply_failure(&mut self, action: Action, err: &ApiError) {
        match action {
            Action::Delete => {
                self.status = FALLBACK_ERROR_MESSAGE.to_string();
            }
            Action::Retrieve => {
                self.form.clear_form();
                self.status = err.status_message();
            }
            _ => {
                self.status = err.status_message();
            }
        }
    }
}

/// Sends a pending request and interprets the response.
pub async fn perform<T: Transport>(transport: &T, pending: PendingRequest) -> Completion {
    let PendingRequest { action, request } = pending;
    let outcome = match transport.send(&request).await {
        Ok(response) => interpret(request.expect, &response),
        Err(err) => Err(err),
    };
    Completion { action, outcome }
}

/// Runs `action` end to end against `page`.
pub async fn dispatch<T: Transport>(page: &mut PromotionPage, transport: &T, action: Action) {
    if let Some(pending) = page.begin(action) {
        let completion = perform(transport, pending).await;
        page.complete(completion);
    }
}
