//! List + edit + delete state machine for one entity.
//!
//! SYSTEM CONTEXT
//! ==============
//! A panel screen owns one [`PanelState`]. Every user action is a `begin_*`
//! call that either rejects locally (updating the notice, issuing nothing) or
//! returns the [`ApiRequest`] to execute. The executed request's [`Outcome`]
//! goes back through the matching `finish_*` call, which updates view state
//! and says whether the list must be reloaded.
//!
//! INVARIANTS
//! ==========
//! - A local rejection never yields a request.
//! - While `loading` is set, further submissions are ignored outright.
//! - A failed response leaves the form and selection untouched.
//! - The list is replaced wholesale by each load, never patched.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::entity::Resource;
use crate::form::FormData;
use crate::http::{ApiRequest, FollowUp, Outcome};
use crate::notice::Notice;
use crate::schema::FormMode;

pub(crate) const NETWORK_ERROR: &str = "Network error. Check that the backend is running.";
pub(crate) const MISSING_ID: &str = "Enter a valid ID.";

/// View state of one entity screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState<R: Resource> {
    /// Records from the most recent list load.
    pub items: Vec<R>,
    pub list_loading: bool,
    /// Edit form bound to the inputs.
    pub form: FormData,
    /// ID of the record the edit form targets.
    pub selected: Option<i64>,
    /// Free-text identifier shared by search and delete.
    pub id_input: String,
    pub notice: Notice,
    /// A search, update or delete is in flight.
    pub loading: bool,
    in_flight: Option<i64>,
}

impl<R: Resource> Default for PanelState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            list_loading: false,
            form: FormData::blank(R::KIND.schema(), FormMode::Edit),
            selected: None,
            id_input: String::new(),
            notice: Notice::default(),
            loading: false,
            in_flight: None,
        }
    }
}

impl<R: Resource> PanelState<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request for the whole collection. Loads are never gated by `loading`.
    pub fn begin_load(&mut self) -> ApiRequest {
        self.list_loading = true;
        ApiRequest::get(R::KIND.list_path())
    }

    /// Replace the list with the loaded records, or empty it on any failure.
    pub fn finish_load(&mut self, outcome: Outcome) {
        self.list_loading = false;
        let label = R::KIND.plural();
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                log::error!("{label} list request failed: {e}");
                self.items.clear();
                return;
            }
        };
        if !response.is_ok() {
            log::error!("{label} list request failed: HTTP {}", response.status);
            self.items.clear();
            return;
        }
        let Some(body) = response.body else {
            log::error!("{label} list response had no JSON body");
            self.items.clear();
            return;
        };
        match serde_json::from_value::<Vec<R>>(body) {
            Ok(items) => self.items = items,
            Err(e) => {
                log::error!("{label} list response did not decode: {e}");
                self.items.clear();
            }
        }
    }

    /// Copy `record` into the edit form and target it for update and delete.
    pub fn select(&mut self, record: &R) {
        let id = record.id();
        self.form = FormData::from_record(record, FormMode::Edit);
        self.selected = Some(id);
        self.id_input = id.to_string();
        self.notice = Notice::info(format!("Editing {} #{id}", R::KIND.label().to_lowercase()));
    }

    /// Bound-input handler for the edit form.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set(name, value);
    }

    pub fn set_id_input(&mut self, value: impl Into<String>) {
        self.id_input = value.into();
    }

    /// Validate the edit form and build the `PUT` for the selected record.
    pub fn begin_update(&mut self) -> Option<ApiRequest> {
        if self.loading {
            return None;
        }
        self.notice = Notice::default();
        let Some(id) = self.selected else {
            self.notice = Notice::error("Select a record to edit first.");
            return None;
        };
        match self.form.to_payload(R::KIND.schema(), FormMode::Edit) {
            Ok(body) => {
                self.loading = true;
                Some(ApiRequest::put(R::KIND.item_path(id), body))
            }
            Err(e) => {
                self.notice = Notice::error(e.user_message());
                None
            }
        }
    }

    pub fn finish_update(&mut self, outcome: Outcome) -> FollowUp {
        self.loading = false;
        match outcome {
            Ok(response) if response.is_ok() => {
                self.clear_form();
                self.notice = Notice::success(format!("{} updated.", R::KIND.label()));
                FollowUp::Reload
            }
            Ok(response) => {
                let message = response.server_message().unwrap_or("Update failed.");
                self.notice = Notice::error(message);
                FollowUp::Nothing
            }
            Err(e) => {
                log::warn!("{} update failed: {e}", R::KIND.label());
                self.notice = Notice::error(NETWORK_ERROR);
                FollowUp::Nothing
            }
        }
    }

    /// Build the `DELETE` for the identifier in `id_input`.
    pub fn begin_delete(&mut self) -> Option<ApiRequest> {
        if self.loading {
            return None;
        }
        self.notice = Notice::default();
        let Some(id) = parse_id(&self.id_input) else {
            self.notice = Notice::error(MISSING_ID);
            return None;
        };
        self.loading = true;
        self.in_flight = Some(id);
        Some(ApiRequest::delete(R::KIND.item_path(id)))
    }

    pub fn finish_delete(&mut self, outcome: Outcome) -> FollowUp {
        self.loading = false;
        let deleted = self.in_flight.take();
        match outcome {
            Ok(response) if response.is_delete_success() => {
                if deleted.is_some() && self.selected == deleted {
                    self.clear_form();
                }
                self.id_input.clear();
                self.notice = Notice::success("Record deleted.");
                FollowUp::Reload
            }
            Ok(response) => {
                let message = response
                    .server_message()
                    .unwrap_or("The record could not be deleted.");
                self.notice = Notice::error(message);
                FollowUp::Nothing
            }
            Err(e) => {
                log::warn!("{} delete failed: {e}", R::KIND.label());
                self.notice = Notice::error(NETWORK_ERROR);
                FollowUp::Nothing
            }
        }
    }

    /// Build the `GET` that fetches a single record by `id_input`.
    pub fn begin_search(&mut self) -> Option<ApiRequest> {
        if self.loading {
            return None;
        }
        self.notice = Notice::default();
        let Some(id) = parse_id(&self.id_input) else {
            self.notice = Notice::error(MISSING_ID);
            return None;
        };
        self.loading = true;
        self.in_flight = Some(id);
        Some(ApiRequest::get(R::KIND.item_path(id)))
    }

    /// Populate the form from the fetched record as if its row was clicked.
    pub fn finish_search(&mut self, outcome: Outcome) {
        self.loading = false;
        let id = self.in_flight.take().unwrap_or_default();
        let label = R::KIND.label();
        match outcome {
            Ok(response) if response.is_ok() => {
                let record = response
                    .body
                    .and_then(|body| serde_json::from_value::<R>(body).ok());
                match record {
                    Some(record) => {
                        self.select(&record);
                        self.notice = Notice::success(format!("{label} #{id} loaded."));
                    }
                    None => {
                        log::error!("{label} #{id} response did not decode");
                        self.notice = Notice::error("Unexpected response from the server.");
                    }
                }
            }
            Ok(_) => self.notice = Notice::error(format!("{label} #{id} not found.")),
            Err(e) => {
                log::warn!("{label} search failed: {e}");
                self.notice = Notice::error(NETWORK_ERROR);
            }
        }
    }

    fn clear_form(&mut self) {
        self.form = FormData::blank(R::KIND.schema(), FormMode::Edit);
        self.selected = None;
        self.id_input.clear();
    }
}

/// Parse a free-text record identifier. Blank and non-numeric input is `None`.
pub(crate) fn parse_id(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
