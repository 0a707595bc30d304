//! Create-form state machine for one entity.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use std::marker::PhantomData;

use crate::entity::Resource;
use crate::form::FormData;
use crate::http::{ApiRequest, FollowUp, Outcome};
use crate::notice::Notice;
use crate::panel::NETWORK_ERROR;
use crate::schema::FormMode;

/// View state of the "new record" form beneath a panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateFormState<R: Resource> {
    pub form: FormData,
    pub notice: Notice,
    pub loading: bool,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> Default for CreateFormState<R> {
    fn default() -> Self {
        Self {
            form: FormData::blank(R::KIND.schema(), FormMode::Create),
            notice: Notice::default(),
            loading: false,
            _record: PhantomData,
        }
    }
}

impl<R: Resource> CreateFormState<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set(name, value);
    }

    /// Validate and build the `POST`; `None` when rejected locally or busy.
    pub fn begin_submit(&mut self) -> Option<ApiRequest> {
        if self.loading {
            return None;
        }
        self.notice = Notice::default();
        match self.form.to_payload(R::KIND.schema(), FormMode::Create) {
            Ok(body) => {
                self.loading = true;
                Some(ApiRequest::post(R::KIND.create_path(), body))
            }
            Err(e) => {
                self.notice = Notice::error(e.user_message());
                None
            }
        }
    }

    /// On success the form resets and the parent list must reload.
    pub fn finish_submit(&mut self, outcome: Outcome) -> FollowUp {
        self.loading = false;
        match outcome {
            Ok(response) if response.is_ok() => {
                self.form = FormData::blank(R::KIND.schema(), FormMode::Create);
                self.notice = Notice::success(format!("{} created.", R::KIND.label()));
                FollowUp::Reload
            }
            Ok(response) => {
                let message = response
                    .server_message()
                    .unwrap_or("Creation failed. Check the data.");
                self.notice = Notice::error(message);
                FollowUp::Nothing
            }
            Err(e) => {
                log::warn!("{} create failed: {e}", R::KIND.label());
                self.notice = Notice::error(NETWORK_ERROR);
                FollowUp::Nothing
            }
        }
    }
}
