//! "New record" form beneath each panel.

#[cfg(test)]
#[path = "create_form_test.rs"]
mod create_form_test;

use leptos::prelude::*;
use records::{CreateFormState, EntityKind, FollowUp, FormMode, Resource};

use crate::components::field_input::FieldInput;
use crate::components::notice_line::NoticeLine;
use crate::net::api::dispatch;
use crate::state::config::ApiConfig;

fn create_button_label(kind: EntityKind, loading: bool) -> String {
    if loading {
        "Creating...".to_owned()
    } else {
        format!("Create {}", kind.label().to_lowercase())
    }
}

/// Create form for `R`. `on_success` runs once per record the backend accepts.
pub fn create_form<R: Resource>(api: ApiConfig, on_success: Callback<()>) -> impl IntoView {
    let kind = R::KIND;
    let state = RwSignal::new(CreateFormState::<R>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        dispatch(api.clone(), request, move |outcome| {
            if state.try_update(|s| s.finish_submit(outcome)) == Some(FollowUp::Reload) {
                on_success.run(());
            }
        });
    };

    let fields = kind
        .schema()
        .fields_for(FormMode::Create)
        .map(|spec| {
            view! {
                <FieldInput
                    spec=spec
                    id_prefix="create-"
                    value=Signal::derive(move || state.with(|s| s.form.get(spec.name).to_owned()))
                    on_change=Callback::new(move |value: String| state.update(|s| s.set_field(spec.name, value)))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="create-form" on:submit=on_submit>
            {fields}
            <NoticeLine notice=Signal::derive(move || state.with(|s| s.notice.clone()))/>
            <button type="submit" disabled=move || state.with(|s| s.loading)>
                {move || create_button_label(kind, state.with(|s| s.loading))}
            </button>
        </form>
    }
}
