//! Edit form with search-by-ID and delete for the selected record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are bound to `PanelState::form`. Submit, search and delete each go
//! through the panel's `begin_*`/`finish_*` pair; a local rejection never
//! reaches `dispatch`. Successful updates and deletes call `reload`.

#[cfg(test)]
#[path = "edit_form_test.rs"]
mod edit_form_test;

use leptos::prelude::*;
use records::{EntityKind, FollowUp, FormMode, PanelState, Resource};

use crate::components::field_input::FieldInput;
use crate::components::notice_line::NoticeLine;
use crate::net::api::dispatch;
use crate::state::config::ApiConfig;

fn update_button_label(kind: EntityKind, loading: bool) -> String {
    if loading {
        "Saving...".to_owned()
    } else {
        format!("Update {}", kind.label().to_lowercase())
    }
}

fn selected_id_text(selected: Option<i64>) -> String {
    selected.map(|id| id.to_string()).unwrap_or_default()
}

/// Edit form for the record selected in `panel`.
pub fn edit_form<R: Resource>(
    panel: RwSignal<PanelState<R>>,
    api: ApiConfig,
    reload: Callback<()>,
) -> impl IntoView {
    let kind = R::KIND;

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(request) = panel.try_update(|p| p.begin_update()).flatten() else {
                return;
            };
            dispatch(api.clone(), request, move |outcome| {
                if panel.try_update(|p| p.finish_update(outcome)) == Some(FollowUp::Reload) {
                    reload.run(());
                }
            });
        }
    };

    let on_search = {
        let api = api.clone();
        move |_| {
            let Some(request) = panel.try_update(|p| p.begin_search()).flatten() else {
                return;
            };
            dispatch(api.clone(), request, move |outcome| {
                panel.update(|p| p.finish_search(outcome));
            });
        }
    };

    let on_delete = move |_| {
        let Some(request) = panel.try_update(|p| p.begin_delete()).flatten() else {
            return;
        };
        dispatch(api.clone(), request, move |outcome| {
            if panel.try_update(|p| p.finish_delete(outcome)) == Some(FollowUp::Reload) {
                reload.run(());
            }
        });
    };

    let fields = kind
        .schema()
        .fields_for(FormMode::Edit)
        .map(|spec| {
            view! {
                <FieldInput
                    spec=spec
                    id_prefix="edit-"
                    value=Signal::derive(move || panel.with(|p| p.form.get(spec.name).to_owned()))
                    on_change=Callback::new(move |value: String| panel.update(|p| p.set_field(spec.name, value)))
                />
            }
        })
        .collect::<Vec<_>>();

    let busy = move || panel.with(|p| p.loading);

    view! {
        <div class="edit-panel">
            <h3>{format!("Edit {}", kind.label().to_lowercase())}</h3>
            <div class="edit-panel__search">
                <label for="edit-id-input">"ID:"</label>
                <input
                    id="edit-id-input"
                    type="number"
                    prop:value=move || panel.with(|p| p.id_input.clone())
                    on:input=move |ev| panel.update(|p| p.set_id_input(event_target_value(&ev)))
                />
                <button type="button" on:click=on_search disabled=busy>
                    "Search"
                </button>
            </div>
            <form class="edit-panel__form" on:submit=on_submit>
                <div class="field">
                    <label class="field__label">"Selected ID"</label>
                    <input
                        class="field__input"
                        type="number"
                        readonly=true
                        disabled=true
                        prop:value=move || panel.with(|p| selected_id_text(p.selected))
                    />
                </div>
                {fields}
                <NoticeLine notice=Signal::derive(move || panel.with(|p| p.notice.clone()))/>
                <button type="submit" disabled=move || panel.with(|p| p.loading || p.selected.is_none())>
                    {move || update_button_label(kind, busy())}
                </button>
                <button type="button" class="edit-panel__delete" on:click=on_delete disabled=busy>
                    {format!("Delete {}", kind.label().to_lowercase())}
                </button>
            </form>
        </div>
    }
}
