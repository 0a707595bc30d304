//! One entity's full screen: list, edit form and create form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel signal lives as long as the component. Switching entities in the
//! menu unmounts it, so every visit starts with a fresh load.

use leptos::prelude::*;
use records::{PanelState, Resource};

use crate::components::create_form::create_form;
use crate::components::edit_form::edit_form;
use crate::components::record_table::record_table;
use crate::net::api::dispatch;
use crate::state::config::ApiConfig;

/// Fetch the collection for `panel` and replace its items with the result.
pub(crate) fn load_list<R: Resource>(api: &ApiConfig, panel: RwSignal<PanelState<R>>) {
    let Some(request) = panel.try_update(PanelState::begin_load) else {
        return;
    };
    dispatch(api.clone(), request, move |outcome| {
        panel.update(|p| p.finish_load(outcome));
    });
}

pub fn resource_panel<R: Resource>() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let kind = R::KIND;
    let panel = RwSignal::new(PanelState::<R>::new());

    let reload = {
        let api = api.clone();
        Callback::new(move |()| load_list(&api, panel))
    };

    Effect::new(move || reload.run(()));

    view! {
        <section class="resource-panel">
            <h2>{kind.plural()}</h2>
            {record_table(panel)}
            {edit_form(panel, api.clone(), reload)}
            <h3>{format!("New {}", kind.label().to_lowercase())}</h3>
            {create_form::<R>(api, reload)}
        </section>
    }
}
