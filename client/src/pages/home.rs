//! Landing page: entity menu plus the active entity's panel.

use leptos::prelude::*;
use records::{Appointment, EntityKind, Prescription, Room, Supply, User};

use crate::components::nav_menu::NavMenu;
use crate::components::resource_panel::resource_panel;
use crate::state::menu::MenuState;

#[component]
pub fn HomePage() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    let active = Memo::new(move |_| menu.with(|m| m.active));

    let active_panel = move || match active.get() {
        EntityKind::User => resource_panel::<User>().into_any(),
        EntityKind::Room => resource_panel::<Room>().into_any(),
        EntityKind::Supply => resource_panel::<Supply>().into_any(),
        EntityKind::Prescription => resource_panel::<Prescription>().into_any(),
        EntityKind::Appointment => resource_panel::<Appointment>().into_any(),
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Vida Plus"</h1>
                <p>"Hospital administration"</p>
            </header>
            <NavMenu menu=menu/>
            <main class="home-page__content">{active_panel}</main>
        </div>
    }
}
