//! Top navigation listing the administered entities.

use leptos::prelude::*;
use records::EntityKind;

use crate::state::menu::MenuState;

/// Menu bar; clicking an entry swaps the panel shown below it.
#[component]
pub fn NavMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let items = EntityKind::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <li
                    class="nav-menu__item"
                    class:nav-menu__item--active=move || menu.with(|m| m.is_active(kind))
                >
                    <button type="button" on:click=move |_| menu.update(|m| m.select(kind))>
                        {kind.plural()}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-menu">
            <ul>{items}</ul>
        </nav>
    }
}
