//! Entity list rendered as a clickable table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come from the last list load in `PanelState::items`. Clicking a row
//! selects that record into the edit form below the table.

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use leptos::prelude::*;
use records::{FormData, FormMode, PanelState, Resource};

/// Cell text for one record: the ID, then every schema column.
fn row_cells<R: Resource>(record: &R) -> Vec<String> {
    let values = FormData::from_record(record, FormMode::Edit);
    std::iter::once(record.id().to_string())
        .chain(
            R::KIND
                .schema()
                .columns()
                .map(|field| field.display(values.get(field.name))),
        )
        .collect()
}

/// Table of every loaded record of `R`.
pub fn record_table<R: Resource>(panel: RwSignal<PanelState<R>>) -> impl IntoView {
    let headers = R::KIND
        .schema()
        .columns()
        .map(|field| view! { <th>{field.label}</th> })
        .collect::<Vec<_>>();

    let rows = move || {
        panel
            .with(|p| p.items.clone())
            .into_iter()
            .map(|record| {
                let cells = row_cells(&record)
                    .into_iter()
                    .map(|cell| view! { <td>{cell}</td> })
                    .collect::<Vec<_>>();
                let id = record.id();
                view! {
                    <tr
                        class="record-table__row"
                        class:record-table__row--selected=move || panel.with(|p| p.selected == Some(id))
                        on:click=move |_| {
                            panel.update(|p| p.select(&record));
                            crate::util::scroll::scroll_to_bottom();
                        }
                    >
                        {cells}
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <table class="record-table">
            <thead>
                <tr class="record-table__header">
                    <th>"ID"</th>
                    {headers}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || panel.with(|p| !p.items.is_empty())
                    fallback=move || {
                        view! {
                            <tr>
                                <td class="record-table__empty">
                                    {move || if panel.with(|p| p.list_loading) { "Loading..." } else { "No records." }}
                                </td>
                            </tr>
                        }
                    }
                >
                    {rows}
                </Show>
            </tbody>
        </table>
    }
}
