//! Schema-driven form control.

use leptos::prelude::*;
use records::FieldSpec;

/// Label plus input (or select, for choice kinds) bound to one form field.
#[component]
pub fn FieldInput(
    spec: &'static FieldSpec,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// Keeps element IDs unique when two forms share a schema.
    #[prop(optional)]
    id_prefix: &'static str,
) -> impl IntoView {
    let input_id = format!("{id_prefix}{}", spec.name);

    let control = match spec.kind.choices() {
        Some(choices) => {
            let placeholder =
                (!spec.required).then(|| view! { <option value="">"Select..."</option> });
            let options = choices
                .iter()
                .map(|choice| view! { <option value=choice.value>{choice.label}</option> })
                .collect::<Vec<_>>();
            view! {
                <select
                    class="field__input"
                    id=input_id.clone()
                    name=spec.name
                    required=spec.required
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    {placeholder}
                    {options}
                </select>
            }
            .into_any()
        }
        None => view! {
            <input
                class="field__input"
                id=input_id.clone()
                type=spec.kind.input_type()
                name=spec.name
                required=spec.required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label class="field__label" for=input_id>
                {spec.label}
            </label>
            {control}
        </div>
    }
}
