use leptos::prelude::*;
use records::Notice;

/// Status message under a form; renders nothing while the notice is empty.
#[component]
pub fn NoticeLine(#[prop(into)] notice: Signal<Notice>) -> impl IntoView {
    view! {
        <Show when=move || !notice.with(Notice::is_empty)>
            <div
                class="notice"
                class:notice--error=move || notice.with(Notice::is_error)
                class:notice--success=move || notice.with(Notice::is_success)
            >
                {move || notice.with(|n| n.message.clone())}
            </div>
        </Show>
    }
}
