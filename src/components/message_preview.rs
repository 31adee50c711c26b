//! Message Preview Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Live rendering of the message that will be shared
#[component]
pub fn MessagePreview() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="preview">
            <h4 class="section-title">"Pré-visualização"</h4>
            <div class="preview-text">{move || ctx.message()}</div>
        </div>
    }
}
