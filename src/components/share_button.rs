//! Share Button Component
//!
//! Sends the current program to the messaging link.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::share;

/// How long the button keeps its "sending" label
const SENDING_LABEL_MS: u32 = 800;

#[component]
pub fn ShareButton() -> impl IntoView {
    let ctx = use_app_context();
    let (is_sending, set_is_sending) = signal(false);

    let send = move |_| {
        if is_sending.get_untracked() { return; }
        set_is_sending.set(true);

        let items = ctx.items_untracked();
        let date = ctx.date_untracked();
        share::share_program(&ctx.config(), &items, date.as_deref());

        let reset = Timeout::new(SENDING_LABEL_MS, move || set_is_sending.set(false));
        let _ = reset.forget();
    };

    view! {
        <button
            type="button"
            class="share-btn"
            disabled=move || is_sending.get()
            on:click=send
        >
            {move || if is_sending.get() { "⏳ Enviando..." } else { "📤 Enviar via WhatsApp" }}
        </button>
    }
}
