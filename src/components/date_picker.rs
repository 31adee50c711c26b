//! Date Picker Component
//!
//! Button showing the long-form date that opens a calendar popover.
//! Reports canonical `yyyy-mm-dd` strings, or `None` when cleared.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::Calendar;
use crate::date;

#[component]
pub fn DatePicker(
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Option<String>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let label = move || date::display_label(value.get().as_deref(), &placeholder);
    let has_value = move || value.get().is_some();

    // An unparseable stored value shows as nothing selected
    let selected = Signal::derive(move || {
        value.get().and_then(|v| date::parse_canonical(&v).ok())
    });

    let select = move |day: NaiveDate| {
        let canonical = date::to_canonical(day);
        log::debug!("date selected: {}", canonical);
        on_change.run(Some(canonical));
        set_open.set(false);
    };

    let clear = move |_| {
        on_change.run(None);
        set_open.set(false);
    };

    view! {
        <div class="date-picker">
            <button
                type="button"
                class=move || if has_value() { "date-picker-trigger" } else { "date-picker-trigger empty" }
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="date-picker-icon">"📅"</span>
                <span class="date-picker-label">{label}</span>
            </button>

            <Show when=move || open.get()>
                <div class="date-picker-popover">
                    <Calendar selected=selected on_select=select />
                    <button
                        type="button"
                        class="secondary-btn date-clear-btn"
                        disabled=move || !has_value()
                        on:click=clear
                    >
                        "Limpar data"
                    </button>
                </div>
            </Show>
        </div>
    }
}
