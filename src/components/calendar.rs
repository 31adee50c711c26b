//! Calendar Component
//!
//! Month grid with previous/next navigation. Weeks start on Sunday.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::date::{self, MonthView, WEEKDAY_INITIALS};

#[component]
pub fn Calendar(
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] on_select: Callback<NaiveDate>,
) -> impl IntoView {
    // Open on the selected month, else the current one
    let start = selected
        .get_untracked()
        .or_else(date::today)
        .map(MonthView::of)
        .unwrap_or(MonthView { year: 2000, month: 1 });
    let (month, set_month) = signal(start);

    let days = move || {
        month
            .get()
            .weeks()
            .into_iter()
            .flatten()
            .map(|cell| match cell {
                Some(day) => {
                    let is_selected = move || selected.get() == Some(day);
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "calendar-day selected" } else { "calendar-day" }
                            on:click=move |_| on_select.run(day)
                        >
                            {day.day()}
                        </button>
                    }
                    .into_any()
                }
                None => view! { <span class="calendar-day empty"></span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    type="button"
                    class="calendar-nav"
                    title="Mês anterior"
                    on:click=move |_| set_month.update(|m| *m = m.previous())
                >
                    "‹"
                </button>
                <span class="calendar-title">{move || month.get().title()}</span>
                <button
                    type="button"
                    class="calendar-nav"
                    title="Próximo mês"
                    on:click=move |_| set_month.update(|m| *m = m.next())
                >
                    "›"
                </button>
            </div>
            <div class="calendar-grid">
                {WEEKDAY_INITIALS
                    .iter()
                    .map(|d| view! { <span class="calendar-weekday">{*d}</span> })
                    .collect_view()}
                {days}
            </div>
        </div>
    }
}
