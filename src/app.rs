//! Programa do Culto App
//!
//! Form shell: date selector, item list, preview and share button, with the
//! program mirrored into local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DatePicker, MessagePreview, ProgramList, ShareButton};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Item;
use crate::persistence::ProgramStorage;
use crate::store::ProgramState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Restore the last program from this browser
    let storage = StoredValue::new_local(ProgramStorage::browser(config.storage.clone()));
    let (items, date) = storage.with_value(|s| (s.load_items(), s.load_date()));
    log::info!("restored {} items, date {:?}", items.len(), date);

    let store = Store::new(ProgramState::new(items, date));
    let ctx = AppContext::new(store, config.clone());

    // Provide context to all children
    provide_context(ctx);

    // Mirror every change back into storage
    Effect::new(move |_| {
        let items = ctx.items();
        if let Err(e) = storage.with_value(|s| s.save_items(&items)) {
            log::error!("failed to save items: {}", e);
        }
    });

    Effect::new(move |_| {
        let date = ctx.date();
        if let Err(e) = storage.with_value(|s| s.save_date(date.as_deref())) {
            log::error!("failed to save date: {}", e);
        }
    });

    view! {
        <div class="page">
            <div class="card">
                <header class="card-header">
                    <h1>"📋 Programação do Culto"</h1>
                    <p class="subtitle">"PIB Caetés"</p>
                </header>

                <section class="section">
                    <h3 class="section-title">"Crie a programação do culto"</h3>
                    <p class="hint">"Selecione a data e adicione os itens na ordem da programação."</p>
                    <DatePicker
                        value=Signal::derive(move || ctx.date())
                        on_change={move |date: Option<String>| ctx.set_date(date)}
                        placeholder=config.date_placeholder.clone()
                    />
                    <ProgramList
                        items=Signal::derive(move || ctx.items())
                        on_change={move |items: Vec<Item>| ctx.set_items(items)}
                    />
                </section>

                <section class="section">
                    <MessagePreview />
                </section>

                <ShareButton />
            </div>
        </div>
    }
}
