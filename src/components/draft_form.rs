//! Draft Form Component
//!
//! Inline editor for the single in-flight item (new or being edited).

use leptos::prelude::*;

use crate::components::program_list::mutate;
use crate::editor::{DraftMode, ListEditor};
use crate::models::Item;

#[component]
pub fn DraftForm(
    editor: RwSignal<ListEditor>,
    on_change: Callback<Vec<Item>>,
) -> impl IntoView {
    let draft_item = move || {
        editor.with(|ed| ed.draft().map(|d| d.item.clone()).unwrap_or_default())
    };

    let title = move || {
        editor.with(|ed| {
            let position = ed.draft_position().map(|p| p + 1).unwrap_or(0);
            match ed.draft().map(|d| d.mode) {
                Some(DraftMode::Insert(_)) => format!("Novo item (posição {})", position),
                Some(DraftMode::Edit(_)) => format!("Editando item {}", position),
                None => String::new(),
            }
        })
    };

    // Both fields empty is the only rejected draft
    let is_blank = move || draft_item().is_blank();

    let save = move || {
        if is_blank() { return; }
        mutate(editor, on_change, |ed| ed.commit_draft());
    };
    let cancel = move || editor.update(|ed| ed.cancel_draft());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                save();
            }
            "Escape" => cancel(),
            _ => {}
        }
    };

    view! {
        <div class="draft-form">
            <div class="draft-title">{title}</div>
            <input
                type="text"
                class="draft-input"
                placeholder="Insira seu título. Ex: Leitura Responsiva"
                prop:value=move || draft_item().label
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|ed| ed.set_draft_label(value));
                }
                on:keydown=on_keydown
            />
            <input
                type="text"
                class="draft-input"
                placeholder="Conteúdo"
                prop:value=move || draft_item().content
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|ed| ed.set_draft_content(value));
                }
                on:keydown=on_keydown
            />
            <div class="draft-actions">
                <button type="button" class="secondary-btn" on:click=move |_| cancel()>
                    "Cancelar"
                </button>
                <button
                    type="button"
                    class="primary-btn"
                    disabled=is_blank
                    on:click=move |_| save()
                >
                    "Salvar"
                </button>
            </div>
        </div>
    }
}
