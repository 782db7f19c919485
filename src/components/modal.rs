//! Overlay dialogs.

use leptos::prelude::*;

use crate::profile::AlertContent;

/// Plain confirmation dialog with a title and an OK button.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <style>{include_str!("modal.css")}</style>
            <div class="modal-dialog">
                <h2 class="modal-title">{title}</h2>
                <div class="modal-actions">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                        "Oke"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Outcome dialog with an illustration, title and message.
#[component]
pub fn AlertDialog(
    content: AlertContent,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <style>{include_str!("modal.css")}</style>
            <div class="modal-dialog">
                <img src=content.image class="modal-image" alt="Alert Image" />
                <h2 class="modal-title">{content.title}</h2>
                <p class="modal-message">{content.message}</p>
                <div class="modal-actions">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                        "Oke"
                    </button>
                </div>
            </div>
        </div>
    }
}
