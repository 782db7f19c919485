//! Round profile photo with an edit button that opens the file chooser.
//!
//! The picked file is read into a data URL and handed to `on_pick`; nothing is
//! uploaded here.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::paths::encode_data_url;
use crate::error::js_error;

#[component]
pub fn PhotoPicker(
    /// Current photo URL (remote, data URL or placeholder)
    photo: Signal<String>,
    #[prop(into)]
    on_pick: Callback<String>,
    /// Error message; empty means valid
    error: Signal<String>,
) -> impl IntoView {
    let (is_reading, set_is_reading) = signal(false);
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "photoInput";

    let load_file = move |file: web_sys::File| {
        set_is_reading.set(true);
        spawn_local(async move {
            match read_file_as_data_url(file).await {
                Ok(data_url) => on_pick.run(data_url),
                Err(e) => tracing::error!("Failed to read photo: {}", e),
            }
            set_is_reading.set(false);
        });
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_file(file);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            load_file(file);
        }
    };

    view! {
        <div class="photo-picker">
            <div
                class="photo-frame"
                class:photo-frame-over=move || is_over.get()
                class:photo-frame-loading=move || is_reading.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop
            >
                <img src=move || photo.get() alt="Profile" class="photo-image" />
            </div>
            <label for=file_input_id class="photo-edit" title="Ganti foto">"\u{270E}"</label>
            <input
                type="file"
                id=file_input_id
                accept="image/*"
                style="display: none"
                on:change=on_input_change
            />
            <Show when=move || !error.get().is_empty()>
                <div class="field-error">{move || error.get()}</div>
            </Show>
        </div>
    }
}

async fn read_file_as_data_url(file: web_sys::File) -> Result<String, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer".to_string())?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    let mime = file.type_();
    Ok(encode_data_url(if mime.is_empty() { "image/png" } else { mime.as_str() }, &bytes))
}
