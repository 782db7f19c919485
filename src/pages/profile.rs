//! Profile editor page.

use leptos::prelude::*;
use tracing::{debug, error};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::input_field::{EmailField, InputField};
use crate::components::modal::AlertDialog;
use crate::components::photo_picker::PhotoPicker;
use crate::config::PLACEHOLDER_PHOTO;
use crate::profile::{ProfileDraft, ProfileEditor, ProfileField, SubmitRejected};

fn field_value(editor: RwSignal<ProfileEditor>, field: ProfileField) -> Signal<String> {
    Signal::derive(move || editor.with(|e| e.draft().get(field).to_string()))
}

fn field_error(editor: RwSignal<ProfileEditor>, field: ProfileField) -> Signal<String> {
    Signal::derive(move || editor.with(|e| e.errors().get(field).to_string()))
}

fn field_setter(editor: RwSignal<ProfileEditor>, field: ProfileField) -> Callback<String> {
    Callback::new(move |value: String| editor.update(|e| e.set_field(field, value)))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let editor = RwSignal::new(ProfileEditor::new(PLACEHOLDER_PHOTO));

    // Load the profile on mount
    let load_api = api.clone();
    Effect::new(move |_| {
        let Some(ticket) = editor.try_update(|e| e.begin_load()).flatten() else {
            return;
        };
        let api = load_api.clone();
        spawn_local(async move {
            let outcome = api
                .fetch_profile_data()
                .await
                .map(|record| ProfileDraft::from_record(record, api.base(), PLACEHOLDER_PHOTO))
                .map_err(|e| {
                    error!("Error fetching profile data: {}", e);
                    String::from(e)
                });
            editor.try_update(|e| e.finish_load(ticket, outcome));
        });
    });

    on_cleanup(move || {
        editor.try_update(|e| e.abandon());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (ticket, payload) = match editor.try_update(|e| e.begin_submit()) {
            Some(Ok(started)) => started,
            Some(Err(SubmitRejected::Invalid)) => {
                debug!("Profile form has validation errors");
                return;
            }
            Some(Err(SubmitRejected::Busy)) | None => return,
        };

        let api = api.clone();
        spawn_local(async move {
            let outcome = api.update_profile(&payload).await.map_err(|e| {
                error!("Error updating profile: {}", e);
                String::from(e)
            });
            editor.try_update(|e| e.finish_submit(ticket, outcome));
        });
    };

    let on_cancel = move |_| {
        if !editor.try_update(|e| e.cancel()).unwrap_or(false) {
            debug!("No fetched profile to restore");
        }
    };

    let is_submitting = move || editor.with(|e| e.is_submitting());
    let is_dirty = move || editor.with(|e| e.is_dirty());

    view! {
        <div class="page profile-page">
            <style>{include_str!("profile.css")}</style>
            <form class="profile-form" on:submit=on_submit>
                <h2 class="profile-title">"Profil"</h2>
                <hr class="profile-divider" />
                <Show when=move || editor.with(|e| e.load_state().is_in_flight())>
                    <div class="loading-state">
                        <div class="spinner"></div>
                        <span>"Memuat profil..."</span>
                    </div>
                </Show>

                <PhotoPicker
                    photo=field_value(editor, ProfileField::Photo)
                    on_pick=move |data_url: String| editor.update(|e| e.stage_photo(data_url))
                    error=field_error(editor, ProfileField::Photo)
                />

                <div class="profile-grid">
                    <InputField
                        id="nama"
                        label=ProfileField::Name.label()
                        value=field_value(editor, ProfileField::Name)
                        on_input=field_setter(editor, ProfileField::Name)
                        error=field_error(editor, ProfileField::Name)
                    />
                    <EmailField
                        id="email"
                        label=ProfileField::Email.label()
                        value=field_value(editor, ProfileField::Email)
                        on_input=field_setter(editor, ProfileField::Email)
                        error=field_error(editor, ProfileField::Email)
                    />
                    <InputField
                        id="nomorTelepon"
                        label=ProfileField::Phone.label()
                        value=field_value(editor, ProfileField::Phone)
                        on_input=field_setter(editor, ProfileField::Phone)
                        error=field_error(editor, ProfileField::Phone)
                    />
                    <InputField
                        id="tanggalLahir"
                        label=ProfileField::DateOfBirth.label()
                        input_type="date"
                        value=field_value(editor, ProfileField::DateOfBirth)
                        on_input=field_setter(editor, ProfileField::DateOfBirth)
                        error=field_error(editor, ProfileField::DateOfBirth)
                    />
                    <div class="profile-grid-wide">
                        <InputField
                            id="alamat"
                            label=ProfileField::Address.label()
                            value=field_value(editor, ProfileField::Address)
                            on_input=field_setter(editor, ProfileField::Address)
                            error=field_error(editor, ProfileField::Address)
                        />
                    </div>
                </div>

                <div class="profile-actions">
                    <Show when=is_dirty>
                        <span class="unsaved-hint">"Ada perubahan yang belum disimpan"</span>
                    </Show>
                    <button type="button" class="btn btn-secondary" on:click=on_cancel>
                        "Batal"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                        {move || if is_submitting() { "Loading..." } else { "Simpan" }}
                    </button>
                </div>
            </form>

            {move || editor.with(|e| e.alert().cloned()).map(|content| {
                view! {
                    <AlertDialog
                        content=content
                        on_close=move |_| editor.update(|e| e.close_alert())
                    />
                }
            })}
        </div>
    }
}
