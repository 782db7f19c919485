//! Profile editor state machine.
//!
//! Holds the editable draft, the snapshot taken at the last successful fetch,
//! the current validation errors and the alert to show. The page drives it
//! from UI events and async completions; nothing here touches the network.

use tracing::{debug, info, warn};

use super::draft::{ProfileDraft, ProfileField};
use super::validation::{validate, ValidationErrors};
use crate::config::{ERROR_IMAGE, SUCCESS_IMAGE};
use crate::request::{Lifecycle, Ticket};

pub const PHOTO_FILE_NAME: &str = "profile-photo.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertContent {
    pub title: String,
    pub message: String,
    pub image: String,
}

impl AlertContent {
    pub fn saved() -> Self {
        Self {
            title: "Profil Diperbarui".to_string(),
            message: "Profil Anda berhasil diperbarui.".to_string(),
            image: SUCCESS_IMAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            title: "Terjadi Kesalahan".to_string(),
            message: "Gagal memperbarui profil. Coba lagi nanti.".to_string(),
            image: ERROR_IMAGE.to_string(),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            title: "Perubahan Dibatalkan".to_string(),
            message: "Semua perubahan telah dibatalkan.".to_string(),
            image: SUCCESS_IMAGE.to_string(),
        }
    }
}

/// What gets sent to the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    /// Present only when the user has a photo other than the placeholder.
    pub photo: Option<String>,
}

impl ProfilePayload {
    fn from_draft(draft: &ProfileDraft, placeholder: &str) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            date_of_birth: draft.date_of_birth.clone(),
            photo: draft.has_new_photo(placeholder).then(|| draft.photo.clone()),
        }
    }

    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            (ProfileField::Name.wire_name(), &self.name),
            (ProfileField::Email.wire_name(), &self.email),
            (ProfileField::Phone.wire_name(), &self.phone),
            (ProfileField::Address.wire_name(), &self.address),
            (ProfileField::DateOfBirth.wire_name(), &self.date_of_birth),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Validation failed; the errors are also stored on the editor.
    Invalid,
    /// A previous submit has not completed yet.
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    placeholder: String,
    draft: ProfileDraft,
    snapshot: Option<ProfileDraft>,
    errors: ValidationErrors,
    alert: Option<AlertContent>,
    load: Lifecycle,
    submit: Lifecycle,
}

impl ProfileEditor {
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            draft: ProfileDraft::blank(placeholder),
            snapshot: None,
            errors: ValidationErrors::default(),
            alert: None,
            load: Lifecycle::new(),
            submit: Lifecycle::new(),
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn snapshot(&self) -> Option<&ProfileDraft> {
        self.snapshot.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn alert(&self) -> Option<&AlertContent> {
        self.alert.as_ref()
    }

    pub fn load_state(&self) -> &Lifecycle {
        &self.load
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_in_flight()
    }

    /// True when the draft differs from the last fetched state.
    pub fn is_dirty(&self) -> bool {
        match &self.snapshot {
            Some(snapshot) => &self.draft != snapshot,
            None => self.draft != ProfileDraft::blank(&self.placeholder),
        }
    }

    pub fn begin_load(&mut self) -> Option<Ticket> {
        self.load.begin()
    }

    /// Apply a fetched profile. The draft and the snapshot both take the value.
    pub fn finish_load(&mut self, ticket: Ticket, outcome: Result<ProfileDraft, String>) -> bool {
        if !self.load.finish(ticket, &outcome) {
            debug!("Ignoring stale profile load");
            return false;
        }
        match outcome {
            Ok(draft) => {
                self.snapshot = Some(draft.clone());
                self.draft = draft;
            }
            Err(e) => warn!("Profile load failed: {}", e),
        }
        true
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        self.draft.set(field, value);
    }

    /// Stage a locally picked photo for preview. It is uploaded on next submit.
    pub fn stage_photo(&mut self, data_url: String) {
        self.draft.photo = data_url;
    }

    /// Validate and, if everything passes, mark a submit as in flight.
    pub fn begin_submit(&mut self) -> Result<(Ticket, ProfilePayload), SubmitRejected> {
        if self.submit.is_in_flight() {
            return Err(SubmitRejected::Busy);
        }

        if let Err(errors) = validate(&self.draft, &self.placeholder) {
            self.errors = errors;
            return Err(SubmitRejected::Invalid);
        }
        self.errors = ValidationErrors::default();

        let ticket = self.submit.begin().ok_or(SubmitRejected::Busy)?;
        Ok((ticket, ProfilePayload::from_draft(&self.draft, &self.placeholder)))
    }

    /// Record the update result and raise the matching alert.
    /// The snapshot is left alone; only a fetch replaces it.
    pub fn finish_submit(&mut self, ticket: Ticket, outcome: Result<(), String>) -> bool {
        if !self.submit.finish(ticket, &outcome) {
            debug!("Ignoring stale profile submit");
            return false;
        }
        match outcome {
            Ok(()) => {
                info!("Profile updated");
                self.alert = Some(AlertContent::saved());
            }
            Err(e) => {
                warn!("Profile update failed: {}", e);
                self.alert = Some(AlertContent::failed());
            }
        }
        true
    }

    /// Restore every field from the snapshot. No-op until a fetch has succeeded.
    /// Validation errors stay until the next submit attempt.
    pub fn cancel(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.clone() else {
            return false;
        };
        self.draft = snapshot;
        self.alert = Some(AlertContent::cancelled());
        true
    }

    pub fn close_alert(&mut self) {
        self.alert = None;
    }

    /// Drop any in-flight work, e.g. when the page unmounts.
    pub fn abandon(&mut self) {
        self.load.cancel();
        self.submit.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::validation::INVALID_DATE_FORMAT;
    use crate::request::RequestState;

    const PLACEHOLDER: &str = "/images/profile.png";

    fn fetched() -> ProfileDraft {
        ProfileDraft {
            name: "Rina".to_string(),
            email: "rina@example.com".to_string(),
            phone: "0811111111".to_string(),
            address: "Jl. Kenanga 3".to_string(),
            date_of_birth: "1995-07-01".to_string(),
            photo: "http://localhost:3000/uploads/rina.png".to_string(),
        }
    }

    fn loaded_editor() -> ProfileEditor {
        let mut editor = ProfileEditor::new(PLACEHOLDER);
        let ticket = editor.begin_load().unwrap();
        assert!(editor.finish_load(ticket, Ok(fetched())));
        editor
    }

    #[test]
    fn test_load_sets_draft_and_snapshot() {
        let editor = loaded_editor();
        assert_eq!(editor.draft(), &fetched());
        assert_eq!(editor.snapshot(), Some(&fetched()));
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_failed_load_keeps_blank_form() {
        let mut editor = ProfileEditor::new(PLACEHOLDER);
        let ticket = editor.begin_load().unwrap();
        editor.finish_load(ticket, Err("offline".to_string()));

        assert_eq!(editor.draft(), &ProfileDraft::blank(PLACEHOLDER));
        assert!(editor.snapshot().is_none());
        assert_eq!(editor.load_state().state(), &RequestState::Failed("offline".to_string()));
    }

    #[test]
    fn test_empty_field_blocks_submit_without_starting_request() {
        let mut editor = loaded_editor();
        editor.set_field(ProfileField::Email, String::new());

        assert_eq!(editor.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(editor.errors().get(ProfileField::Email), "Email tidak boleh kosong");
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_bad_date_blocks_submit() {
        let mut editor = loaded_editor();
        editor.set_field(ProfileField::DateOfBirth, "1/7/1995".to_string());

        assert_eq!(editor.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(editor.errors().get(ProfileField::DateOfBirth), INVALID_DATE_FORMAT);
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_payload_carries_text_fields_and_photo() {
        let mut editor = loaded_editor();
        editor.set_field(ProfileField::Name, "Rina A.".to_string());

        let (_, payload) = editor.begin_submit().unwrap();
        let names: Vec<_> = payload.text_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["name", "email", "phone", "address", "date_of_birth"]);
        assert_eq!(payload.name, "Rina A.");
        assert_eq!(payload.photo.as_deref(), Some("http://localhost:3000/uploads/rina.png"));
        assert!(editor.is_submitting());
    }

    #[test]
    fn test_staged_photo_goes_into_payload() {
        let mut editor = loaded_editor();
        editor.stage_photo("data:image/png;base64,iVBORw0KGgo=".to_string());

        let (_, payload) = editor.begin_submit().unwrap();
        assert_eq!(payload.photo.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut editor = loaded_editor();
        assert!(editor.begin_submit().is_ok());
        assert_eq!(editor.begin_submit(), Err(SubmitRejected::Busy));
    }

    #[test]
    fn test_successful_submit_keeps_fetched_restore_point() {
        let mut editor = loaded_editor();
        editor.set_field(ProfileField::Address, "Jl. Melati 8".to_string());
        let (ticket, _) = editor.begin_submit().unwrap();
        assert!(editor.finish_submit(ticket, Ok(())));
        assert_eq!(editor.alert(), Some(&AlertContent::saved()));
        assert_eq!(editor.snapshot(), Some(&fetched()));

        editor.close_alert();
        editor.set_field(ProfileField::Name, "Rina Edited".to_string());
        assert!(editor.cancel());
        assert_eq!(editor.draft(), &fetched());
    }

    #[test]
    fn test_failed_submit_keeps_edits() {
        let mut editor = loaded_editor();
        editor.set_field(ProfileField::Phone, "0822".to_string());
        let (ticket, _) = editor.begin_submit().unwrap();
        editor.finish_submit(ticket, Err("500".to_string()));

        assert_eq!(editor.alert(), Some(&AlertContent::failed()));
        assert_eq!(editor.draft().phone, "0822");
        assert_eq!(editor.snapshot().map(|s| s.phone.as_str()), Some("0811111111"));
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_cancel_restores_every_field() {
        let mut editor = loaded_editor();
        for field in ProfileField::TEXT {
            editor.set_field(field, "changed".to_string());
        }
        editor.stage_photo("data:image/png;base64,AA==".to_string());
        assert!(editor.is_dirty());

        assert!(editor.cancel());
        assert_eq!(editor.draft(), &fetched());
        assert_eq!(editor.alert(), Some(&AlertContent::cancelled()));

        editor.close_alert();
        assert!(editor.alert().is_none());
    }

    #[test]
    fn test_cancel_keeps_validation_errors() {
        let mut editor = loaded_editor();
        editor.set_field(ProfileField::Name, String::new());
        assert_eq!(editor.begin_submit(), Err(SubmitRejected::Invalid));

        assert!(editor.cancel());
        assert_eq!(editor.draft().name, "Rina");
        assert_eq!(editor.errors().get(ProfileField::Name), "Nama tidak boleh kosong");
    }

    #[test]
    fn test_cancel_without_snapshot_does_nothing() {
        let mut editor = ProfileEditor::new(PLACEHOLDER);
        editor.set_field(ProfileField::Name, "x".to_string());

        assert!(!editor.cancel());
        assert_eq!(editor.draft().name, "x");
        assert!(editor.alert().is_none());
    }

    #[test]
    fn test_abandoned_submit_result_is_ignored() {
        let mut editor = loaded_editor();
        let (ticket, _) = editor.begin_submit().unwrap();
        editor.abandon();

        assert!(!editor.finish_submit(ticket, Ok(())));
        assert!(editor.alert().is_none());
    }
}
