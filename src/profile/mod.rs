pub mod draft;
pub mod editor;
pub mod validation;

pub use draft::{ProfileDraft, ProfileField};
pub use editor::{AlertContent, ProfileEditor, ProfilePayload, SubmitRejected, PHOTO_FILE_NAME};
