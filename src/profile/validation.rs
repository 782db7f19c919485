use super::draft::{ProfileDraft, ProfileField};

pub const INVALID_DATE_FORMAT: &str = "Format tanggal lahir tidak valid. Gunakan format YYYY-MM-DD.";

/// One message per field; an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    name: String,
    email: String,
    phone: String,
    date_of_birth: String,
    address: String,
    photo: String,
}

impl ValidationErrors {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::Address => &self.address,
            ProfileField::Photo => &self.photo,
        }
    }

    fn set(&mut self, field: ProfileField, message: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::Address => &mut self.address,
            ProfileField::Photo => &mut self.photo,
        };
        *slot = message.into();
    }

    pub fn is_clear(&self) -> bool {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.date_of_birth,
            &self.address,
            &self.photo,
        ]
        .iter()
        .all(|m| m.is_empty())
    }
}

fn required_message(field: ProfileField) -> String {
    match field {
        ProfileField::Photo => "Foto profil tidak boleh kosong".to_string(),
        other => format!("{} tidak boleh kosong", other.label()),
    }
}

/// Check every field at once. Required-field errors are reported together;
/// the date format is only checked once all of them pass.
pub fn validate(draft: &ProfileDraft, placeholder: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in ProfileField::TEXT {
        if draft.get(field).is_empty() {
            errors.set(field, required_message(field));
        }
    }
    if !draft.has_new_photo(placeholder) {
        errors.set(ProfileField::Photo, required_message(ProfileField::Photo));
    }

    if !errors.is_clear() {
        return Err(errors);
    }

    if !is_iso_date(&draft.date_of_birth) {
        errors.set(ProfileField::DateOfBirth, INVALID_DATE_FORMAT);
        return Err(errors);
    }

    Ok(())
}

/// Shape check for `YYYY-MM-DD`; calendar validity is the server's concern.
pub fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "/images/profile.png";

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Sari Wulandari".to_string(),
            email: "sari@example.com".to_string(),
            phone: "081234567890".to_string(),
            address: "Jl. Merdeka 10, Bandung".to_string(),
            date_of_birth: "1999-02-14".to_string(),
            photo: "http://localhost:3000/uploads/sari.png".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(validate(&valid_draft(), PLACEHOLDER), Ok(()));
    }

    #[test]
    fn test_all_empty_fields_reported_together() {
        let errors = validate(&ProfileDraft::blank(PLACEHOLDER), PLACEHOLDER).unwrap_err();

        assert_eq!(errors.get(ProfileField::Name), "Nama tidak boleh kosong");
        assert_eq!(errors.get(ProfileField::Email), "Email tidak boleh kosong");
        assert_eq!(errors.get(ProfileField::Phone), "Nomor Telepon tidak boleh kosong");
        assert_eq!(errors.get(ProfileField::DateOfBirth), "Tanggal Lahir tidak boleh kosong");
        assert_eq!(errors.get(ProfileField::Address), "Alamat tidak boleh kosong");
        assert_eq!(errors.get(ProfileField::Photo), "Foto profil tidak boleh kosong");
    }

    #[test]
    fn test_single_empty_field_only_flags_that_field() {
        let mut draft = valid_draft();
        draft.address.clear();
        let errors = validate(&draft, PLACEHOLDER).unwrap_err();

        assert_eq!(errors.get(ProfileField::Address), "Alamat tidak boleh kosong");
        for field in [ProfileField::Name, ProfileField::Email, ProfileField::Phone, ProfileField::Photo] {
            assert_eq!(errors.get(field), "", "{:?} should be clear", field);
        }
    }

    #[test]
    fn test_placeholder_photo_is_missing_photo() {
        let mut draft = valid_draft();
        draft.photo = PLACEHOLDER.to_string();
        let errors = validate(&draft, PLACEHOLDER).unwrap_err();
        assert_eq!(errors.get(ProfileField::Photo), "Foto profil tidak boleh kosong");
    }

    #[test]
    fn test_bad_date_format_blocks_otherwise_valid_draft() {
        let mut draft = valid_draft();
        draft.date_of_birth = "14-02-1999".to_string();
        let errors = validate(&draft, PLACEHOLDER).unwrap_err();

        assert_eq!(errors.get(ProfileField::DateOfBirth), INVALID_DATE_FORMAT);
        assert_eq!(errors.get(ProfileField::Name), "");
    }

    #[test]
    fn test_date_format_not_checked_while_required_fields_missing() {
        let mut draft = valid_draft();
        draft.name.clear();
        draft.date_of_birth = "yesterday".to_string();
        let errors = validate(&draft, PLACEHOLDER).unwrap_err();

        assert_eq!(errors.get(ProfileField::DateOfBirth), "");
        assert_eq!(errors.get(ProfileField::Name), "Nama tidak boleh kosong");
    }

    #[test]
    fn test_iso_date_shape() {
        assert!(is_iso_date("2024-01-31"));
        assert!(is_iso_date("2024-13-99"));
        assert!(!is_iso_date("2024-1-31"));
        assert!(!is_iso_date("2024/01/31"));
        assert!(!is_iso_date("2024-01-31T00:00"));
        assert!(!is_iso_date("２０２４-01-31"));
    }
}
