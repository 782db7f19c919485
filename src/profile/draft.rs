use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use url::Url;

use crate::api::paths::resolve_asset_url;
use crate::models::ProfileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    DateOfBirth,
    Address,
    Photo,
}

impl ProfileField {
    /// The text fields, in form order.
    pub const TEXT: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::DateOfBirth,
        ProfileField::Address,
    ];

    /// Multipart field name expected by the server.
    pub fn wire_name(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::DateOfBirth => "date_of_birth",
            ProfileField::Address => "address",
            ProfileField::Photo => "photo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Nama",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Nomor Telepon",
            ProfileField::DateOfBirth => "Tanggal Lahir",
            ProfileField::Address => "Alamat",
            ProfileField::Photo => "Foto Profil",
        }
    }
}

/// Locally editable copy of the user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub photo: String,
}

impl ProfileDraft {
    /// Empty fields with the placeholder photo.
    pub fn blank(placeholder: &str) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            date_of_birth: String::new(),
            photo: placeholder.to_string(),
        }
    }

    pub fn from_record(record: ProfileRecord, api_base: &Url, placeholder: &str) -> Self {
        let photo = record
            .photo
            .as_deref()
            .and_then(|p| resolve_asset_url(api_base, p))
            .unwrap_or_else(|| placeholder.to_string());

        Self {
            name: record.name.unwrap_or_default(),
            email: record.email.unwrap_or_default(),
            phone: record.phone.unwrap_or_default(),
            address: record.address.unwrap_or_default(),
            date_of_birth: record
                .date_of_birth
                .as_deref()
                .map(normalize_date)
                .unwrap_or_default(),
            photo,
        }
    }

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

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::Address => &mut self.address,
            ProfileField::Photo => &mut self.photo,
        };
        *slot = value;
    }

    pub fn has_new_photo(&self, placeholder: &str) -> bool {
        !self.photo.is_empty() && self.photo != placeholder
    }
}

/// Reduce an ISO date or datetime to `YYYY-MM-DD` in the browser's time zone;
/// unparseable input becomes empty.
pub fn normalize_date(raw: &str) -> String {
    normalize_date_in(raw, &Local)
}

/// Offset-bearing timestamps are shifted into `tz` before the calendar date is
/// taken. Naive values are kept as written.
pub fn normalize_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(tz).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const PLACEHOLDER: &str = "/images/profile.png";

    fn base() -> Url {
        Url::parse("http://localhost:3000").unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_normalize_date_variants() {
        assert_eq!(normalize_date("1998-04-12"), "1998-04-12");
        assert_eq!(normalize_date_in("1998-04-12T00:00:00.000Z", &utc()), "1998-04-12");
        assert_eq!(normalize_date("1998-04-12T08:30:00"), "1998-04-12");
        assert_eq!(normalize_date("12/04/1998"), "");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_utc_timestamp_takes_local_calendar_day() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(normalize_date_in("1998-04-11T17:00:00.000Z", &jakarta), "1998-04-12");
        assert_eq!(normalize_date_in("1998-04-11T17:00:00.000Z", &utc()), "1998-04-11");

        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();
        assert_eq!(normalize_date_in("1998-04-12T05:00:00+00:00", &honolulu), "1998-04-11");
    }

    #[test]
    fn test_naive_values_ignore_time_zone() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(normalize_date_in("1998-04-11T23:30:00", &jakarta), "1998-04-11");
        assert_eq!(normalize_date_in("1998-04-11", &jakarta), "1998-04-11");
    }

    #[test]
    fn test_from_record_fills_missing_with_empty() {
        let record = ProfileRecord {
            name: Some("Budi".to_string()),
            date_of_birth: Some("2001-09-30".to_string()),
            photo: Some("uploads\\budi.png".to_string()),
            ..Default::default()
        };
        let draft = ProfileDraft::from_record(record, &base(), PLACEHOLDER);

        assert_eq!(draft.name, "Budi");
        assert_eq!(draft.email, "");
        assert_eq!(draft.date_of_birth, "2001-09-30");
        assert_eq!(draft.photo, "http://localhost:3000/uploads/budi.png");
    }

    #[test]
    fn test_from_record_without_photo_uses_placeholder() {
        let draft = ProfileDraft::from_record(ProfileRecord::default(), &base(), PLACEHOLDER);
        assert_eq!(draft, ProfileDraft::blank(PLACEHOLDER));
        assert!(!draft.has_new_photo(PLACEHOLDER));
    }

    #[test]
    fn test_get_set_by_field() {
        let mut draft = ProfileDraft::blank(PLACEHOLDER);
        draft.set(ProfileField::Phone, "08123".to_string());
        draft.set(ProfileField::Photo, "data:image/png;base64,AA==".to_string());

        assert_eq!(draft.get(ProfileField::Phone), "08123");
        assert!(draft.has_new_photo(PLACEHOLDER));
    }
}
