use serde::{Deserialize, Serialize};

pub type WasteTypeId = i64;

/// A redeemable item in the Pick & Pack catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub waste_name: String,
    pub point: i64,
    #[serde(default)]
    pub image: String,
    pub waste_type_id: WasteTypeId,
}

/// One entry of the category carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct WasteCategory {
    pub waste_type_id: WasteTypeId,
    pub name: &'static str,
    pub image: &'static str,
}

/// Profile as returned by the server. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub photo: Option<String>,
}

/// Responses arrive either bare or wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}
