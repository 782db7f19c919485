pub mod category;
pub mod profile;
