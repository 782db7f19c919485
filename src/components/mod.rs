pub mod card_slider;
pub mod input_field;
pub mod modal;
pub mod navbar;
pub mod photo_picker;
pub mod product_card;
pub mod search_bar;
