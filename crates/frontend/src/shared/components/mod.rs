pub mod image_dialog;
pub mod pagination_controls;
