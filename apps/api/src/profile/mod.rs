pub mod editor;
pub mod handlers;
