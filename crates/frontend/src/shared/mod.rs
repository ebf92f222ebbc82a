pub mod cancel;
pub mod components;
pub mod list_utils;
