pub mod source;
pub mod ui;
