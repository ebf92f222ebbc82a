//! Tab management module
//!
//! Содержит:
//! - `tab` - кнопки переключения табов
//! - `page` - компонент TabPage для контента активного таба
//! - `registry` - маппинг DemoTab → View (единственный источник правды)
//! - `tab_labels` - ключи и заголовки табов

pub mod page;
pub mod registry;
pub mod tab;
pub mod tab_labels;

pub use page::TabPage;
pub use tab::TabBar;
pub use tab_labels::DemoTab;
