pub mod filter_panel;
pub mod pagination_controls;

pub use filter_panel::FilterPanel;
pub use pagination_controls::PaginationControls;
