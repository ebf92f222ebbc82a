use crate::config::DemoConfig;
use crate::domain::a001_user_record::ui::list::state::{self as user_state, UserTableState};
use crate::domain::a002_list_item::ui::list::state::{self as item_state, ListItemState};
use crate::layout::tabs::tab_labels::DemoTab;
use contracts::domain::a001_user_record::MOCK_RECORDS;
use leptos::prelude::*;

/// Состояние всей страницы. Создаётся один раз в корне и живёт, пока
/// смонтировано приложение: переключение табов его не сбрасывает.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<DemoTab>,
    pub user_table: RwSignal<UserTableState>,
    pub list_items: RwSignal<ListItemState>,
}

impl AppGlobalContext {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            active: RwSignal::new(DemoTab::default()),
            user_table: user_state::create_state(MOCK_RECORDS.clone(), config.table.rows_per_page),
            list_items: item_state::create_state(),
        }
    }

    pub fn activate_tab(&self, tab: DemoTab) {
        leptos::logging::log!("activate_tab: key='{}'", tab.key());
        self.active.set(tab);
    }

    /// Reactive check, for use inside views
    pub fn is_active(&self, tab: DemoTab) -> bool {
        self.active.get() == tab
    }
}
