//! Tab content registry - маппинг DemoTab → View
//!
//! Все табы собраны здесь в одном месте.

use super::tab_labels::DemoTab;
use crate::domain::a001_user_record::ui::list::UserRecordList;
use crate::domain::a002_list_item::ui::list::ListItemList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Возвращает контент таба.
///
/// Состояние таблицы и списка берётся из `AppGlobalContext`, поэтому
/// повторное создание контента при возврате на таб ничего не теряет.
pub fn render_tab_content(tab: DemoTab, tabs_store: AppGlobalContext) -> AnyView {
    match tab {
        DemoTab::Home => view! { <div class="home">"Home Content"</div> }.into_any(),
        DemoTab::Table => view! { <UserRecordList state=tabs_store.user_table /> }.into_any(),
        DemoTab::LargeComponent => {
            view! { <ListItemList state=tabs_store.list_items /> }.into_any()
        }
    }
}
