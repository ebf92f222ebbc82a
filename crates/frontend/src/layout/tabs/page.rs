//! TabPage component - область контента активного таба
//!
//! Рендерится только активный таб; остальные не монтируются, но их
//! состояние хранится в `AppGlobalContext`.

use super::registry::render_tab_content;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tabs_store: AppGlobalContext) -> impl IntoView {
    view! {
        <div class="tabs__item">
            {move || {
                let tab = tabs_store.active.get();
                log!("TabPage rendering: '{}'", tab.key());
                render_tab_content(tab, tabs_store)
            }}
        </div>
    }
}
