use super::tab_labels::DemoTab;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: DemoTab) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_active = Memo::new(move |_| tabs_store.is_active(tab));
    let on_click = move |_| tabs_store.activate_tab(tab);

    view! {
        <button class="tab" class:active=is_active on:click=on_click data-tab-key=tab.key()>
            {tab.label()}
        </button>
    }
}

/// Панель переключения табов
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <div class="tabs__bar">
            {DemoTab::all()
                .into_iter()
                .map(|tab| view! { <Tab tab=tab /> })
                .collect_view()}
        </div>
    }
}
