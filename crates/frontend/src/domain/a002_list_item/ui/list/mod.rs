pub mod state;

use self::state::ListItemState;
use crate::shared::list_utils::highlight_matches;
use leptos::prelude::*;
use thaw::*;

/// Список, загружаемый асинхронно, с фильтром по имени.
///
/// Ошибка загрузки показывается вместо списка: поле фильтра и список
/// появляются только после успешной загрузки.
#[component]
pub fn ListItemList(state: RwSignal<ListItemState>) -> impl IntoView {
    let name_filter = RwSignal::new(state.with_untracked(|s| s.name_filter.clone()));
    Effect::new(move || {
        let v = name_filter.get();
        untrack(move || {
            state.update(|s| s.set_name_filter(&v));
        });
    });

    // Ветка рендера зависит только от стадии загрузки, а не от текста фильтра
    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let filtered = Memo::new(move |_| state.with(|s| s.filtered_items()));

    view! {
        <div class="item-list">
            <h1 class="page__title">"Table"</h1>
            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }
                    .into_any()
                } else if let Some(message) = error.get() {
                    view! { <div class="alert alert--error">{message}</div> }.into_any()
                } else {
                    view! {
                        <div class="item-list__filter">
                            <Input value=name_filter placeholder="Filter by name" />
                        </div>
                        <ul class="item-list__items">
                            <For
                                each=move || filtered.get()
                                key=|item| item.id
                                children=move |item| {
                                    let name = item.name.clone();
                                    view! {
                                        <li class="item-list__item">
                                            <h2 class="item-list__name">
                                                {move || highlight_matches(&name, &name_filter.get())}
                                            </h2>
                                            <p>{item.description}</p>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
