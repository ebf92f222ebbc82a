use leptos::prelude::*;

/// FilterPanel component - строка над таблицей со счётчиком активных фильтров
///
/// Кнопка очистки видна только когда есть хотя бы один активный фильтр.
#[component]
pub fn FilterPanel(
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback when "Clear filters" is clicked
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-panel-header">
            <div class="filter-panel-header__left">
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <span class="badge badge--primary">{count}</span>
                            <button
                                class="filter-panel__clear"
                                on:click=move |_| on_clear.run(())
                            >
                                "Clear filters"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
