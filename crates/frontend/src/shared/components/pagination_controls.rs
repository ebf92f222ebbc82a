use leptos::prelude::*;

/// PaginationControls component - кнопки "Previous"/"Next" и подпись "Page X of Y"
///
/// Страницы нумеруются с 1. Кнопка отключена на соответствующей границе.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback for the "Previous" button
    on_prev: Callback<()>,

    /// Callback for the "Next" button
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
            >
                "Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
            >
                "Next"
            </button>
        </div>
    }
}
