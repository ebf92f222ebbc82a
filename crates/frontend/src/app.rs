use crate::config::load_config;
use crate::domain::a002_list_item::source::MockItemSource;
use crate::domain::a002_list_item::ui::list::state::start_load;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::cancel::CancellationToken;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Provide the AppGlobalContext store to the whole app via context.
    let tabs_store = AppGlobalContext::new(&config);
    provide_context(tabs_store);

    // One-shot list load, tied to the lifetime of the app root
    let load_token = CancellationToken::new();
    let token_for_cleanup = load_token.clone();
    on_cleanup(move || {
        log!("App unmounted, cancelling pending list load");
        token_for_cleanup.cancel();
    });
    start_load(
        tabs_store.list_items,
        MockItemSource::new(config.loader.fetch_delay_ms, config.loader.failure_rate),
        load_token,
    );

    view! {
        <Shell />
    }
}
