pub mod global_context;
pub mod tabs;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use tabs::{TabBar, TabPage};

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  [Home]  [Table]  [Large Component]      |
/// +------------------------------------------+
/// |          content of the active tab       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <div class="app-card">
                <TabBar />
                <div class="app-main">
                    <TabPage tabs_store=tabs_store />
                </div>
            </div>
        </div>
    }
}
