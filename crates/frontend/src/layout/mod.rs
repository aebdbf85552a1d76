pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_global_context;
use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::toast::ToastHost;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>

            <ToastHost toast=ctx.toast duration_ms=ctx.toast_duration_ms() />
        </div>
    }
}
