use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a page with the primary actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{move || title.get()}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// Inline notice shown while a list displays mock data
#[component]
pub fn FallbackBanner(
    /// Reason the API could not be used; hidden when `None`
    #[prop(into)]
    reason: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        reason.get().map(|reason| view! {
            <div class="banner banner--warning" role="alert">
                {icon("alert-triangle")}
                <span>"The API is unavailable, showing sample data. "</span>
                <span class="banner__detail">{reason}</span>
            </div>
        })
    }
}
