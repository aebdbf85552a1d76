use crate::shared::icons::icon;
use crate::shared::list_utils::PageSlot;
use leptos::prelude::*;

/// Previous / numbered window / next buttons under a table
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Numbered slots with ellipses, see `page_window`
    #[prop(into)]
    window: Signal<Vec<PageSlot>>,

    /// "Showing X to Y of Z"
    #[prop(into)]
    range: Signal<(usize, usize, usize)>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <div class="pagination-controls">
                <span class="pagination-info">
                    {move || {
                        let (first, last, total) = range.get();
                        format!("Showing {} to {} of {}", first, last, total)
                    }}
                </span>
                <div class="pagination-buttons">
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                        disabled=move || current_page.get() <= 1
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    <For
                        each=move || window.get().into_iter().enumerate()
                        key=|(index, slot)| (*index, *slot)
                        children=move |(_, slot)| match slot {
                            PageSlot::Page(page) => view! {
                                <button
                                    class="pagination-btn pagination-btn--page"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }.into_any(),
                            PageSlot::Ellipsis => view! {
                                <span class="pagination-ellipsis">"..."</span>
                            }.into_any(),
                        }
                    />
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run((current_page.get() + 1).min(total_pages.get()))
                        disabled=move || current_page.get() >= total_pages.get()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
