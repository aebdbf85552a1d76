//! List state shared by every table view: search, toggles, pagination and
//! the page window shown under the table

use contracts::domain::common::{Activatable, Entity, EntityId};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::AppConfig;

/// Maximum number of numbered slots in the page window
pub const MAX_VISIBLE_PAGES: usize = 5;

const SEARCH_DEBOUNCE_MS: u32 = 300;

// ============================================================================
// Filtering
// ============================================================================

/// Types that can be matched against the search box
pub trait Searchable {
    /// Case-insensitive substring test; an empty term matches everything
    fn matches_search(&self, term: &str) -> bool;
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Resource-specific filter applied together with the search term
pub trait ListToggle<T>: Clone + PartialEq + Default {
    fn accepts(&self, item: &T) -> bool;
}

impl<T> ListToggle<T> for () {
    fn accepts(&self, _item: &T) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub const ALL: [ActiveFilter; 3] = [ActiveFilter::All, ActiveFilter::Active, ActiveFilter::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Active => "active",
            ActiveFilter::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::All => "All",
            ActiveFilter::Active => "Active",
            ActiveFilter::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "active" => ActiveFilter::Active,
            "inactive" => ActiveFilter::Inactive,
            _ => ActiveFilter::All,
        }
    }
}

impl<T: Activatable> ListToggle<T> for ActiveFilter {
    fn accepts(&self, item: &T) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Active => item.is_active(),
            ActiveFilter::Inactive => !item.is_active(),
        }
    }
}

// ============================================================================
// Page window
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Page numbers shown in the pagination bar.
///
/// Up to five pages are listed as is. Otherwise the first and last pages are
/// always present, and an ellipsis fills every gap between shown numbers.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageSlot> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let shown: Vec<usize> = if current_page <= 3 {
        vec![1, 2, 3, 4, total_pages]
    } else if current_page >= total_pages - 2 {
        let mut pages = vec![1];
        pages.extend(total_pages - 3..=total_pages);
        pages
    } else {
        vec![1, current_page - 1, current_page, current_page + 1, total_pages]
    };

    let mut slots = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<usize> = None;
    for page in shown {
        if let Some(prev) = previous {
            if page > prev + 1 {
                slots.push(PageSlot::Ellipsis);
            }
        }
        slots.push(PageSlot::Page(page));
        previous = Some(page);
    }
    slots
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

// ============================================================================
// Controller
// ============================================================================

/// Everything a table needs to render one page
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a, T> {
    pub filtered: Vec<&'a T>,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_items: Vec<&'a T>,
    pub window: Vec<PageSlot>,
    /// 1-based position of the first row on the page, 0 when empty
    pub first_item: usize,
    pub last_item: usize,
}

/// Owned copy of the visible page, cheap to compare in a memo
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub window: Vec<PageSlot>,
    pub first_item: usize,
    pub last_item: usize,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filtered_count: 0,
            total_pages: 0,
            current_page: 1,
            window: Vec::new(),
            first_item: 0,
            last_item: 0,
        }
    }
}

impl<'a, T: Clone> DerivedView<'a, T> {
    pub fn to_page(&self) -> ListPage<T> {
        ListPage {
            rows: self.page_items.iter().map(|item| (*item).clone()).collect(),
            filtered_count: self.filtered.len(),
            total_pages: self.total_pages,
            current_page: self.current_page,
            window: self.window.clone(),
            first_item: self.first_item,
            last_item: self.last_item,
        }
    }
}

/// Search term, page and toggle of one list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<F> {
    search_term: String,
    current_page: usize,
    page_size: usize,
    toggle: F,
}

impl<F: Default> ListController<F> {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            toggle: F::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.page_size())
    }
}

impl<F: Clone + PartialEq> ListController<F> {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn toggle(&self) -> &F {
        &self.toggle
    }

    /// Changing the filter always starts from the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_toggle(&mut self, toggle: F) {
        self.toggle = toggle;
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to(self.current_page + 1, total_pages);
    }

    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn filtered<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable,
        F: ListToggle<T>,
    {
        items
            .iter()
            .filter(|item| item.matches_search(&self.search_term) && self.toggle.accepts(item))
            .collect()
    }

    fn clamped_page(&self, total_pages: usize) -> usize {
        self.current_page.clamp(1, total_pages.max(1))
    }

    /// Pulls the page back in range after the collection changed
    pub fn resync<T>(&mut self, items: &[T])
    where
        T: Searchable,
        F: ListToggle<T>,
    {
        let total = total_pages(self.filtered(items).len(), self.page_size);
        self.current_page = self.clamped_page(total);
    }

    /// Page holding the item with `id` under the current filter
    pub fn page_of<T>(&self, items: &[T], id: EntityId) -> Option<usize>
    where
        T: Searchable + Entity,
        F: ListToggle<T>,
    {
        self.filtered(items)
            .iter()
            .position(|item| item.id() == id)
            .map(|index| index / self.page_size + 1)
    }

    /// Moves to the page holding `id`; false when the filter hides it
    pub fn reveal<T>(&mut self, items: &[T], id: EntityId) -> bool
    where
        T: Searchable + Entity,
        F: ListToggle<T>,
    {
        match self.page_of(items, id) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    pub fn derive<'a, T>(&self, items: &'a [T]) -> DerivedView<'a, T>
    where
        T: Searchable,
        F: ListToggle<T>,
    {
        let filtered = self.filtered(items);
        let total_pages = total_pages(filtered.len(), self.page_size);
        let current_page = self.clamped_page(total_pages);

        let start = ((current_page - 1) * self.page_size).min(filtered.len());
        let end = (start + self.page_size).min(filtered.len());
        let page_items = filtered[start..end].to_vec();

        let (first_item, last_item) = if page_items.is_empty() {
            (0, 0)
        } else {
            (start + 1, end)
        };

        DerivedView {
            window: page_window(total_pages, current_page),
            filtered,
            total_pages,
            current_page,
            page_items,
            first_item,
            last_item,
        }
    }
}

// ============================================================================
// UI helpers
// ============================================================================

/// Byte ranges of `text` whose lowercase form equals the lowercase `term`.
///
/// Lowercasing may change the byte length of single characters, so offsets
/// found in the lowercase copy are mapped back through the character
/// boundaries of the original. Matches that start or end inside the
/// lowercase expansion of one character are skipped.
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return Vec::new();
    }

    // (offset in lowercase copy, offset in original) at every char boundary
    let mut lower = String::with_capacity(text.len());
    let mut boundaries: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        boundaries.push((lower.len(), offset));
        lower.extend(ch.to_lowercase());
    }
    boundaries.push((lower.len(), text.len()));

    let original_at = |lower_offset: usize| {
        boundaries
            .binary_search_by_key(&lower_offset, |&(l, _)| l)
            .ok()
            .map(|i| boundaries[i].1)
    };

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&term_lower) {
        let match_start = from + pos;
        let match_end = match_start + term_lower.len();
        match (original_at(match_start), original_at(match_end)) {
            (Some(start), Some(end)) => {
                ranges.push((start, end));
                from = match_end;
            }
            _ => {
                from = match_start + lower[match_start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Wraps case-insensitive matches of `term` in a highlight span
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let ranges = match_ranges(text, term);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Replacing the stored timeout drops, and so cancels, the previous one
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                class="search-input__field"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Row {
        id: EntityId,
        name: String,
        active: bool,
    }

    impl Entity for Row {
        const RESOURCE: &'static str = "row";
        const LABEL: &'static str = "row";

        fn id(&self) -> EntityId {
            self.id
        }

        fn display_name(&self) -> &str {
            &self.name
        }
    }

    impl Searchable for Row {
        fn matches_search(&self, term: &str) -> bool {
            contains_ignore_case(&self.name, term)
        }
    }

    impl Activatable for Row {
        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn rows(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|i| Row {
                id: i as EntityId,
                name: format!("Item {}", i),
                active: i % 2 == 1,
            })
            .collect()
    }

    fn ids(view: &[&Row]) -> Vec<EntityId> {
        view.iter().map(|r| r.id).collect()
    }

    use PageSlot::{Ellipsis, Page};

    #[test]
    fn test_window_small_totals_have_no_ellipsis() {
        for total in 0..=5 {
            for current in 1..=total.max(1) {
                let expected: Vec<PageSlot> = (1..=total).map(Page).collect();
                assert_eq!(page_window(total, current), expected);
            }
        }
    }

    #[test]
    fn test_window_ten_pages() {
        assert_eq!(
            page_window(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_boundaries() {
        // Near the end without a gap on the right
        assert_eq!(
            page_window(6, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            page_window(6, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        assert_eq!(
            page_window(7, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(7)]
        );
    }

    #[test]
    fn test_window_shape_invariants() {
        for total in 6..=30 {
            for current in 1..=total {
                let window = page_window(total, current);
                assert_eq!(window.first(), Some(&Page(1)));
                assert_eq!(window.last(), Some(&Page(total)));
                assert!(window.contains(&Page(current)));
                assert_eq!(window.iter().filter(|s| matches!(s, Page(_))).count(), MAX_VISIBLE_PAGES);
                assert!(window.windows(2).all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)));
            }
        }
    }

    #[test]
    fn test_pages_concatenate_to_filtered() {
        let page_size = 4;
        for len in [0, 1, page_size - 1, page_size, page_size + 1, 5 * page_size] {
            let items = rows(len);
            let mut controller: ListController<()> = ListController::new(page_size);
            let total = controller.derive(&items).total_pages;

            let mut collected = Vec::new();
            for page in 1..=total {
                controller.go_to(page, total);
                let view = controller.derive(&items);
                if page < total {
                    assert_eq!(view.page_items.len(), page_size);
                }
                assert!(view.page_items.len() <= page_size);
                collected.extend(ids(&view.page_items));
            }
            assert_eq!(collected, ids(&controller.derive(&items).filtered));
            assert_eq!(collected.len(), len);
        }
    }

    #[test]
    fn test_filter_is_stable_subsequence() {
        let items = rows(12);
        let mut controller: ListController<ActiveFilter> = ListController::new(5);
        controller.set_toggle(ActiveFilter::Inactive);
        let view = controller.derive(&items);
        assert_eq!(ids(&view.filtered), vec![2, 4, 6, 8, 10, 12]);

        controller.set_search("item 1");
        let view = controller.derive(&items);
        assert_eq!(ids(&view.filtered), vec![10, 12]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_empty_matches_all() {
        let items = rows(3);
        let mut controller: ListController<()> = ListController::new(6);
        controller.set_search("ITEM 2");
        assert_eq!(ids(&controller.derive(&items).filtered), vec![2]);
        controller.set_search("   ");
        assert_eq!(controller.derive(&items).filtered.len(), 3);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let items = rows(13);
        let mut controller: ListController<ActiveFilter> = ListController::new(6);
        controller.go_to(2, 3);
        assert_eq!(controller.derive(&items), controller.derive(&items));
    }

    #[test]
    fn test_thirteen_items_then_narrow_filter() {
        let items = rows(13);
        let mut controller: ListController<()> = ListController::new(6);

        let view = controller.derive(&items);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page_items.len(), 6);

        controller.go_to(3, view.total_pages);
        let view = controller.derive(&items);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.page_items.len(), 1);
        assert_eq!((view.first_item, view.last_item), (13, 13));

        // "3" matches Item 3 and Item 13 only
        controller.set_search("3");
        let view = controller.derive(&items);
        assert_eq!(ids(&view.filtered), vec![3, 13]);
        assert_eq!(view.current_page, 1);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_data_shrink_clamps_to_last_valid_page() {
        let mut items = rows(13);
        let mut controller: ListController<()> = ListController::new(6);
        controller.go_to(3, 3);

        items.pop();
        controller.resync(&items);
        assert_eq!(controller.current_page(), 2);

        items.clear();
        controller.resync(&items);
        assert_eq!(controller.current_page(), 1);
        let view = controller.derive(&items);
        assert_eq!(view.total_pages, 0);
        assert!(view.window.is_empty());
        assert_eq!((view.first_item, view.last_item), (0, 0));
    }

    #[test]
    fn test_derive_clamps_stale_page() {
        let items = rows(7);
        let mut controller: ListController<()> = ListController::new(6);
        controller.go_to(2, 2);
        let shrunk = rows(3);
        assert_eq!(controller.derive(&shrunk).current_page, 1);
        assert_eq!(controller.derive(&items).current_page, 2);
    }

    #[test]
    fn test_to_page_copies_visible_rows() {
        let items = rows(8);
        let mut controller: ListController<()> = ListController::new(6);
        controller.go_to(2, 2);
        let page = controller.derive(&items).to_page();
        assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7, 8]);
        assert_eq!(page.filtered_count, 8);
        assert_eq!((page.first_item, page.last_item), (7, 8));
        assert_eq!(page.window, vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut controller: ListController<()> = ListController::new(6);
        controller.prev();
        assert_eq!(controller.current_page(), 1);
        controller.next(2);
        controller.next(2);
        assert_eq!(controller.current_page(), 2);
        controller.go_to(99, 4);
        assert_eq!(controller.current_page(), 4);
        controller.go_to(0, 4);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_reveal_moves_to_item_page() {
        let items = rows(13);
        let mut controller: ListController<ActiveFilter> = ListController::new(6);
        assert_eq!(controller.page_of(&items, 13), Some(3));
        assert!(controller.reveal(&items, 13));
        assert_eq!(controller.current_page(), 3);
        assert!(controller.derive(&items).page_items.iter().any(|r| r.id == 13));

        controller.set_toggle(ActiveFilter::Active);
        assert!(!controller.reveal(&items, 2));
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_restarts_at_first_page() {
        let items = rows(13);
        let mut controller: ListController<()> = ListController::new(6);
        controller.go_to(3, 3);
        controller.set_page_size(5);
        assert_eq!(controller.current_page(), 1);
        let view = controller.derive(&items);
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view.page_items), vec![1, 2, 3, 4, 5]);

        controller.set_page_size(0);
        assert_eq!(controller.page_size(), 1);
    }

    #[test]
    fn test_from_config_uses_configured_page_size() {
        let controller: ListController<()> = ListController::from_config(&AppConfig::default());
        assert_eq!(controller.page_size(), 6);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_match_ranges_ascii() {
        assert_eq!(match_ranges("Ana María", "  MAR "), vec![(4, 7)]);
        assert_eq!(match_ranges("ANA ana", "ana"), vec![(0, 3), (4, 7)]);
        assert!(match_ranges("Lucas", "").is_empty());
        assert!(match_ranges("Lucas", "x").is_empty());
    }

    #[test]
    fn test_match_ranges_with_length_changing_lowercase() {
        // 'İ' grows by one byte when lowercased, KELVIN SIGN shrinks by two
        let text = "\u{130}\u{130}\u{212A}a";
        let ranges = match_ranges(text, "k");
        assert_eq!(ranges, vec![(4, 7)]);
        assert_eq!(&text[4..7], "\u{212A}");

        // A term ending inside the expansion of 'İ' never splits the character
        assert!(match_ranges(text, "i").is_empty());
        for (start, end) in match_ranges("\u{130}stanbul", "\u{130}st") {
            assert!("\u{130}stanbul".is_char_boundary(start));
            assert!("\u{130}stanbul".is_char_boundary(end));
        }
    }
}
