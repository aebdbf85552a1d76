use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// (path, title, icon)
const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("/", "Dashboard", "dashboard"),
    ("/customers", "Customers", "customers"),
    ("/dishes", "Dishes", "dishes"),
    ("/orders", "Orders", "orders"),
];

/// `/orders/3` keeps "Orders" highlighted; `/` only matches itself
fn is_active(path: &str, current: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current == path || current.starts_with(&format!("{}/", path))
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ITEMS.into_iter().map(|(path, title, icon_name)| {
                    view! {
                        <li class:active=move || pathname.with(|current| is_active(path, current))>
                            <A href=path>
                                {icon(icon_name)}
                                <span>{title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/orders"));
        assert!(is_active("/orders", "/orders/3"));
        assert!(!is_active("/orders", "/ordersx"));
        assert!(is_active("/dishes", "/dishes"));
    }
}
