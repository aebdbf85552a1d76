use crate::dashboards::OverviewDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_dish::ui::list::DishList;
use crate::domain::a003_order::ui::details::OrderDetailPage;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="table-message">"Page not found"</div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Navbar /> }.into_any()
                center=|| view! {
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=OverviewDashboard />
                        <Route path=path!("/customers") view=CustomerList />
                        <Route path=path!("/dishes") view=DishList />
                        <Route path=path!("/orders") view=OrderList />
                        <Route path=path!("/orders/:id") view=OrderDetailPage />
                    </Routes>
                }.into_any()
            />
        </Router>
    }
}
