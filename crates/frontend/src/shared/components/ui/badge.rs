use contracts::domain::a003_order::aggregate::OrderStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Info => "badge--info",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }

    pub fn for_order_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => BadgeVariant::Warning,
            OrderStatus::Preparing => BadgeVariant::Info,
            OrderStatus::Ready => BadgeVariant::Primary,
            OrderStatus::Delivered => BadgeVariant::Success,
            OrderStatus::Cancelled => BadgeVariant::Error,
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: Signal<BadgeVariant>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", variant.get().class())>
            {children()}
        </span>
    }
}

/// Active / Inactive pill
#[component]
pub fn ActiveBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || if active.get() { "badge badge--success" } else { "badge badge--error" }>
            {move || if active.get() { "Active" } else { "Inactive" }}
        </span>
    }
}

#[component]
pub fn OrderStatusBadge(#[prop(into)] status: Signal<OrderStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", BadgeVariant::for_order_status(status.get()).class())>
            {move || status.get().label()}
        </span>
    }
}
