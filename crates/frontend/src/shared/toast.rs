//! Single active toast with auto-dismiss.
//!
//! Showing a new toast overwrites the current one; there is no queue.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::DEFAULT_TOAST_DURATION_MS;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "x-circle",
            ToastKind::Warning => "alert-triangle",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub show: bool,
    pub kind: ToastKind,
    pub message: String,
    seq: u64,
}

impl ToastState {
    /// Replaces the current toast; the returned token identifies this one
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.show = true;
        self.kind = kind;
        self.message = message.into();
        self.seq
    }

    /// Hides the toast only if it is still the one `seq` refers to
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.show && self.seq == seq {
            self.show = false;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudAction {
    Create,
    Update,
    Delete,
    Activate,
    Deactivate,
    ChangeStatus,
}

impl CrudAction {
    pub fn for_active(active: bool) -> Self {
        if active {
            CrudAction::Activate
        } else {
            CrudAction::Deactivate
        }
    }

    fn past(&self) -> &'static str {
        match self {
            CrudAction::Create => "created",
            CrudAction::Update => "updated",
            CrudAction::Delete => "deleted",
            CrudAction::Activate => "activated",
            CrudAction::Deactivate => "deactivated",
            CrudAction::ChangeStatus => "status updated",
        }
    }

    fn gerund(&self) -> &'static str {
        match self {
            CrudAction::Create => "creating",
            CrudAction::Update => "updating",
            CrudAction::Delete => "deleting",
            CrudAction::Activate => "activating",
            CrudAction::Deactivate => "deactivating",
            CrudAction::ChangeStatus => "updating status of",
        }
    }
}

/// `Customer "Lucas" created successfully` / `Error creating customer "Lucas"`
pub fn toast_message(action: CrudAction, label: &str, name: &str, ok: bool) -> String {
    if ok {
        format!("{} \"{}\" {} successfully", capitalize(label), name, action.past())
    } else {
        format!("Error {} {} \"{}\"", action.gerund(), label, name)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shows the outcome of a mutation
pub fn notify(toast: RwSignal<ToastState>, action: CrudAction, label: &str, name: &str, ok: bool) {
    let kind = if ok { ToastKind::Success } else { ToastKind::Error };
    let message = toast_message(action, label, name, ok);
    toast.update(|t| {
        t.show(kind, message);
    });
}

/// Renders the active toast and hides it after `duration_ms`
#[component]
pub fn ToastHost(
    toast: RwSignal<ToastState>,
    #[prop(optional)]
    duration_ms: Option<u32>,
) -> impl IntoView {
    let duration = duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS);
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let (show, seq) = toast.with(|t| (t.show, t.seq()));
        // Dropping the previous timeout cancels it
        if show {
            let timeout = Timeout::new(duration, move || {
                toast.update(|t| {
                    t.dismiss(seq);
                });
            });
            timer.set_value(Some(timeout));
        } else {
            timer.set_value(None);
        }
    });

    view! {
        <Show when=move || toast.with(|t| t.show)>
            {move || {
                let (kind, message) = toast.with(|t| (t.kind, t.message.clone()));
                view! {
                    <div class=format!("toast toast--{}", kind.as_str()) role="status">
                        <span class="toast__icon">{icon(kind.icon_name())}</span>
                        <span class="toast__message">{message}</span>
                        <button
                            class="toast__close"
                            title="Close"
                            on:click=move |_| toast.update(|t| t.close())
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_overwrites_previous_toast() {
        let mut state = ToastState::default();
        let first = state.show(ToastKind::Success, "first");
        let second = state.show(ToastKind::Error, "second");

        assert_ne!(first, second);
        assert!(state.show);
        assert_eq!(state.kind, ToastKind::Error);
        assert_eq!(state.message, "second");
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_toast() {
        let mut state = ToastState::default();
        let first = state.show(ToastKind::Success, "first");
        let second = state.show(ToastKind::Info, "second");

        assert!(!state.dismiss(first));
        assert!(state.show);
        assert!(state.dismiss(second));
        assert!(!state.show);
        assert!(!state.dismiss(second));
    }

    #[test]
    fn test_toast_message() {
        assert_eq!(
            toast_message(CrudAction::Create, "customer", "Lucas", true),
            "Customer \"Lucas\" created successfully"
        );
        assert_eq!(
            toast_message(CrudAction::Create, "customer", "Lucas", false),
            "Error creating customer \"Lucas\""
        );
        assert_eq!(
            toast_message(CrudAction::for_active(false), "dish", "Pasta al Pesto", true),
            "Dish \"Pasta al Pesto\" deactivated successfully"
        );
        assert_eq!(
            toast_message(CrudAction::ChangeStatus, "order", "Lucas", false),
            "Error updating status of order \"Lucas\""
        );
    }
}
