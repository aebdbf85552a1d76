use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Which dialog a list view currently shows; at most one at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
    ConfirmDelete(T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_form(&self) -> bool {
        matches!(self, ModalState::Create | ModalState::Edit(_))
    }

    /// Record being edited, `None` in create mode
    pub fn editing(&self) -> Option<&T> {
        match self {
            ModalState::Edit(item) => Some(item),
            _ => None,
        }
    }

    pub fn deleting(&self) -> Option<&T> {
        match self {
            ModalState::ConfirmDelete(item) => Some(item),
            _ => None,
        }
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional footer with the action buttons
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let key_handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}

/// Yes/no dialog used before destructive actions
#[component]
pub fn ConfirmationModal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: Option<String>,
    #[prop(into)]
    pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--danger"
                    disabled=move || pending.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {
                        let confirm_label = confirm_label.clone();
                        move || if pending.get() { "Deleting...".to_string() } else { confirm_label.clone() }
                    }
                </button>
            }
        >
            <p class="modal-message">{message}</p>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_state() {
        let closed: ModalState<i64> = ModalState::default();
        assert!(!closed.is_open());

        let edit = ModalState::Edit(7);
        assert!(edit.is_form());
        assert_eq!(edit.editing(), Some(&7));
        assert_eq!(edit.deleting(), None);

        let delete = ModalState::ConfirmDelete(7);
        assert!(delete.is_open());
        assert!(!delete.is_form());
        assert_eq!(delete.deleting(), Some(&7));
        assert!(ModalState::<i64>::Create.editing().is_none());
    }
}
