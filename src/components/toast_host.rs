//! Fixed-position stack rendering every active toast.

use leptos::prelude::*;

use crate::state::ui::{Toast, UiState};
use crate::util::toast::dismiss_toast;

const HOST_STYLE: &str = "top: 20px; right: 20px; z-index: 9999; min-width: 300px;";

/// Renders `UiState::toasts` as dismissible alerts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host position-fixed" style=HOST_STYLE>
            <For
                each=move || ui.get().toasts
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.alert_class() role="alert">
                            {toast.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    dismiss_toast(ui, id);
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
