//! Renders the toast stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn Toaster(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let loading = toast.kind == ToastKind::Loading;
                        view! {
                            <div class=format!("toast toast--{}", toast.kind.class_suffix()) role="status">
                                {loading.then(|| view! { <span class="toast__spinner" aria-hidden="true"></span> })}
                                <span class="toast__message">{toast.message}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
