//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Toasts carry a severity and an independent show/dismiss lifecycle. Loading
//! toasts stay up until dismissed; every other kind expires on its own in the
//! browser. Workflows talk to the surface through [`Notify`] so they can run
//! against a plain recorder in tests.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a non-loading toast stays visible in the browser.
#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

pub type ToastId = u64;

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Indeterminate progress; dismissed manually.
    Loading,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// Whether toasts of this kind dismiss themselves.
    pub fn expires(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// CSS modifier used by the toaster.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: ToastId,
}

impl ToastState {
    /// Show a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Number of visible toasts of `kind`.
    #[must_use]
    pub fn count(&self, kind: ToastKind) -> usize {
        self.items.iter().filter(|t| t.kind == kind).count()
    }
}

/// Sink for user-visible notifications.
pub trait Notify {
    fn show(&self, kind: ToastKind, message: &str) -> ToastId;
    fn dismiss(&self, id: ToastId);
}

impl Notify for RwSignal<ToastState> {
    fn show(&self, kind: ToastKind, message: &str) -> ToastId {
        let id = self.try_update(|s| s.push(kind, message)).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        {
            if kind.expires() {
                let toasts = *self;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(TOAST_TTL).await;
                    toasts.update(|s| {
                        s.dismiss(id);
                    });
                });
            }
        }
        id
    }

    fn dismiss(&self, id: ToastId) {
        self.update(|s| {
            s.dismiss(id);
        });
    }
}

/// A loading toast that is dismissed when the guard drops.
///
/// Tie the guard to the lifetime of the call it reports on; every exit path
/// then dismisses the toast exactly once.
pub struct LoadingToast<'a, N: Notify + ?Sized> {
    notices: &'a N,
    id: ToastId,
}

impl<'a, N: Notify + ?Sized> LoadingToast<'a, N> {
    pub fn show(notices: &'a N, message: &str) -> Self {
        let id = notices.show(ToastKind::Loading, message);
        Self { notices, id }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }
}

impl<N: Notify + ?Sized> Drop for LoadingToast<'_, N> {
    fn drop(&mut self) {
        self.notices.dismiss(self.id);
    }
}
