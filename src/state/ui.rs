//! Transient UI state: toasts and loading spinners.
//!
//! DESIGN
//! ======
//! Every toast and spinner gets its own handle from a shared counter, so two
//! concurrent indicators never collide on an element id. The host owns one
//! `UiState` inside an `RwSignal` and passes it to the helpers that mutate it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::DEFAULT_TOAST_TIMEOUT_MS;

/// Handle for one toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Handle for one loading spinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpinnerId(pub u64);

impl SpinnerId {
    /// DOM id of the spinner element for this handle.
    pub fn element_id(self) -> String {
        format!("loading-spinner-{}", self.0)
    }
}

/// Toast severity, named after the UI library's contextual alert classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Full class list for a dismissible alert of this kind.
    pub fn alert_class(self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// UI state for toasts and spinners.
#[derive(Clone, Debug)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    pub spinners: Vec<SpinnerId>,
    /// Delay before a toast removes itself.
    pub toast_timeout_ms: u32,
    next_id: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self::with_toast_timeout(DEFAULT_TOAST_TIMEOUT_MS)
    }
}

impl UiState {
    pub fn with_toast_timeout(toast_timeout_ms: u32) -> Self {
        Self { toasts: Vec::new(), spinners: Vec::new(), toast_timeout_ms, next_id: 0 }
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Append a toast and return its handle.
    pub fn push_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.allocate());
        self.toasts.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Register a new spinner and return its handle.
    pub fn begin_loading(&mut self) -> SpinnerId {
        let id = SpinnerId(self.allocate());
        self.spinners.push(id);
        id
    }

    /// Unregister a spinner. Returns `false` if it was not registered.
    pub fn end_loading(&mut self, id: SpinnerId) -> bool {
        let before = self.spinners.len();
        self.spinners.retain(|s| *s != id);
        self.spinners.len() != before
    }

    pub fn is_loading(&self) -> bool {
        !self.spinners.is_empty()
    }
}
