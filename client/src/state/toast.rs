//! Transient notification state (success and error toasts).
//!
//! DESIGN
//! ======
//! Mutation outcomes are communicated through toasts because the creation
//! panel closes before the network result arrives. State is a plain list
//! with push/dismiss transitions so outcome plumbing stays renderer-free.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Active toasts plus a monotonic id source.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a success toast and return its id.
    pub fn push_success(&mut self, title: &str, message: &str) -> u64 {
        self.push(ToastKind::Success, title, message)
    }

    /// Append an error toast and return its id.
    pub fn push_error(&mut self, title: &str, message: &str) -> u64 {
        self.push(ToastKind::Error, title, message)
    }

    fn push(&mut self, kind: ToastKind, title: &str, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
