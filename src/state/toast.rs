//! Transient notification state, the side channel for auth outcomes.
//!
//! The session store pushes here instead of surfacing errors to callers;
//! the `Toaster` component renders whatever is queued.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of visible notifications with monotonically increasing ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u32,
}

impl ToastState {
    pub fn push_success(&mut self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    pub fn push_error(&mut self, message: &str) {
        self.push(ToastLevel::Error, message);
    }

    fn push(&mut self, level: ToastLevel, message: &str) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.to_owned(),
        });
    }

    /// Remove one notification by id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }
}
