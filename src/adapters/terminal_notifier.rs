use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::core::interfaces::ports::Notifier;
use crate::core::models::{Toast, ToastId};

struct ActiveToast {
    id: ToastId,
    toast: Toast,
    shown_at: Instant,
}

impl ActiveToast {
    fn is_expired(&self, now: Instant) -> bool {
        self.toast
            .duration
            .is_some_and(|duration| now.duration_since(self.shown_at) >= duration)
    }
}

/// Prints toasts to stderr and keeps the ones that are still on screen.
pub struct TerminalNotifier {
    next_id: AtomicU64,
    active: Mutex<Vec<ActiveToast>>,
    echo: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            active: Mutex::new(Vec::new()),
            echo: true,
        }
    }

    #[cfg(test)]
    fn silent() -> Self {
        Self {
            echo: false,
            ..Self::new()
        }
    }

    fn lock_active(&self) -> MutexGuard<'_, Vec<ActiveToast>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(toast: &Toast) -> String {
        match &toast.description {
            Some(description) => format!("{} {}: {}", toast.kind.tag(), toast.title, description),
            None => format!("{} {}", toast.kind.tag(), toast.title),
        }
    }

    /// The most recently shown toast that has neither expired nor been dismissed.
    pub fn visible_toast(&self) -> Option<Toast> {
        let now = Instant::now();
        let mut active = self.lock_active();
        active.retain(|entry| !entry.is_expired(now));
        active.last().map(|entry| entry.toast.clone())
    }

    pub fn active_count(&self) -> usize {
        let now = Instant::now();
        let mut active = self.lock_active();
        active.retain(|entry| !entry.is_expired(now));
        active.len()
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn show(&self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::SeqCst));
        if self.echo {
            eprintln!("{}", Self::render(&toast));
        }
        log::debug!("[TOAST] Showing {}", id);

        self.lock_active().push(ActiveToast {
            id,
            toast,
            shown_at: Instant::now(),
        });
        id
    }

    fn dismiss(&self, id: ToastId) {
        log::debug!("[TOAST] Dismissing {}", id);
        self.lock_active().retain(|entry| entry.id != id);
    }
}
