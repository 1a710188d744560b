use crate::core::models::{Toast, ToastId};

pub trait Notifier: Send + Sync {
    fn show(&self, toast: Toast) -> ToastId;

    fn dismiss(&self, id: ToastId);
}
