mod client_storage;
mod notifier;

pub use client_storage::ClientStorage;
pub use notifier::Notifier;
