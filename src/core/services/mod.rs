mod analytics;
pub mod language_catalog;
mod theme_service;
mod toast_service;
pub mod wisdom_quotes;

pub use analytics::{AnalyticsEvent, AnalyticsTracker, CopyTarget};
pub use theme_service::ThemeService;
pub use toast_service::{LoadingToast, ToastService};
