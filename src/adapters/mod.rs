mod file_client_storage;
mod http_api_client;
mod log_analytics_sink;
mod terminal_notifier;

pub use file_client_storage::FileClientStorage;
pub use http_api_client::HttpApiClient;
pub use log_analytics_sink::LogAnalyticsSink;
pub use terminal_notifier::TerminalNotifier;
