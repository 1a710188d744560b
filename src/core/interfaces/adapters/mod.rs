mod analytics_sink;
mod api_client;

pub use analytics_sink::AnalyticsSink;
pub use api_client::{decode_response, ApiClient, FormValue, HttpMethod, RequestOptions};
