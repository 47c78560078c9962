/// Default base URL of the Base44 REST API
pub const DEFAULT_BASE_URL: &str = "https://app.base44.com/api";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Header carrying the application API key
pub const API_KEY_HEADER: &str = "api_key";
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("base44-client/", env!("CARGO_PKG_VERSION"));
