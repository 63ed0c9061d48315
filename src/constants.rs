/// Default base URL of the Ubidots REST API. Paths are appended verbatim.
pub const DEFAULT_BASE_URL: &str = "http://things.ubidots.com/api/v1.6/";
/// Path of the token exchange endpoint, relative to the base URL
pub const AUTH_TOKEN_PATH: &str = "auth/token";
/// Header carrying the raw API key on the token exchange request
pub const API_KEY_HEADER: &str = "X-UBIDOTS-APIKEY";
/// Header carrying the session token on every data request
pub const AUTH_TOKEN_HEADER: &str = "X-AUTH-TOKEN";
/// Content type header name
pub const CONTENT_TYPE_HEADER: &str = "content-type";
/// Content type sent on every request
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of attempts made by the auth-failure retry layer
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;
/// Status codes that signal an expired or rejected session token
pub const DEFAULT_AUTH_FAILURE_CODES: [u16; 2] = [401, 403];
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = "ubidots-client/0.1.0";
