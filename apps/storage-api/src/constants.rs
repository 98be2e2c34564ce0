pub const SERVICE: &str = "storage-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const STORAGE_API_PORT: &str = "STORAGE_API_PORT";
pub const DATA_PATH: &str = "DATA_PATH";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "/data/output.txt";

// Middleware configuration
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
