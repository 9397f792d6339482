/// Upper bound on any single storage round-trip.
pub const STORE_TIMEOUT_SECONDS: u64 = 5;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const BEARER_PREFIX: &str = "Bearer ";

/// Api keys are machine credentials; they rotate by redeployment, not expiry.
pub const API_KEY_TTL_SECONDS: i64 = 60 * 60 * 24 * 365 * 2;
