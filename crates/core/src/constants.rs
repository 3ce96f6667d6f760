//! Shared constants for hit-counter.

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE_NAME: &str = "uuid";

/// Width of the `session_id` column. Longer identifiers are rejected by the database.
pub const SESSION_ID_MAX_LEN: usize = 36;

/// Fixed pool size (min = max).
pub const PG_POOL_SIZE: u32 = 4;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Default PostgreSQL port when the connect string omits one.
pub const PG_DEFAULT_PORT: u16 = 5432;

/// Environment variable holding the database user.
pub const ENV_DB_USERNAME: &str = "HIT_COUNTER_DB_USERNAME";

/// Environment variable holding the database password.
pub const ENV_DB_PASSWORD: &str = "HIT_COUNTER_DB_PASSWORD";

/// Environment variable holding the `host[:port]/database` connect string.
pub const ENV_DB_CONNECTSTRING: &str = "HIT_COUNTER_DB_CONNECTSTRING";

/// Environment variable overriding [`PG_POOL_SIZE`].
pub const ENV_POOL_SIZE: &str = "HIT_COUNTER_POOL_SIZE";

/// Environment variable overriding [`PG_POOL_ACQUIRE_TIMEOUT_SECS`].
pub const ENV_ACQUIRE_TIMEOUT_SECS: &str = "HIT_COUNTER_ACQUIRE_TIMEOUT_SECS";
