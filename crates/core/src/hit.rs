use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded visit: the `hits`-th request seen for `session_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRecord {
    pub session_id: String,
    pub hits: i64,
    pub ts: DateTime<Utc>,
}
