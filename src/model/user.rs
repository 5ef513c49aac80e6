use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of the logged-in Discord identity shown on the dashboard.
#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub logged_in_at: DateTime<Utc>,
}
