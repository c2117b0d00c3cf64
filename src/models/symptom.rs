use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-reported complaint. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub severity: u8,
    pub duration: String,
    pub recorded_at: DateTime<Utc>,
}
