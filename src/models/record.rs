use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::BookingDraft;

/// Immutable snapshot of a successfully submitted draft. This is the shape
/// persisted under the "appointments" key, camelCase field names included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub appointment_type: String,
    pub date: String,
    pub time: String,
    pub message: String,
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Snapshot a draft that already passed validation. The id is a UUIDv7,
    /// so records sort by creation time.
    pub fn from_draft(draft: &BookingDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            appointment_type: draft.appointment_type.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            message: draft.message.clone(),
            id: Uuid::now_v7().to_string(),
            created_at,
        }
    }
}
