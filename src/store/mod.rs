pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::BookingRecord;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage key for the submitted appointment list.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Opaque key-value persistence sink. Values are strings; the appointment
/// list is stored as one JSON array and rewritten whole on every append.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn save(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Backend name, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Decode the stored appointment list. A missing key or an unreadable value
/// yields an empty list, never an error.
pub async fn load_appointments(store: &dyn RecordStore) -> Result<Vec<BookingRecord>, AppError> {
    let raw = store.load(APPOINTMENTS_KEY).await?;
    let records = match raw.as_deref() {
        Some(s) => serde_json::from_str(s).unwrap_or_else(|e| {
            tracing::warn!(
                store = store.name(),
                error = %e,
                "stored appointments unreadable, treating as empty"
            );
            Vec::new()
        }),
        None => Vec::new(),
    };
    Ok(records)
}

/// Read-modify-write append of one confirmed booking.
pub async fn append_appointment(
    store: &dyn RecordStore,
    record: &BookingRecord,
) -> Result<(), AppError> {
    let mut records = load_appointments(store).await?;
    records.push(record.clone());
    let encoded = serde_json::to_string(&records)?;
    store.save(APPOINTMENTS_KEY, &encoded).await
}
