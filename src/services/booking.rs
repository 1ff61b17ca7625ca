use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{
    BookingDraft, BookingRecord, Field, FormEvent, SubmissionPhase, ValidationState,
};
use crate::services::clock::{Clock, SystemClock};
use crate::services::validation::validate_draft;
use crate::store::{self, RecordStore, SqliteStore};

/// Mediates between raw form input and a validated, persisted appointment
/// request. The presentation shell reads the draft, per-field errors and
/// submission phase from here and issues `update_field` / `submit` /
/// `reset` in response to user input.
pub struct BookingFormController {
    draft: BookingDraft,
    errors: ValidationState,
    phase: SubmissionPhase,
    store: Box<dyn RecordStore>,
    clock: Box<dyn Clock>,
    submit_delay: Duration,
    events: broadcast::Sender<FormEvent>,
}

impl BookingFormController {
    pub fn new(
        store: Box<dyn RecordStore>,
        clock: Box<dyn Clock>,
        submit_delay: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            draft: BookingDraft::default(),
            errors: ValidationState::new(),
            phase: SubmissionPhase::Idle,
            store,
            clock,
            submit_delay,
            events,
        }
    }

    /// Wire the controller against the configured SQLite store and the
    /// system clock.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let store = SqliteStore::open(&config.database_url)?;
        Ok(Self::new(
            Box::new(store),
            Box::new(SystemClock),
            config.submit_delay(),
        ))
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationState {
        &self.errors
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// The confirmed record, once the phase is Succeeded.
    pub fn record(&self) -> Option<&BookingRecord> {
        match &self.phase {
            SubmissionPhase::Succeeded(record) => Some(record),
            _ => None,
        }
    }

    /// Earliest selectable date, for the shell's date-input floor.
    pub fn min_date(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    /// Overwrite one draft field. Any error recorded for that field is
    /// cleared optimistically; correctness is re-checked at submit time.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Run every field validator against the current draft and store the
    /// outcome for the view.
    pub fn validate(&mut self) -> &ValidationState {
        self.errors = validate_draft(&self.draft, self.clock.today());
        &self.errors
    }

    /// Validate, then run the simulated submission: a fixed delay followed
    /// by an append to the persisted appointment list. Validation failures
    /// surface through `errors()`, not as an `Err`; only a persistence
    /// failure is returned, in which case the phase falls back to Idle with
    /// the draft retained.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        if !self.phase.is_idle() {
            tracing::warn!(phase = self.phase.as_str(), "submit ignored");
            return Ok(());
        }

        if !self.validate().is_empty() {
            tracing::info!(failed_fields = self.errors.len(), "booking rejected by validation");
            return Ok(());
        }

        self.phase = SubmissionPhase::Submitting;
        tokio::time::sleep(self.submit_delay).await;

        let record = BookingRecord::from_draft(&self.draft, self.clock.now());
        if let Err(e) = store::append_appointment(self.store.as_ref(), &record).await {
            tracing::error!(store = self.store.name(), error = %e, "failed to persist booking");
            self.phase = SubmissionPhase::Idle;
            return Err(e);
        }

        tracing::info!(
            id = %record.id,
            date = %record.date,
            time = %record.time,
            appointment_type = %record.appointment_type,
            "appointment booked"
        );

        let _ = self.events.send(FormEvent::Confirmed {
            id: record.id.clone(),
        });
        self.phase = SubmissionPhase::Succeeded(record);
        Ok(())
    }

    /// Clear the draft, errors and phase. Previously persisted records are
    /// untouched.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::default();
        self.errors = ValidationState::new();
        self.phase = SubmissionPhase::Idle;
    }
}
