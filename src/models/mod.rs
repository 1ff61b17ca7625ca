pub mod draft;
pub mod event;
pub mod record;
pub mod submission;
pub mod validation;

pub use draft::{AppointmentType, BookingDraft, Field, TIME_SLOTS};
pub use event::FormEvent;
pub use record::BookingRecord;
pub use submission::SubmissionPhase;
pub use validation::ValidationState;
