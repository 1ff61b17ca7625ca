use crate::models::BookingRecord;

/// Submission lifecycle: Idle -> Submitting -> Succeeded, back to Idle via
/// reset. Succeeded carries the confirmed record for the view to display.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded(BookingRecord),
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded(_) => "succeeded",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionPhase::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded(_))
    }
}
