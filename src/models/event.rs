use serde::Serialize;

/// Notifications fanned out to the presentation shell after state changes
/// it cannot observe synchronously.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FormEvent {
    /// A booking was confirmed; the shell should bring the booking section
    /// into view.
    Confirmed { id: String },
}
